use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl DataError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DataError::UnknownDepartment(_) | DataError::UnknownSection(_) => {
                StatusCode::NOT_FOUND
            }
            DataError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
