use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_department::aggregate::Department;

use crate::domain::a001_department;

/// GET /api/departments
pub async fn list_all() -> Result<Json<Vec<Department>>, StatusCode> {
    match a001_department::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list departments: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/departments/:slug
pub async fn get_by_slug(Path(slug): Path<String>) -> Result<Json<Department>, StatusCode> {
    match a001_department::service::get_by_slug(&slug).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load department {}: {:#}", slug, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
