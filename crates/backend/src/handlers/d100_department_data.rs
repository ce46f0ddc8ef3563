use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use contracts::dashboards::d100_department_data::{DepartmentDataResponse, SectionData};

use crate::dashboards::d100_department_data::{export, service, DataError};

fn log_failure(context: &str, err: &DataError) -> StatusCode {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!("{}: {:#}", context, err);
    } else {
        tracing::warn!("{}: {}", context, err);
    }
    status
}

/// GET /api/departments/:slug/data
pub async fn get_department_data(
    Path(slug): Path<String>,
) -> Result<Json<DepartmentDataResponse>, StatusCode> {
    service::get_department_data(&slug)
        .await
        .map(Json)
        .map_err(|e| log_failure("Department data", &e))
}

/// GET /api/departments/:slug/data/:section
pub async fn get_section(
    Path((slug, section)): Path<(String, String)>,
) -> Result<Json<SectionData>, StatusCode> {
    service::get_section_data(&slug, &section)
        .await
        .map(Json)
        .map_err(|e| log_failure("Section data", &e))
}

/// GET /api/departments/:slug/data/:section/csv
pub async fn export_section_csv(
    Path((slug, section)): Path<(String, String)>,
) -> Result<impl IntoResponse, StatusCode> {
    let data = service::get_section_data(&slug, &section)
        .await
        .map_err(|e| log_failure("Section export", &e))?;

    let body = export::section_to_csv(&data).map_err(|e| {
        tracing::error!("CSV export of {}/{} failed: {:#}", slug, section, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::csv_file_name(&slug, &data.key)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
