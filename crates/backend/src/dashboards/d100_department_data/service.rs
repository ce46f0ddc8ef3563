use contracts::dashboards::d100_department_data::{DepartmentDataResponse, SectionData};
use contracts::domain::a001_department::aggregate::Department;
use sea_orm::DatabaseConnection;

use super::error::DataError;
use super::repository;
use super::sections::{find_section, SectionDef, SECTIONS};
use crate::domain::a001_department::repository as department_repository;
use crate::shared::data::db::get_connection;

/// All sections of a department page
pub async fn get_department_data(slug: &str) -> Result<DepartmentDataResponse, DataError> {
    let db = get_connection()?;
    load_department_data(db, slug).await
}

/// One section of a department page
pub async fn get_section_data(slug: &str, section_key: &str) -> Result<SectionData, DataError> {
    let db = get_connection()?;
    load_section_data(db, slug, section_key).await
}

pub async fn load_department_data(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<DepartmentDataResponse, DataError> {
    let department = find_department(db, slug).await?;

    let mut sections = Vec::with_capacity(SECTIONS.len());
    for section in SECTIONS {
        sections.push(build_section(db, section, &department).await?);
    }

    Ok(DepartmentDataResponse {
        department,
        sections,
    })
}

pub async fn load_section_data(
    db: &DatabaseConnection,
    slug: &str,
    section_key: &str,
) -> Result<SectionData, DataError> {
    let section = find_section(section_key)
        .ok_or_else(|| DataError::UnknownSection(section_key.to_string()))?;
    let department = find_department(db, slug).await?;
    build_section(db, section, &department).await
}

async fn find_department(db: &DatabaseConnection, slug: &str) -> Result<Department, DataError> {
    department_repository::find_by_slug(db, slug)
        .await?
        .ok_or_else(|| DataError::UnknownDepartment(slug.to_string()))
}

async fn build_section(
    db: &DatabaseConnection,
    section: &SectionDef,
    department: &Department,
) -> Result<SectionData, DataError> {
    let records = repository::fetch_records(db, section, department.id).await?;
    let summaries = section
        .summary_specs()
        .iter()
        .map(|spec| spec.evaluate(&records))
        .collect();

    tracing::debug!(
        "Section {} for {}: {} records",
        section.key,
        department.slug,
        records.len()
    );

    Ok(SectionData {
        key: section.key.to_string(),
        title: section.title.to_string(),
        status_field: section.status_field.map(str::to_string),
        records,
        summaries,
    })
}
