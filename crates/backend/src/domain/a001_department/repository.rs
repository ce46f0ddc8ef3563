use anyhow::Result;
use contracts::domain::a001_department::aggregate::Department;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

#[derive(Debug, FromQueryResult)]
struct DepartmentRow {
    id: i64,
    slug: String,
    name: String,
    district: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Self {
            id: row.id,
            slug: row.slug,
            name: row.name,
            district: row.district,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Department>> {
    let stmt = Statement::from_string(
        DatabaseBackend::Sqlite,
        "SELECT id, slug, name, district FROM departments ORDER BY name;".to_string(),
    );
    let rows = DepartmentRow::find_by_statement(stmt).all(db).await?;
    Ok(rows.into_iter().map(Department::from).collect())
}

pub async fn find_by_slug(db: &DatabaseConnection, slug: &str) -> Result<Option<Department>> {
    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "SELECT id, slug, name, district FROM departments WHERE slug = ?;",
        [slug.into()],
    );
    let row = DepartmentRow::find_by_statement(stmt).one(db).await?;
    Ok(row.map(Department::from))
}
