use anyhow::{Context, Result};
use contracts::shared::tabular::{Dataset, Record};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use super::sections::SectionDef;

/// Column names of a table in declaration order.
pub async fn table_columns(db: &DatabaseConnection, table: &str) -> Result<Vec<String>> {
    let pragma = format!("PRAGMA table_info('{}');", table);
    let rows = db
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, pragma))
        .await?;

    let mut columns = Vec::with_capacity(rows.len());
    for row in rows {
        let name: String = row.try_get("", "name")?;
        columns.push(name);
    }
    Ok(columns)
}

/// Rows of a section's table for one department, as ordered records.
///
/// SQLite assembles each row with `json_object` in the table's column order,
/// so every column keeps its native type (integer, real, text, null) and
/// reaches the column inference step in schema order.
pub async fn fetch_records(
    db: &DatabaseConnection,
    section: &SectionDef,
    department_id: i64,
) -> Result<Dataset> {
    let columns = table_columns(db, section.table).await?;
    if columns.is_empty() {
        anyhow::bail!("table {} has no columns", section.table);
    }

    let pairs = columns
        .iter()
        .map(|c| format!("'{c}', \"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "SELECT json_object({}) AS row_json FROM {} WHERE department_id = ? ORDER BY {}",
        pairs, section.table, section.order_by
    );

    let rows = db
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &sql,
            [department_id.into()],
        ))
        .await?;

    let mut records: Dataset = Vec::with_capacity(rows.len());
    for row in rows {
        let text: String = row.try_get("", "row_json")?;
        let record: Record = serde_json::from_str(&text)
            .with_context(|| format!("invalid row from {}", section.table))?;
        records.push(record);
    }

    tracing::trace!("{} rows from {}", records.len(), section.table);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;

    #[tokio::test]
    async fn test_table_columns_in_declaration_order() {
        let conn = memory_connection().await;
        let columns = table_columns(&conn, "land_resources").await.unwrap();
        assert_eq!(
            columns,
            vec![
                "id",
                "department_id",
                "land_type",
                "area_acres",
                "location",
                "remarks",
                "created_at"
            ]
        );
    }
}
