use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

use crate::shared::config::{get_database_path, Config};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Bootstrap schema: `(table, CREATE statement)`.
const SCHEMA: [(&str, &str); 5] = [
    (
        "departments",
        r#"
        CREATE TABLE departments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            slug TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            district TEXT NOT NULL,
            created_at TEXT
        );
        "#,
    ),
    (
        "stock_items",
        r#"
        CREATE TABLE stock_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            department_id INTEGER NOT NULL REFERENCES departments(id),
            serial_no INTEGER NOT NULL,
            item_name TEXT NOT NULL,
            unit TEXT,
            quantity INTEGER NOT NULL DEFAULT 0,
            status TEXT,
            created_at TEXT
        );
        "#,
    ),
    (
        "staff_vacancies",
        r#"
        CREATE TABLE staff_vacancies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            department_id INTEGER NOT NULL REFERENCES departments(id),
            serial_no INTEGER NOT NULL,
            designation TEXT NOT NULL,
            bps INTEGER,
            sanctioned INTEGER NOT NULL DEFAULT 0,
            filled INTEGER NOT NULL DEFAULT 0,
            vacant INTEGER NOT NULL DEFAULT 0,
            created_at TEXT
        );
        "#,
    ),
    (
        "lab_equipment",
        r#"
        CREATE TABLE lab_equipment (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            department_id INTEGER NOT NULL REFERENCES departments(id),
            serial_no INTEGER NOT NULL,
            equipment_name TEXT NOT NULL,
            lab_name TEXT,
            quantity INTEGER NOT NULL DEFAULT 1,
            status TEXT,
            created_at TEXT
        );
        "#,
    ),
    (
        "land_resources",
        r#"
        CREATE TABLE land_resources (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            department_id INTEGER NOT NULL REFERENCES departments(id),
            land_type TEXT NOT NULL,
            area_acres REAL NOT NULL DEFAULT 0,
            location TEXT,
            remarks TEXT,
            created_at TEXT
        );
        "#,
    ),
];

/// Opens the SQLite database from configuration, creates missing tables and
/// optionally seeds demo data.
pub async fn initialize_database(config: &Config) -> anyhow::Result<()> {
    let db_file = get_database_path(config)?;
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    if config.data.seed_demo {
        super::seed::seed_demo_data(&conn).await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Creates every table of the bootstrap schema that does not exist yet.
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, create_sql) in SCHEMA {
        if table_exists(conn, table).await? {
            tracing::debug!("Table {} already exists", table);
            continue;
        }
        tracing::info!("Creating {} table", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub async fn table_exists(conn: &DatabaseConnection, table: &str) -> anyhow::Result<bool> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            [table.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}

/// In-memory database with the bootstrap schema, for tests.
#[cfg(test)]
pub async fn memory_connection() -> DatabaseConnection {
    // one pooled connection, otherwise every connection gets its own empty database
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);
    let conn = Database::connect(options).await.unwrap();
    bootstrap_schema(&conn).await.unwrap();
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_creates_all_tables() {
        let conn = memory_connection().await;
        for (table, _) in SCHEMA {
            assert!(table_exists(&conn, table).await.unwrap(), "{table} missing");
        }
        assert!(!table_exists(&conn, "unknown_table").await.unwrap());
    }

    #[tokio::test]
    async fn test_bootstrap_is_repeatable() {
        let conn = memory_connection().await;
        bootstrap_schema(&conn).await.unwrap();
        assert!(table_exists(&conn, "departments").await.unwrap());
    }
}
