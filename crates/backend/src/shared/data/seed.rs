//! Demo data for an empty database.

use chrono::Utc;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, Statement,
    TransactionTrait, Value,
};

struct DemoDepartment {
    slug: &'static str,
    name: &'static str,
    district: &'static str,
    /// (item_name, unit, quantity, status)
    stock: &'static [(&'static str, &'static str, i64, &'static str)],
    /// (designation, bps, sanctioned, filled)
    vacancies: &'static [(&'static str, i64, i64, i64)],
    /// (equipment_name, lab_name, quantity, status)
    equipment: &'static [(&'static str, &'static str, i64, &'static str)],
    /// (land_type, area_acres, location, remarks)
    land: &'static [(&'static str, f64, &'static str, Option<&'static str>)],
}

const DEMO_DEPARTMENTS: &[DemoDepartment] = &[
    DemoDepartment {
        slug: "mnsuam-multan",
        name: "MNS University of Agriculture",
        district: "Multan",
        stock: &[
            ("Urea Fertilizer", "Bags", 120, "In Stock"),
            ("Wheat Seed (Akbar-19)", "Kg", 850, "In Stock"),
            ("Pesticide Sprayer", "Units", 6, "Low Stock"),
            ("Drip Irrigation Pipe", "Meters", 0, "Out of Stock"),
        ],
        vacancies: &[
            ("Professor", 21, 8, 5),
            ("Associate Professor", 20, 12, 9),
            ("Assistant Professor", 19, 30, 24),
            ("Lab Assistant", 11, 15, 10),
        ],
        equipment: &[
            ("Compound Microscope", "Plant Pathology Lab", 12, "Functional"),
            ("PCR Thermal Cycler", "Biotechnology Lab", 2, "Non-Functional"),
            ("Soil pH Meter", "Soil Science Lab", 5, "Functional"),
            ("Spectrophotometer", "Biochemistry Lab", 1, "Under Repair"),
        ],
        land: &[
            ("Experimental Farm", 250.0, "Old Shujabad Road", None),
            ("Orchard", 42.5, "Campus North", Some("Mango and citrus blocks")),
        ],
    },
    DemoDepartment {
        slug: "bzu-multan",
        name: "Bahauddin Zakariya University",
        district: "Multan",
        stock: &[
            ("A4 Paper", "Reams", 400, "In Stock"),
            ("Laboratory Glassware Set", "Sets", 25, "In Stock"),
        ],
        vacancies: &[
            ("Lecturer", 18, 40, 31),
            ("Librarian", 17, 2, 2),
            ("Computer Operator", 16, 6, 3),
        ],
        equipment: &[
            ("Fume Hood", "Chemistry Lab", 4, "Functional"),
            ("Centrifuge", "Zoology Lab", 3, "Functional"),
            ("Incubator", "Microbiology Lab", 2, "Non-Functional"),
        ],
        land: &[("Main Campus", 960.0, "Bosan Road", None)],
    },
    DemoDepartment {
        slug: "iub-bahawalpur",
        name: "The Islamia University of Bahawalpur",
        district: "Bahawalpur",
        stock: &[("Desert Seed Mix", "Kg", 75, "In Stock")],
        vacancies: &[("Assistant Professor", 19, 22, 17), ("Driver", 4, 8, 8)],
        equipment: &[("Weather Station", "Cholistan Institute", 1, "Functional")],
        land: &[
            ("Baghdad-ul-Jadeed Campus", 1250.0, "Bahawalpur", None),
            ("Rangeland Research Plot", 300.0, "Cholistan", Some("Leased")),
        ],
    },
    DemoDepartment {
        slug: "ghazi-university-dgk",
        name: "Ghazi University",
        district: "Dera Ghazi Khan",
        stock: &[],
        vacancies: &[("Lecturer", 18, 25, 11)],
        equipment: &[],
        land: &[],
    },
];

/// Inserts the demo departments when the `departments` table is empty.
///
/// Returns `true` when data was inserted.
pub async fn seed_demo_data(conn: &DatabaseConnection) -> anyhow::Result<bool> {
    let existing = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS cnt FROM departments;".to_string(),
        ))
        .await?;
    let count: i64 = match existing {
        Some(row) => row.try_get("", "cnt")?,
        None => 0,
    };
    if count > 0 {
        tracing::debug!("Skipping demo data: {} departments present", count);
        return Ok(false);
    }

    insert_departments(conn, DEMO_DEPARTMENTS).await?;

    tracing::info!("Inserted {} demo departments", DEMO_DEPARTMENTS.len());
    Ok(true)
}

/// Inserts departments with all their rows in one transaction; a failure
/// leaves the database as it was, so the next start seeds again.
async fn insert_departments(
    conn: &DatabaseConnection,
    departments: &[DemoDepartment],
) -> anyhow::Result<()> {
    let txn = conn.begin().await?;
    match insert_rows(&txn, departments).await {
        Ok(()) => txn.commit().await?,
        Err(e) => {
            txn.rollback().await?;
            return Err(e);
        }
    }
    Ok(())
}

async fn insert_rows(conn: &DatabaseTransaction, departments: &[DemoDepartment]) -> anyhow::Result<()> {
    let created_at = Utc::now().to_rfc3339();
    for dept in departments {
        let department_id = insert_department(conn, dept, &created_at).await?;

        for (i, (item_name, unit, quantity, status)) in dept.stock.iter().enumerate() {
            insert(
                conn,
                "INSERT INTO stock_items (department_id, serial_no, item_name, unit, quantity, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?);",
                vec![
                    department_id.into(),
                    (i as i64 + 1).into(),
                    (*item_name).into(),
                    (*unit).into(),
                    (*quantity).into(),
                    (*status).into(),
                    created_at.as_str().into(),
                ],
            )
            .await?;
        }

        for (i, (designation, bps, sanctioned, filled)) in dept.vacancies.iter().enumerate() {
            insert(
                conn,
                "INSERT INTO staff_vacancies (department_id, serial_no, designation, bps, sanctioned, filled, vacant, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?);",
                vec![
                    department_id.into(),
                    (i as i64 + 1).into(),
                    (*designation).into(),
                    (*bps).into(),
                    (*sanctioned).into(),
                    (*filled).into(),
                    (sanctioned - filled).into(),
                    created_at.as_str().into(),
                ],
            )
            .await?;
        }

        for (i, (equipment_name, lab_name, quantity, status)) in dept.equipment.iter().enumerate() {
            insert(
                conn,
                "INSERT INTO lab_equipment (department_id, serial_no, equipment_name, lab_name, quantity, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?);",
                vec![
                    department_id.into(),
                    (i as i64 + 1).into(),
                    (*equipment_name).into(),
                    (*lab_name).into(),
                    (*quantity).into(),
                    (*status).into(),
                    created_at.as_str().into(),
                ],
            )
            .await?;
        }

        for (land_type, area_acres, location, remarks) in dept.land {
            insert(
                conn,
                "INSERT INTO land_resources (department_id, land_type, area_acres, location, remarks, created_at) VALUES (?, ?, ?, ?, ?, ?);",
                vec![
                    department_id.into(),
                    (*land_type).into(),
                    (*area_acres).into(),
                    (*location).into(),
                    remarks.map(|r| r.to_string()).into(),
                    created_at.as_str().into(),
                ],
            )
            .await?;
        }
    }
    Ok(())
}

async fn insert_department(
    conn: &DatabaseTransaction,
    dept: &DemoDepartment,
    created_at: &str,
) -> anyhow::Result<i64> {
    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO departments (slug, name, district, created_at) VALUES (?, ?, ?, ?);",
            [
                dept.slug.into(),
                dept.name.into(),
                dept.district.into(),
                created_at.into(),
            ],
        ))
        .await?;
    Ok(result.last_insert_id() as i64)
}

async fn insert(conn: &DatabaseTransaction, sql: &str, values: Vec<Value>) -> anyhow::Result<()> {
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        values,
    ))
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;

    async fn count(conn: &DatabaseConnection, table: &str) -> i64 {
        let row = conn
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                format!("SELECT COUNT(*) AS cnt FROM {table};"),
            ))
            .await
            .unwrap()
            .unwrap();
        row.try_get("", "cnt").unwrap()
    }

    #[tokio::test]
    async fn test_seed_fills_empty_database_once() {
        let conn = memory_connection().await;

        assert!(seed_demo_data(&conn).await.unwrap());
        assert_eq!(count(&conn, "departments").await, DEMO_DEPARTMENTS.len() as i64);
        let equipment: usize = DEMO_DEPARTMENTS.iter().map(|d| d.equipment.len()).sum();
        assert_eq!(count(&conn, "lab_equipment").await, equipment as i64);

        assert!(!seed_demo_data(&conn).await.unwrap());
        assert_eq!(count(&conn, "departments").await, DEMO_DEPARTMENTS.len() as i64);
    }

    #[tokio::test]
    async fn test_failed_seed_leaves_database_empty() {
        let conn = memory_connection().await;
        let broken = [
            DemoDepartment {
                slug: "dup",
                name: "First",
                district: "Multan",
                stock: &[("Chalk", "Boxes", 3, "In Stock")],
                vacancies: &[],
                equipment: &[],
                land: &[],
            },
            // slug is UNIQUE, so this insert fails after the first department's rows
            DemoDepartment {
                slug: "dup",
                name: "Second",
                district: "Lodhran",
                stock: &[],
                vacancies: &[],
                equipment: &[],
                land: &[],
            },
        ];

        assert!(insert_departments(&conn, &broken).await.is_err());
        assert_eq!(count(&conn, "departments").await, 0);
        assert_eq!(count(&conn, "stock_items").await, 0);

        // nothing half-seeded, so the demo seed still runs
        assert!(seed_demo_data(&conn).await.unwrap());
    }
}
