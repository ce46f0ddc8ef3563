use anyhow::Result;
use contracts::domain::a001_department::aggregate::Department;

use super::repository;
use crate::shared::data::db::get_connection;

/// All departments, ordered by name
pub async fn list_all() -> Result<Vec<Department>> {
    let db = get_connection()?;
    repository::list_all(db).await
}

pub async fn get_by_slug(slug: &str) -> Result<Option<Department>> {
    let db = get_connection()?;
    repository::find_by_slug(db, slug).await
}

#[cfg(test)]
mod tests {
    use super::repository;
    use crate::shared::data::db::memory_connection;
    use crate::shared::data::seed::seed_demo_data;

    #[tokio::test]
    async fn test_list_and_find_departments() {
        let conn = memory_connection().await;
        assert!(repository::list_all(&conn).await.unwrap().is_empty());

        seed_demo_data(&conn).await.unwrap();
        let all = repository::list_all(&conn).await.unwrap();
        assert_eq!(all.len(), 4);
        let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        let bzu = repository::find_by_slug(&conn, "bzu-multan").await.unwrap().unwrap();
        assert_eq!(bzu.district, "Multan");
        assert!(repository::find_by_slug(&conn, "nowhere").await.unwrap().is_none());
    }
}
