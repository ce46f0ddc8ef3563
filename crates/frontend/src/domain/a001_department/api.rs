use contracts::domain::a001_department::aggregate::Department;

use crate::shared::api_utils::{api_url, get_json};

/// Все департаменты, по имени
pub async fn list_departments() -> Result<Vec<Department>, String> {
    get_json(&api_url("/api/departments")).await
}
