use contracts::dashboards::d100_department_data::DepartmentDataResponse;

use crate::shared::api_utils::{api_url, get_json};

/// Department with all of its sections
pub async fn get_department_data(slug: &str) -> Result<DepartmentDataResponse, String> {
    let url = api_url(&format!(
        "/api/departments/{}/data",
        urlencoding::encode(slug)
    ));
    get_json(&url).await
}

/// Download link for one section as CSV
pub fn section_csv_url(slug: &str, section_key: &str) -> String {
    api_url(&format!(
        "/api/departments/{}/data/{}/csv",
        urlencoding::encode(slug),
        urlencoding::encode(section_key)
    ))
}
