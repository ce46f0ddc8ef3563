use serde::{Deserialize, Serialize};

use crate::domain::a001_department::aggregate::Department;
use crate::shared::tabular::{Dataset, SummaryValue};

/// One dataset section of a department page (stock, vacancies, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionData {
    /// Registry key, e.g. "lab_equipment"
    pub key: String,
    pub title: String,
    /// Field rendered as a status badge, if any
    pub status_field: Option<String>,
    /// Rows in display order
    pub records: Dataset,
    pub summaries: Vec<SummaryValue>,
}

/// Everything the department page template needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDataResponse {
    pub department: Department,
    pub sections: Vec<SectionData>,
}
