//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"d100_department_data--dashboard"`)
//!   - `data-page-category` with one of the constants below

/// List of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Department page built from dataset sections.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
