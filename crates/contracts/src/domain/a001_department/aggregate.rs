use serde::{Deserialize, Serialize};

/// Department (institution) whose data the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    /// URL key, e.g. "gc-university-multan"
    pub slug: String,
    pub name: String,
    pub district: String,
}
