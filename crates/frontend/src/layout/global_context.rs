use contracts::domain::a001_department::aggregate::Department;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_department::api;

/// App-wide state: the department directory shared by the sidebar and the
/// list page.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub departments: RwSignal<Vec<Department>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            departments: RwSignal::new(vec![]),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Fetches the department directory once.
    pub fn load_departments(&self) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        spawn_local(async move {
            match api::list_departments().await {
                Ok(list) => {
                    log::debug!("Loaded {} departments", list.len());
                    this.departments.set(list);
                }
                Err(e) => {
                    log::error!("Failed to load departments: {}", e);
                    this.departments.set(vec![]);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn department_name(&self, slug: &str) -> Option<String> {
        self.departments.with(|list| {
            list.iter()
                .find(|d| d.slug == slug)
                .map(|d| d.name.clone())
        })
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
