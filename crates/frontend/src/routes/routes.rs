use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::d100_department_data::ui::DepartmentPage;
use crate::domain::a001_department::ui::list::DepartmentList;
use crate::layout::Shell;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="page__error">"Page not found"</p> }>
                    <Route path=path!("/") view=DepartmentList />
                    <Route path=path!("/departments/:slug") view=DepartmentPage />
                </Routes>
            </Shell>
        </Router>
    }
}
