use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Department directory is shared by the sidebar and the list page.
    let ctx = AppGlobalContext::new();
    ctx.load_departments();
    provide_context(ctx);

    view! {
        <AppRoutes />
    }
}
