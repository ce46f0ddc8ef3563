pub mod global_context;

use leptos::prelude::*;
use leptos_router::components::A;

use global_context::AppGlobalContext;

/// Application shell: top bar, department sidebar, routed content.
///
/// ```text
/// +------------------------------------------+
/// |              top bar                     |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-shell">
            <header class="app-shell__top">
                <A href="/">"South Punjab DAMS"</A>
            </header>
            <div class="app-shell__body">
                <nav class="app-shell__sidebar">
                    <For
                        each=move || ctx.departments.get()
                        key=|dept| dept.id
                        let:dept
                    >
                        <A href=format!("/departments/{}", dept.slug)>{dept.name}</A>
                    </For>
                </nav>
                <main class="app-shell__main">{children()}</main>
            </div>
        </div>
    }
}
