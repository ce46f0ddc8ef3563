use contracts::shared::tabular::{derive_columns, ColumnOptions, Dataset};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{DataTable, PageHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Departments as table records; `id` and `slug` are not shown
fn department_records(ctx: &AppGlobalContext) -> Dataset {
    ctx.departments
        .get()
        .iter()
        .filter_map(|d| match serde_json::to_value(d) {
            Ok(serde_json::Value::Object(map)) => Some(map),
            _ => None,
        })
        .collect()
}

#[component]
pub fn DepartmentList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <PageFrame page_id="a001_department--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="South Punjab DAMS"
                subtitle="Departments and institutions"
            />
            <div class="page__content">
                {move || ctx.error.get().map(|err| view! {
                    <div class="page__error">
                        <strong>"Error: "</strong>
                        {err}
                    </div>
                })}
                <Show
                    when=move || !ctx.loading.get()
                    fallback=|| view! { <p class="page__loading">"Loading..."</p> }
                >
                    {move || {
                        let records = department_records(&ctx);
                        let columns = derive_columns(&records, &ColumnOptions::excluding(["id", "slug"]));
                        view! { <DataTable title="Departments" records=records columns=columns /> }
                    }}
                </Show>
            </div>
        </PageFrame>
    }
}
