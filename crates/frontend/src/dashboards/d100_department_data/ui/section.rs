use contracts::dashboards::d100_department_data::SectionData;
use contracts::shared::tabular::{
    derive_columns, override_render, status_badge_renderer, ColumnOptions,
};
use leptos::prelude::*;

use crate::dashboards::d100_department_data::api;
use crate::shared::components::{DataTable, StatCard};

/// One department section: summary cards, the data table and a CSV link.
#[component]
pub fn SectionPanel(
    /// Department slug, for the export link
    #[prop(into)]
    slug: String,
    section: SectionData,
) -> impl IntoView {
    // Columns follow the received dataset; computed once per mount
    let mut columns = derive_columns(&section.records, &ColumnOptions::default());
    if let Some(field) = section.status_field.as_deref() {
        override_render(&mut columns, field, status_badge_renderer());
    }

    let export_href = api::section_csv_url(&slug, &section.key);
    let has_rows = !section.records.is_empty();
    let anchor_id = format!("section-{}", section.key);

    view! {
        <section class="section-panel" id=anchor_id>
            {(!section.summaries.is_empty()).then(|| view! {
                <div class="section-panel__stats">
                    {section
                        .summaries
                        .into_iter()
                        .map(|s| view! { <StatCard label=s.label value=s.value /> })
                        .collect_view()}
                </div>
            })}
            <DataTable title=section.title records=section.records columns=columns />
            {has_rows.then(|| view! {
                <a class="section-panel__export" href=export_href download="">
                    "Export CSV"
                </a>
            })}
        </section>
    }
}
