use contracts::dashboards::d100_department_data::DepartmentDataResponse;
use contracts::shared::tabular::Dataset;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use super::section::SectionPanel;
use crate::dashboards::d100_department_data::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{DataTable, PageHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::request_sequence::RequestSequence;

/// Department page: one panel per data section.
///
/// A failed fetch shows the error line and an empty table, never a blank page.
#[component]
pub fn DepartmentPage() -> impl IntoView {
    let params = use_params_map();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let slug = Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()));

    let (data, set_data) = signal(None::<DepartmentDataResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Navigating between departments can overlap fetches; a late response
    // for the previous slug must not overwrite the current page.
    let requests = RequestSequence::new();

    Effect::new(move |_| {
        let slug = slug.get();
        if slug.is_empty() {
            return;
        }
        let ticket = requests.next();
        let requests = requests.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::get_department_data(&slug).await;
            if !requests.is_latest(ticket) {
                log::debug!("Dropping stale response for {}", slug);
                return;
            }
            match result {
                Ok(response) => {
                    log::debug!(
                        "Loaded {} sections for {}",
                        response.sections.len(),
                        slug
                    );
                    set_data.set(Some(response));
                }
                Err(e) => {
                    log::error!("Failed to load department {}: {}", slug, e);
                    set_data.set(None);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let title = move || {
        data.with(|d| d.as_ref().map(|d| d.department.name.clone()))
            .or_else(|| ctx.department_name(&slug.get()))
            .unwrap_or_else(|| slug.get())
    };
    let subtitle = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| format!("District {}", d.department.district)))
    });

    view! {
        <PageFrame page_id="d100_department_data--dashboard" category=PAGE_CAT_DASHBOARD>
            {move || view! { <PageHeader title=title() subtitle=subtitle /> }}
            <div class="page__content">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="page__loading">"Loading..."</p> }
                >
                    {move || match (error.get(), data.get()) {
                        (Some(err), _) => view! {
                            <div class="page__error">
                                <strong>"Error: "</strong>
                                {err}
                            </div>
                            <DataTable title="Department Data" records=Dataset::new() columns=vec![] />
                        }
                        .into_any(),
                        (None, Some(response)) => {
                            let slug = slug.get_untracked();
                            response
                                .sections
                                .into_iter()
                                .map(|section| view! { <SectionPanel slug=slug.clone() section=section /> })
                                .collect_view()
                                .into_any()
                        }
                        (None, None) => ().into_any(),
                    }}
                </Show>
            </div>
        </PageFrame>
    }
}
