use super::table::format_summary_value;
use leptos::prelude::*;

/// Summary figure shown above a section table
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    value: f64,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{format_summary_value(value)}</div>
            </div>
        </div>
    }
}
