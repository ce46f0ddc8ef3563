//! Generic table for any dataset.
//!
//! ```rust,ignore
//! let mut columns = derive_columns(&records, &ColumnOptions::default());
//! override_render(&mut columns, "status", status_badge_renderer());
//!
//! view! { <DataTable title="Lab Equipment" records=records columns=columns /> }
//! ```
//!
//! An empty dataset renders a titled panel with "No data available" and no
//! table markup. The header row stays pinned while the body scrolls.

use contracts::shared::tabular::{CellContent, ColumnDescriptor, Dataset, TableView};
use leptos::prelude::*;
use thaw::*;

const DATA_TABLE_CSS: &str = r#"
.data-table__scroll { overflow: auto; }
.data-table__scroll thead th {
    position: sticky;
    top: 0;
    z-index: 1;
    background: var(--color-surface, #fff);
}
.data-table__empty { padding: 24px; text-align: center; color: #6b7280; }
.badge { display: inline-block; padding: 2px 8px; border-radius: 10px; font-size: 12px; }
.badge--success { background: #dcfce7; color: #166534; }
.badge--warning { background: #fef9c3; color: #854d0e; }
.badge--error { background: #fee2e2; color: #991b1b; }
.badge--neutral { background: #f3f4f6; color: #374151; }
"#;

#[component]
pub fn DataTable(
    #[prop(into)]
    title: String,
    /// Rows in display order
    records: Dataset,
    /// Usually `derive_columns(&records, ..)` with render overrides
    columns: Vec<ColumnDescriptor>,
    /// Height of the scroll container
    #[prop(optional, default = 480)]
    max_height: u32,
) -> impl IntoView {
    match TableView::build(&title, &records, &columns) {
        TableView::Empty { title, message } => view! {
            <div class="data-table data-table--empty">
                <h3 class="data-table__title">{title}</h3>
                <div class="data-table__empty">{message}</div>
            </div>
        }
        .into_any(),
        TableView::Table {
            title,
            headers,
            rows,
        } => {
            let scroll_style = format!("max-height: {}px;", max_height);
            view! {
                <div class="data-table">
                    <style>{DATA_TABLE_CSS}</style>
                    <h3 class="data-table__title">{title}</h3>
                    <div class="data-table__scroll" style=scroll_style>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    {headers
                                        .into_iter()
                                        .map(|label| view! {
                                            <TableHeaderCell class="data-table__header-cell">
                                                {label}
                                            </TableHeaderCell>
                                        })
                                        .collect_view()}
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || rows.clone()
                                    key=|row| row.index
                                    let:row
                                >
                                    <TableRow>
                                        {row.cells.into_iter().map(cell_view).collect_view()}
                                    </TableRow>
                                </For>
                            </TableBody>
                        </Table>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

fn cell_view(cell: CellContent) -> impl IntoView {
    let content = match cell.class {
        Some(class) => view! { <span class=class>{cell.text}</span> }.into_any(),
        None => view! { {cell.text} }.into_any(),
    };
    view! {
        <TableCell>
            <TableCellLayout>{content}</TableCellLayout>
        </TableCell>
    }
}
