//! Presentation model of a titled table.
//!
//! `TableView::build` does all the work of turning `(title, dataset, columns)`
//! into header labels and cell texts; the frontend only mounts the result.

use super::columns::{ColumnDescriptor, ColumnKey};
use super::record::{display_text, Record};

/// Message of the empty-state panel.
pub const EMPTY_STATE_MESSAGE: &str = "No data available";

/// Content of one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellContent {
    pub text: String,
    /// CSS class of a badge wrapping the text; plain text when `None`
    pub class: Option<String>,
}

impl CellContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn badge(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: Some(class.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowView {
    /// Position in the dataset; also the row identity
    pub index: usize,
    pub cells: Vec<CellContent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Empty {
        title: String,
        message: String,
    },
    Table {
        title: String,
        headers: Vec<String>,
        rows: Vec<TableRowView>,
    },
}

impl TableView {
    pub fn build(title: &str, dataset: &[Record], columns: &[ColumnDescriptor]) -> Self {
        if dataset.is_empty() {
            return TableView::Empty {
                title: title.to_string(),
                message: EMPTY_STATE_MESSAGE.to_string(),
            };
        }

        let headers = columns.iter().map(|c| c.label.clone()).collect();
        let rows = dataset
            .iter()
            .enumerate()
            .map(|(index, record)| TableRowView {
                index,
                cells: columns
                    .iter()
                    .map(|column| render_cell(column, record, index))
                    .collect(),
            })
            .collect();

        TableView::Table {
            title: title.to_string(),
            headers,
            rows,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            TableView::Empty { title, .. } | TableView::Table { title, .. } => title,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            TableView::Empty { .. } => 0,
            TableView::Table { rows, .. } => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TableView::Empty { .. })
    }
}

/// Cell of `column` for the record at `index`.
pub fn render_cell(column: &ColumnDescriptor, record: &Record, index: usize) -> CellContent {
    let value = column.key.field_name().and_then(|name| record.get(name));

    if let Some(render) = &column.render {
        return render(value, record, index);
    }

    match column.key {
        ColumnKey::RowNumber => CellContent::text((index + 1).to_string()),
        ColumnKey::Field(_) => CellContent::text(display_text(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tabular::columns::{
        cell_renderer, derive_columns, override_render, ColumnOptions,
    };
    use crate::shared::tabular::record::{record_from_pairs, EMPTY_CELL};
    use crate::shared::tabular::status::status_badge_renderer;
    use serde_json::json;

    fn equipment() -> Vec<Record> {
        vec![
            record_from_pairs([
                ("serial_no", json!(1)),
                ("equipment_name", json!("Microscope")),
                ("status", json!("Functional")),
            ]),
            record_from_pairs([
                ("serial_no", json!(2)),
                ("equipment_name", json!("PCR")),
                ("status", json!("Non-Functional")),
            ]),
        ]
    }

    #[test]
    fn test_empty_dataset_renders_empty_state() {
        let columns = vec![
            ColumnDescriptor::field("name"),
            ColumnDescriptor::row_number(),
        ];
        let view = TableView::build("Stock", &[], &columns);
        assert_eq!(
            view,
            TableView::Empty {
                title: "Stock".to_string(),
                message: EMPTY_STATE_MESSAGE.to_string(),
            }
        );
        assert_eq!(view.row_count(), 0);

        let view = TableView::build("Stock", &[], &[]);
        assert!(view.is_empty());
    }

    #[test]
    fn test_plain_cells_use_textual_value_or_placeholder() {
        let records = vec![
            record_from_pairs([("serial_no", json!(1)), ("remarks", json!("ok"))]),
            record_from_pairs([("serial_no", json!(2)), ("remarks", json!(null))]),
            record_from_pairs([("serial_no", json!(3))]),
        ];
        let columns = derive_columns(&records, &ColumnOptions::default());
        let view = TableView::build("Remarks", &records, &columns);

        let TableView::Table { headers, rows, .. } = view else {
            panic!("expected a table");
        };
        assert_eq!(headers, vec!["Serial No", "Remarks"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].cells[1].text, "ok");
        assert_eq!(rows[1].cells[1].text, EMPTY_CELL);
        assert_eq!(rows[2].cells[1].text, EMPTY_CELL);
        assert!(rows.iter().all(|r| r.cells.iter().all(|c| c.class.is_none())));
    }

    #[test]
    fn test_row_number_column_counts_from_one() {
        let records = vec![
            record_from_pairs([("land_type", json!("Orchard"))]),
            record_from_pairs([("land_type", json!("Orchard"))]),
        ];
        let columns = derive_columns(&records, &ColumnOptions::default());
        let view = TableView::build("Land", &records, &columns);

        let TableView::Table { rows, .. } = view else {
            panic!("expected a table");
        };
        // identical records stay distinct rows
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[0].cells[0].text, "1");
        assert_eq!(rows[1].cells[0].text, "2");
        assert_eq!(rows[0].cells[1], rows[1].cells[1]);
    }

    #[test]
    fn test_custom_renderer_receives_value_record_and_index() {
        let records = equipment();
        let mut columns = derive_columns(&records, &ColumnOptions::default());
        override_render(
            &mut columns,
            "equipment_name",
            cell_renderer(|value, record, index| {
                CellContent::text(format!(
                    "{}#{}:{}",
                    display_text(value),
                    index,
                    record.len()
                ))
            }),
        );
        let view = TableView::build("Lab", &records, &columns);
        let TableView::Table { rows, .. } = view else {
            panic!("expected a table");
        };
        assert_eq!(rows[1].cells[1].text, "PCR#1:3");
    }

    #[test]
    fn test_hand_built_columns() {
        let records = equipment();
        let columns = vec![
            ColumnDescriptor::row_number().with_label("#"),
            ColumnDescriptor::field("equipment_name").with_label("Equipment"),
            ColumnDescriptor::field("status").with_render(status_badge_renderer()),
        ];
        let view = TableView::build("Lab", &records, &columns);
        let TableView::Table { headers, rows, .. } = view else {
            panic!("expected a table");
        };
        assert_eq!(headers, vec!["#", "Equipment", "Status"]);
        assert_eq!(rows[1].cells[0].text, "2");
        assert_eq!(rows[1].cells[1], CellContent::text("PCR"));
        assert_eq!(
            rows[1].cells[2],
            CellContent::badge("Non-Functional", "badge badge--error")
        );
    }

    #[test]
    fn test_lab_equipment_with_status_badges() {
        let records = equipment();
        let mut columns = derive_columns(&records, &ColumnOptions::excluding(Vec::<String>::new()));
        override_render(&mut columns, "status", status_badge_renderer());

        let view = TableView::build("Lab Equipment", &records, &columns);
        assert_eq!(view.row_count(), 2);
        assert_eq!(view.title(), "Lab Equipment");

        let TableView::Table { headers, rows, .. } = view else {
            panic!("expected a table");
        };
        assert_eq!(headers, vec!["Serial No", "Equipment Name", "Status"]);
        assert_eq!(rows[0].cells[0].text, "1");

        let first = &rows[0].cells[2];
        let second = &rows[1].cells[2];
        assert_eq!(first.text, "Functional");
        assert_eq!(second.text, "Non-Functional");
        assert!(first.class.is_some());
        assert!(second.class.is_some());
        assert_ne!(first.class, second.class);
    }
}
