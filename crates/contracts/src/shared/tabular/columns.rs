//! Column inference: which fields of a dataset become table columns, in
//! which order, and under which header label.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::label::format_label;
use super::record::Record;
use super::table_view::CellContent;

/// Fields never shown as columns unless the caller overrides the set.
pub const DEFAULT_EXCLUDED_FIELDS: [&str; 3] = ["id", "department_id", "created_at"];

/// Field promoted to the first column when present.
pub const ORDERING_FIELD: &str = "serial_no";

/// Header of the synthetic row number column.
pub const ROW_NUMBER_LABEL: &str = "Sr. No.";

/// Key used for the synthetic row number column in exports and DOM ids.
pub const ROW_NUMBER_KEY: &str = "__row_number";

/// Custom cell rendering: `(value at key, whole record, row index) → cell`.
///
/// The value is `None` when the record has no such field.
pub type CellRenderer = Arc<dyn Fn(Option<&Value>, &Record, usize) -> CellContent + Send + Sync>;

/// Wraps a closure into a [`CellRenderer`].
pub fn cell_renderer<F>(render: F) -> CellRenderer
where
    F: Fn(Option<&Value>, &Record, usize) -> CellContent + Send + Sync + 'static,
{
    Arc::new(render)
}

/// Source of a column's values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    /// A field of the record
    Field(String),
    /// Generated 1-based row number
    RowNumber,
}

impl ColumnKey {
    pub fn as_str(&self) -> &str {
        match self {
            ColumnKey::Field(name) => name,
            ColumnKey::RowNumber => ROW_NUMBER_KEY,
        }
    }

    pub fn field_name(&self) -> Option<&str> {
        match self {
            ColumnKey::Field(name) => Some(name),
            ColumnKey::RowNumber => None,
        }
    }
}

/// Display metadata for one table column.
#[derive(Clone)]
pub struct ColumnDescriptor {
    pub key: ColumnKey,
    pub label: String,
    pub render: Option<CellRenderer>,
}

impl ColumnDescriptor {
    /// Column for a record field, labelled with [`format_label`].
    pub fn field(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: format_label(&name),
            key: ColumnKey::Field(name),
            render: None,
        }
    }

    pub fn row_number() -> Self {
        Self {
            key: ColumnKey::RowNumber,
            label: ROW_NUMBER_LABEL.to_string(),
            render: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_render(mut self, render: CellRenderer) -> Self {
        self.render = Some(render);
        self
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Options of column inference.
#[derive(Debug, Clone)]
pub struct ColumnOptions {
    /// Field names (compared lowercased) that never become columns
    pub exclude_fields: BTreeSet<String>,
    /// Move the ordering field to the front when present
    pub promote_ordering_field: bool,
    pub ordering_field: String,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            exclude_fields: DEFAULT_EXCLUDED_FIELDS
                .iter()
                .map(|f| f.to_string())
                .collect(),
            promote_ordering_field: true,
            ordering_field: ORDERING_FIELD.to_string(),
        }
    }
}

impl ColumnOptions {
    /// Options with a caller-supplied exclusion set.
    pub fn excluding<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            exclude_fields: fields
                .into_iter()
                .map(|f| f.as_ref().to_lowercase())
                .collect(),
            ..Self::default()
        }
    }

    pub fn promote(mut self, promote: bool) -> Self {
        self.promote_ordering_field = promote;
        self
    }

    fn is_excluded(&self, field: &str) -> bool {
        let lowered = field.to_lowercase();
        self.exclude_fields
            .iter()
            .any(|excluded| excluded.to_lowercase() == lowered)
    }

    fn is_ordering_field(&self, field: &str) -> bool {
        field.to_lowercase() == self.ordering_field.to_lowercase()
    }
}

/// Field names to show, in display order.
///
/// The first record is the schema of the whole dataset: fields that only
/// appear in later records are ignored.
pub fn derive_field_names(records: &[Record], options: &ColumnOptions) -> Vec<String> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let mut fields: Vec<String> = first
        .keys()
        .filter(|name| !options.is_excluded(name))
        .cloned()
        .collect();

    if options.promote_ordering_field {
        if let Some(pos) = fields.iter().position(|f| options.is_ordering_field(f)) {
            if pos > 0 {
                let ordering = fields.remove(pos);
                fields.insert(0, ordering);
            }
        }
    }

    fields
}

/// Column descriptors for a dataset.
///
/// A row number column is prepended when the dataset is non-empty and has no
/// ordering field left after exclusion.
pub fn derive_columns(records: &[Record], options: &ColumnOptions) -> Vec<ColumnDescriptor> {
    if records.is_empty() {
        return Vec::new();
    }

    let fields = derive_field_names(records, options);
    let has_ordering = fields.iter().any(|f| options.is_ordering_field(f));

    let mut columns = Vec::with_capacity(fields.len() + 1);
    if !has_ordering {
        columns.push(ColumnDescriptor::row_number());
    }
    columns.extend(fields.into_iter().map(ColumnDescriptor::field));
    columns
}

/// Attaches `render` to the column of `field`, if the column exists.
pub fn override_render(columns: &mut [ColumnDescriptor], field: &str, render: CellRenderer) {
    if let Some(column) = columns
        .iter_mut()
        .find(|c| c.key.field_name() == Some(field))
    {
        column.render = Some(render);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tabular::record::record_from_pairs;
    use serde_json::json;

    fn keys(columns: &[ColumnDescriptor]) -> Vec<&str> {
        columns.iter().map(|c| c.key.as_str()).collect()
    }

    #[test]
    fn test_empty_dataset_has_no_columns() {
        assert!(derive_field_names(&[], &ColumnOptions::default()).is_empty());
        assert!(derive_columns(&[], &ColumnOptions::default()).is_empty());
    }

    #[test]
    fn test_default_exclusion_and_promotion() {
        let records = vec![record_from_pairs([
            ("id", json!(1)),
            ("department_id", json!("x")),
            ("serial_no", json!(2)),
            ("name", json!("a")),
        ])];

        let fields = derive_field_names(&records, &ColumnOptions::default());
        assert_eq!(fields, vec!["serial_no", "name"]);

        let columns = derive_columns(&records, &ColumnOptions::default());
        assert_eq!(keys(&columns), vec!["serial_no", "name"]);
        assert_eq!(columns[0].label, "Serial No");
    }

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let records = vec![record_from_pairs([
            ("ID", json!(1)),
            ("Created_At", json!("2024-01-01")),
            ("item", json!("Chalk")),
        ])];
        let fields = derive_field_names(&records, &ColumnOptions::default());
        assert_eq!(fields, vec!["item"]);

        let custom = ColumnOptions::excluding(["ITEM"]);
        let fields = derive_field_names(&records, &custom);
        assert_eq!(fields, vec!["ID", "Created_At"]);
    }

    #[test]
    fn test_ordering_field_moves_to_front_others_keep_order() {
        let records = vec![record_from_pairs([
            ("designation", json!("Lecturer")),
            ("bps", json!(17)),
            ("Serial_No", json!(1)),
            ("vacant", json!(2)),
        ])];
        let fields = derive_field_names(&records, &ColumnOptions::default());
        assert_eq!(fields, vec!["Serial_No", "designation", "bps", "vacant"]);

        let kept = derive_field_names(&records, &ColumnOptions::default().promote(false));
        assert_eq!(kept, vec!["designation", "bps", "Serial_No", "vacant"]);
    }

    #[test]
    fn test_missing_ordering_field_prepends_row_number() {
        let records = vec![record_from_pairs([
            ("land_type", json!("Agricultural")),
            ("area_acres", json!(12.5)),
        ])];
        let columns = derive_columns(&records, &ColumnOptions::default());
        assert_eq!(columns[0].key, ColumnKey::RowNumber);
        assert_eq!(columns[0].label, ROW_NUMBER_LABEL);
        assert_eq!(keys(&columns), vec![ROW_NUMBER_KEY, "land_type", "area_acres"]);
    }

    #[test]
    fn test_unpromoted_ordering_field_suppresses_row_number() {
        let records = vec![record_from_pairs([
            ("name", json!("Chalk")),
            ("serial_no", json!(4)),
        ])];
        let columns = derive_columns(&records, &ColumnOptions::default().promote(false));
        assert_eq!(keys(&columns), vec!["name", "serial_no"]);
        assert!(columns.iter().all(|c| c.key != ColumnKey::RowNumber));
    }

    #[test]
    fn test_schema_is_locked_to_first_record() {
        let records = vec![
            record_from_pairs([("serial_no", json!(1)), ("name", json!("a"))]),
            record_from_pairs([
                ("serial_no", json!(2)),
                ("name", json!("b")),
                ("extra", json!("ignored")),
            ]),
        ];
        let fields = derive_field_names(&records, &ColumnOptions::default());
        assert_eq!(fields, vec!["serial_no", "name"]);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let records = vec![record_from_pairs([
            ("status", json!("Functional")),
            ("serial_no", json!(1)),
            ("equipment_name", json!("Microscope")),
        ])];
        let options = ColumnOptions::default();
        let first = derive_columns(&records, &options);
        let second = derive_columns(&records, &options);
        assert_eq!(keys(&first), keys(&second));
        let labels: Vec<&str> = first.iter().map(|c| c.label.as_str()).collect();
        let labels_again: Vec<&str> = second.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, labels_again);
    }

    #[test]
    fn test_override_render_targets_field_column() {
        let records = vec![record_from_pairs([
            ("serial_no", json!(1)),
            ("status", json!("Functional")),
        ])];
        let mut columns = derive_columns(&records, &ColumnOptions::default());
        let render = cell_renderer(|_, _, _| CellContent::text("x"));
        override_render(&mut columns, "status", render.clone());
        override_render(&mut columns, "missing", render);

        assert!(columns[0].render.is_none());
        assert!(columns[1].render.is_some());
    }
}
