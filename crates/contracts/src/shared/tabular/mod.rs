//! Generic tabular data: records, column inference, header labels and the
//! table model mounted by the frontend `DataTable`.
//!
//! # Пример
//!
//! ```rust,ignore
//! use contracts::shared::tabular::{derive_columns, ColumnOptions, TableView};
//!
//! let columns = derive_columns(&records, &ColumnOptions::default());
//! let view = TableView::build("Lab Equipment", &records, &columns);
//! ```

pub mod columns;
pub mod label;
pub mod record;
pub mod status;
pub mod summary;
pub mod table_view;

pub use columns::*;
pub use label::format_label;
pub use record::*;
pub use status::*;
pub use summary::*;
pub use table_view::*;
