pub mod data_table;
pub mod page_header;
pub mod stat_card;
pub mod table;

pub use data_table::DataTable;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
