pub mod page;
pub mod section;

pub use page::DepartmentPage;
