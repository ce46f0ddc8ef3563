pub mod error;
pub mod export;
pub mod repository;
pub mod sections;
pub mod service;

pub use error::DataError;
