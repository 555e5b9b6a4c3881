// Declare modules
pub mod mapping;
pub mod table;

// Re-export all public types to keep flat imports like `use crate::models::MappingTable` working.
pub use mapping::{Column, TimezoneMapping};
pub use table::MappingTable;
