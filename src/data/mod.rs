//! Data module - CSV loading and the country table

mod loader;
mod table;

pub use loader::{DataLoader, LoaderError};
pub use table::{select_country, CountryRecord, CountryTable, SelectError};
