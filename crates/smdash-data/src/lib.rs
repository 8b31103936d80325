//! Dataset loading for smdash.
//!
//! Reads the delimited engagement export into a [`smdash_core::Table`],
//! enriches every record with `revenue_generated`, and memoizes the result
//! so dashboard re-renders never re-read the source.

pub mod cache;
pub mod derive;
pub mod error;
pub mod loader;

pub use cache::DatasetLoader;
pub use derive::{revenue_generated, with_revenue};
pub use error::DataLoadError;
pub use loader::{load_dataset, parse_records, read_dataset, CsvOptions, REQUIRED_COLUMNS};
