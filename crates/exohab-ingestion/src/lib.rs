//! exohab-ingestion: Dataset acquisition and cleaning.
//!
//! A [`DatasetProvider`] hands back raw rows (every numeric cell still text);
//! [`clean::clean_rows`] coerces the eight physical parameters and drops any
//! row that is missing one of them. [`DatasetLoader`] ties the two together
//! and fails when nothing usable is left.

pub mod clean;
pub mod loader;
pub mod sources;

pub use clean::{clean_rows, parse_numeric, CleanReport};
pub use loader::DatasetLoader;
pub use sources::{DatasetProvider, MockDatasetProvider};
