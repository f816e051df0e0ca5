//! exohab-common: Shared types, errors, and configuration used across all Exohab crates.

pub mod error;
pub mod planet;
pub mod config;

// Re-export commonly used types
pub use error::{ExohabError, Result};
pub use planet::{normalise_name, PlanetParams, PlanetRecord, RawPlanetRow, FEATURE_COUNT, FEATURE_NAMES};
pub use config::{Config, DatasetConfig, DatasetSource, LookupConfig, TrainingConfig};
