//! Dataset provider clients.

pub mod csv_file;
pub mod nasa;

use std::io::Read;

use async_trait::async_trait;
use exohab_common::{RawPlanetRow, Result};
use tracing::warn;

pub use csv_file::CsvFileProvider;
pub use nasa::NasaExoplanetArchive;

/// Common interface for anything that can hand over a planet table.
///
/// Implementations:
/// - NASA Exoplanet Archive TAP service (remote)
/// - CSV snapshot on disk (local)
/// - Mock rows (testing)
#[async_trait]
pub trait DatasetProvider: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Fetch every row the source has, uncleaned.
    /// Non-success responses surface as `ExohabError::Fetch`.
    async fn fetch(&self) -> Result<Vec<RawPlanetRow>>;
}

/// Deserialise archive-style CSV into raw rows.
///
/// Short rows keep their missing cells empty. A row that cannot be decoded at
/// all becomes an unnamed row, so cleaning drops it and counts it.
pub(crate) fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<RawPlanetRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(reader);

    // Header problems are fatal; row problems are not.
    reader.headers()?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawPlanetRow>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                warn!("Skipping undecodable CSV row: {e}");
                rows.push(RawPlanetRow::default());
            }
        }
    }
    Ok(rows)
}

// ── Mock Implementation for Testing ────────────────────────────────────────

/// Mock provider with hardcoded rows for unit tests.
#[derive(Debug, Clone, Default)]
pub struct MockDatasetProvider {
    rows: Vec<RawPlanetRow>,
    failure: Option<String>,
}

impl MockDatasetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw row.
    pub fn with(mut self, row: RawPlanetRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = RawPlanetRow>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Make every fetch fail as a non-success response would.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }
}

#[async_trait]
impl DatasetProvider for MockDatasetProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<Vec<RawPlanetRow>> {
        match &self.failure {
            Some(reason) => Err(exohab_common::ExohabError::Fetch(reason.clone())),
            None => Ok(self.rows.clone()),
        }
    }
}
