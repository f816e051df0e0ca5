//! Local CSV snapshot, same column layout as an archive export.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use exohab_common::{ExohabError, RawPlanetRow, Result};
use tracing::{info, instrument};

use super::{read_csv_rows, DatasetProvider};

pub struct CsvFileProvider {
    path: PathBuf,
}

impl CsvFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetProvider for CsvFileProvider {
    fn name(&self) -> &str {
        "csv-file"
    }

    #[instrument(skip(self), fields(path = ?self.path))]
    async fn fetch(&self) -> Result<Vec<RawPlanetRow>> {
        let content = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ExohabError::Fetch(format!("cannot read {:?}: {e}", self.path)))?;
        let rows = read_csv_rows(content.as_slice())?;
        info!("Read {} rows from {:?}", rows.len(), self.path);
        Ok(rows)
    }
}
