//! Dataset loader: provider fetch followed by cleaning.

use exohab_common::{DatasetConfig, DatasetSource, ExohabError, PlanetRecord, Result};
use tracing::{info, instrument};

use crate::clean::{clean_rows, CleanReport};
use crate::sources::{CsvFileProvider, DatasetProvider, NasaExoplanetArchive};

pub struct DatasetLoader {
    provider: Box<dyn DatasetProvider>,
}

impl DatasetLoader {
    pub fn new(provider: Box<dyn DatasetProvider>) -> Self {
        Self { provider }
    }

    /// Build the loader for the configured source.
    pub fn from_config(config: &DatasetConfig) -> Result<Self> {
        let provider: Box<dyn DatasetProvider> = match config.source {
            DatasetSource::Nasa => Box::new(NasaExoplanetArchive::from_config(config)?),
            DatasetSource::Csv => {
                let path = config.csv_path.clone().ok_or_else(|| {
                    ExohabError::Config("dataset.csv_path is not set".into())
                })?;
                Box::new(CsvFileProvider::new(path))
            }
        };
        Ok(Self::new(provider))
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch and clean. Fails with `EmptyResult` when no row survives.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn load(&self) -> Result<CleanReport> {
        let rows = self.provider.fetch().await?;
        let report = clean_rows(&rows);
        if report.records.is_empty() {
            return Err(ExohabError::EmptyResult { dropped: report.dropped });
        }
        info!(
            "Loaded {} usable records ({} dropped) from {}",
            report.records.len(),
            report.dropped,
            self.provider.name()
        );
        Ok(report)
    }

    /// Same as [`load`](Self::load) but returns only the records.
    pub async fn load_records(&self) -> Result<Vec<PlanetRecord>> {
        Ok(self.load().await?.records)
    }
}
