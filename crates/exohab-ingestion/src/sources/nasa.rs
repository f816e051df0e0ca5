//! NASA Exoplanet Archive TAP client.
//!
//! The archive exposes a synchronous Table Access Protocol endpoint that
//! accepts an ADQL query and returns the result set as CSV:
//!
//! Endpoint: https://exoplanetarchive.ipac.caltech.edu/TAP/sync
//! Table:    ps (Planetary Systems, one row per planet solution)
//!
//! Planets with several published solutions appear more than once; the
//! loader keeps every row and the lookup takes the first one.

use std::time::Duration;

use async_trait::async_trait;
use exohab_common::{DatasetConfig, ExohabError, RawPlanetRow, Result};
use tracing::{debug, info, instrument};

use super::{read_csv_rows, DatasetProvider};

/// Archive columns requested, in the order of [`exohab_common::FEATURE_NAMES`].
pub const ARCHIVE_COLUMNS: [&str; 9] = [
    "pl_name",
    "pl_rade",
    "pl_bmasse",
    "pl_orbper",
    "pl_eqt",
    "st_teff",
    "st_mass",
    "st_rad",
    "st_met",
];

/// Client for the archive's TAP sync endpoint.
pub struct NasaExoplanetArchive {
    client: reqwest::Client,
    tap_url: String,
    table: String,
}

impl NasaExoplanetArchive {
    pub fn new(tap_url: impl Into<String>, table: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("exohab/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExohabError::Fetch(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            tap_url: tap_url.into(),
            table: table.into(),
        })
    }

    pub fn from_config(config: &DatasetConfig) -> Result<Self> {
        Self::new(
            config.tap_url.clone(),
            config.table.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// ADQL query selecting the name and the eight physical parameters.
    pub fn query(&self) -> String {
        format!("select {} from {}", ARCHIVE_COLUMNS.join(","), self.table)
    }
}

#[async_trait]
impl DatasetProvider for NasaExoplanetArchive {
    fn name(&self) -> &str {
        "nasa-exoplanet-archive"
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn fetch(&self) -> Result<Vec<RawPlanetRow>> {
        let query = self.query();
        debug!(url = %self.tap_url, query = %query, "Querying exoplanet archive");

        let resp = self
            .client
            .get(&self.tap_url)
            .query(&[("query", query.as_str()), ("format", "csv")])
            .send()
            .await
            .map_err(|e| ExohabError::Fetch(format!("request to {} failed: {e}", self.tap_url)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ExohabError::Fetch(format!("{} returned HTTP {}", self.tap_url, status)));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ExohabError::Fetch(format!("failed to read response body: {e}")))?;

        let rows = read_csv_rows(body.as_ref())?;
        info!("Fetched {} rows from {}", rows.len(), self.table);
        Ok(rows)
    }
}
