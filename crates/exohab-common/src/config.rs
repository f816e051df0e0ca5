//! Configuration loading for Exohab.
//! Reads exohab.toml from the current directory or path in EXOHAB_CONFIG env var.
//! Every field has a default, so a missing file is not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ExohabError, Result};

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV_VAR: &str = "EXOHAB_CONFIG";

/// Config file looked up in the working directory when the env var is unset.
pub const DEFAULT_CONFIG_FILE: &str = "exohab.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub training: TrainingConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

// ── Dataset ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSource {
    /// NASA Exoplanet Archive TAP service
    Nasa,
    /// Local CSV snapshot with archive column names
    Csv,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_source")]
    pub source: DatasetSource,
    #[serde(default = "default_tap_url")]
    pub tap_url: String,
    #[serde(default = "default_table")]
    pub table: String,
    pub csv_path: Option<PathBuf>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_source()       -> DatasetSource { DatasetSource::Nasa }
fn default_tap_url()      -> String { "https://exoplanetarchive.ipac.caltech.edu/TAP/sync".to_string() }
fn default_table()        -> String { "ps".to_string() }
fn default_timeout_secs() -> u64    { 60 }

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            tap_url: default_tap_url(),
            table: default_table(),
            csv_path: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ── Training ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Fraction of rows held out for evaluation
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    /// Trees in the forest
    #[serde(default = "default_n_estimators")]
    pub n_estimators: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Smallest cleaned table that can still be split
    #[serde(default = "default_min_rows")]
    pub min_rows: usize,
}

fn default_test_fraction() -> f64   { 0.2 }
fn default_n_estimators()  -> usize { 100 }
fn default_seed()          -> u64   { 42 }
fn default_min_rows()      -> usize { 2 }

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            test_fraction: default_test_fraction(),
            n_estimators: default_n_estimators(),
            seed: default_seed(),
            min_rows: default_min_rows(),
        }
    }
}

// ── Lookup ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Inputs (case-insensitive) that end the interactive session
    #[serde(default = "default_exit_commands")]
    pub exit_commands: Vec<String>,
    /// Print per-component sub-scores after each lookup
    #[serde(default = "bool_true")]
    pub show_breakdown: bool,
}

fn default_exit_commands() -> Vec<String> { vec!["exit".to_string(), "quit".to_string()] }
fn bool_true()             -> bool { true }

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            exit_commands: default_exit_commands(),
            show_breakdown: true,
        }
    }
}

impl Config {
    /// Load configuration from exohab.toml.
    /// Checks EXOHAB_CONFIG env var first, then current directory.
    /// Falls back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        if !Path::new(&path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ExohabError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        let t = &self.training;
        if !(t.test_fraction > 0.0 && t.test_fraction < 1.0) {
            return Err(ExohabError::Config(format!(
                "training.test_fraction must be in (0, 1), got {}",
                t.test_fraction
            )));
        }
        if t.n_estimators == 0 {
            return Err(ExohabError::Config("training.n_estimators must be at least 1".into()));
        }
        if t.min_rows < 2 {
            return Err(ExohabError::Config("training.min_rows must be at least 2".into()));
        }
        if self.dataset.source == DatasetSource::Csv && self.dataset.csv_path.is_none() {
            return Err(ExohabError::Config(
                "dataset.csv_path is required when dataset.source = \"csv\"".into(),
            ));
        }
        Ok(())
    }

    /// True if `input` is one of the configured exit commands.
    pub fn is_exit_command(&self, input: &str) -> bool {
        self.lookup.is_exit_command(input)
    }
}

impl LookupConfig {
    pub fn is_exit_command(&self, input: &str) -> bool {
        let input = input.trim();
        self.exit_commands.iter().any(|c| c.eq_ignore_ascii_case(input))
    }
}
