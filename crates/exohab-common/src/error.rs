use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExohabError {
    /// Provider unreachable or answered with a non-success status.
    #[error("Dataset fetch failed: {0}")]
    Fetch(String),

    #[error("Dataset contained no usable records after cleaning ({dropped} rows dropped)")]
    EmptyResult { dropped: usize },

    #[error("Insufficient data: {rows} usable rows, at least {required} required")]
    InsufficientData { rows: usize, required: usize },

    #[error("Planet not found: {0}")]
    NotFound(String),

    #[error("Model has not been trained")]
    ModelNotTrained,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExohabError {
    /// True for errors the interactive loop reports and survives.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExohabError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ExohabError>;
