use thiserror::Error;

/// Failures raised at the edges of the crate: reading documents, loading
/// configuration and writing reports. Aggregation itself never fails.
#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, InsightsError>;
