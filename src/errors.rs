use thiserror::Error;

/// Result type for analysis operations
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

/// Errors that can occur during keyword analysis
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Invalid hash parameters: prime {prime}, radix {radix} (both must be at least 2)")]
    InvalidHashParams { prime: u64, radix: u64 },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AnalyzeError {
    pub fn invalid_hash_params(prime: u64, radix: u64) -> Self {
        Self::InvalidHashParams { prime, radix }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
