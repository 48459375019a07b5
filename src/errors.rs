use thiserror::Error;

/// Error type that captures forecast, configuration, and storage failures.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown accrual policy `{policy}` on account `{account}`")]
    UnknownAccrualPolicy { account: String, policy: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
