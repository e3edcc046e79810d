//! Error types surfaced by stores and configuration.

use thiserror::Error;

/// Failure while writing to a key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend is not available")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode list: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Invalid configuration JSON.
#[derive(Debug, Error)]
#[error("invalid checklist config: {0}")]
pub struct ConfigError(#[from] serde_json::Error);
