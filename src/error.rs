use crate::domain::key_pair::KeyIdentifier;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid key file '{path}': {reason}")]
    KeyFile { path: PathBuf, reason: String },

    #[error("Serial number {id} appears more than once (second copy in '{path}')")]
    DuplicateKey { id: KeyIdentifier, path: PathBuf },

    #[error("Error reading keys from '{path}': {source}")]
    StoreRead {
        path: PathBuf,
        #[source]
        source: Box<AppError>,
    },

    #[error("Could not reach the key API: {0}")]
    RemoteTransport(#[from] reqwest::Error),

    #[error("Key API response violated its contract: {0}")]
    RemoteContract(String),

    #[error("Failed to serialize key list output: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    pub fn store_read(path: impl Into<PathBuf>, source: AppError) -> Self {
        AppError::StoreRead {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Process exit status for a fatal error. Remote failures are split by
    /// class so scripts can tell an unreachable API from a malformed one.
    pub fn exit_status(&self) -> u8 {
        match self {
            AppError::RemoteTransport(_) => 5,
            AppError::RemoteContract(_) => 6,
            AppError::Serialization(_) => 3,
            _ => 1,
        }
    }
}
