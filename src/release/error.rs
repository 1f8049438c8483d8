use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building the release-cycle table
#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("Unknown date format: '{0}'")]
    InvalidDateFormat(String),

    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Unknown release status: '{0}'")]
    UnknownStatus(String),

    #[error("Release cycle contains no releases")]
    EmptyTable,

    #[error("Malformed release cycle JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read release cycle from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while refreshing the release-cycle cache
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Fetched release cycle is unusable: {0}")]
    Release(#[from] ReleaseError),

    #[error("Failed to write cache to {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
