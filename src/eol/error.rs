use std::path::PathBuf;

use thiserror::Error;

use crate::config::{RANGE_FIELD, RUNTIME_NAME};
use crate::eol::report::join_versions;
use crate::parser::ParseError;
use crate::release::ReleaseRecord;

/// Per-manifest failures; none of these abort a batch
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("EOL {} support found: {}", RUNTIME_NAME, join_versions(.releases))]
    EolFound { releases: Vec<ReleaseRecord> },

    #[error("'{}' could not be located, or it is empty.", RANGE_FIELD)]
    RequiresRangeNotFound,

    #[error("Invalid version range '{expression}': {reason}")]
    InvalidRangeExpression { expression: String, reason: String },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
