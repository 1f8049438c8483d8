//! Parser trait definition

use crate::parser::types::RangeDeclaration;

/// Trait for locating the version-range declaration in a manifest
pub trait ManifestParser {
    /// Find the version-range declaration in `content`
    ///
    /// Returns `Ok(None)` when the manifest has no such field or the field
    /// is not a string.
    fn locate_range(&self, content: &str) -> Result<Option<RangeDeclaration>, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to parse the file structure
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    /// Tree-sitter related error
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}
