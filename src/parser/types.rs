//! Common types for parsers

/// A version-range declaration found in a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeDeclaration {
    /// Range expression with surrounding quotes removed (e.g. ">=3.9,<4.0")
    pub expression: String,
    /// Line number of the value (0-indexed)
    pub line: usize,
    /// Column number of the value (0-indexed)
    pub column: usize,
}

impl RangeDeclaration {
    /// Whether the declaration holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.expression.trim().is_empty()
    }
}
