//! pyproject.toml parser for the `requires-python` declaration (PEP 621)
//!
//! Supports both spellings:
//! - `requires-python` inside the `[project]` table
//! - a top-level dotted key `project.requires-python = "..."`
//!
//! Inline tables (`project = { ... }`) are not searched.

use tracing::{debug, warn};

use crate::config::{RANGE_FIELD, RANGE_TABLE};
use crate::parser::traits::{ManifestParser, ParseError};
use crate::parser::types::RangeDeclaration;

/// Parser for pyproject.toml files
pub struct PyprojectTomlParser;

impl PyprojectTomlParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PyprojectTomlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser for PyprojectTomlParser {
    fn locate_range(&self, content: &str) -> Result<Option<RangeDeclaration>, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_toml_ng::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set TOML language for tree-sitter: {}", e);
            ParseError::TreeSitter(e.to_string())
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            warn!("Failed to parse TOML content");
            ParseError::ParseFailed("Failed to parse TOML".to_string())
        })?;

        let root = tree.root_node();
        if root.has_error() {
            warn!("TOML content has syntax errors; searching the recoverable parts");
        }

        let found = self.find_declaration(root, content);
        debug!("{} declaration: {:?}", RANGE_FIELD, found);
        Ok(found)
    }
}

impl PyprojectTomlParser {
    /// Walk the top-level tables and pairs looking for the declaration
    fn find_declaration(&self, root: tree_sitter::Node, content: &str) -> Option<RangeDeclaration> {
        let dotted = format!("{RANGE_TABLE}.{RANGE_FIELD}");
        let mut cursor = root.walk();

        for child in root.children(&mut cursor) {
            let found = match child.kind() {
                "table" if table_name(child, content).as_deref() == Some(RANGE_TABLE) => {
                    self.find_in_table(child, content)
                }
                "pair" => self.value_for_key(child, content, &dotted),
                _ => None,
            };

            if found.is_some() {
                return found;
            }
        }

        None
    }

    /// Look for `requires-python = "..."` among the pairs of a table
    fn find_in_table(&self, table_node: tree_sitter::Node, content: &str) -> Option<RangeDeclaration> {
        let mut cursor = table_node.walk();

        for child in table_node.children(&mut cursor) {
            if child.kind() == "pair"
                && let Some(found) = self.value_for_key(child, content, RANGE_FIELD)
            {
                return Some(found);
            }
        }

        None
    }

    /// Return the string value of `pair_node` if its key equals `key_name`
    fn value_for_key(
        &self,
        pair_node: tree_sitter::Node,
        content: &str,
        key_name: &str,
    ) -> Option<RangeDeclaration> {
        let mut cursor = pair_node.walk();
        let mut is_target_key = false;

        for child in pair_node.children(&mut cursor) {
            match child.kind() {
                "bare_key" | "quoted_key" | "dotted_key" => {
                    is_target_key = normalize_key(&content[child.byte_range()]) == key_name;
                }
                "string" if is_target_key => {
                    let start = child.start_position();
                    return Some(RangeDeclaration {
                        expression: unquote(&content[child.byte_range()]).to_string(),
                        line: start.row,
                        column: start.column,
                    });
                }
                "=" | "comment" => {}
                _ if is_target_key => {
                    warn!("'{}' is not a string; ignoring it", key_name);
                    return None;
                }
                _ => {}
            }
        }

        None
    }
}

/// Name of a `[table]` header, or `None` for anything else
fn table_name(table_node: tree_sitter::Node, content: &str) -> Option<String> {
    let header = table_node.child(0)?;
    if header.kind() != "[" {
        return None;
    }

    let mut cursor = table_node.walk();
    table_node
        .children(&mut cursor)
        .find(|child| matches!(child.kind(), "bare_key" | "dotted_key" | "quoted_key"))
        .map(|child| normalize_key(&content[child.byte_range()]))
}

/// Strip whitespace around dots and quotes around key segments
fn normalize_key(raw: &str) -> String {
    raw.split('.')
        .map(|segment| unquote(segment.trim()))
        .collect::<Vec<_>>()
        .join(".")
}

/// Remove the outer quotes from a TOML string or quoted key
fn unquote(text: &str) -> &str {
    let trimmed = text.trim();
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if trimmed.len() >= quote.len() * 2
            && trimmed.starts_with(quote)
            && trimmed.ends_with(quote)
        {
            return &trimmed[quote.len()..trimmed.len() - quote.len()];
        }
    }
    trimmed
}
