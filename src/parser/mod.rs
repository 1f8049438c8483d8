//! Parser layer
//! - traits.rs: ManifestParser trait definition
//! - types.rs: Common types (RangeDeclaration)
//! - pyproject_toml.rs: pyproject.toml parser

pub mod pyproject_toml;
pub mod traits;
pub mod types;

pub use pyproject_toml::PyprojectTomlParser;
pub use traits::{ManifestParser, ParseError};
pub use types::RangeDeclaration;
