//! check-eol: flag `requires-python` ranges that still cover end-of-life Python releases
//!
//! - [`parser`]: locates the version-range declaration in pyproject.toml
//! - [`release`]: the release-cycle table and its cache
//! - [`eol`]: range matching, end-of-life evaluation and reporting

pub mod config;
pub mod eol;
pub mod logging;
pub mod parser;
pub mod release;
