//! End-of-life checking for version-range declarations
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Parser    │────▶│  Evaluator  │────▶│   Report    │
//! │ (manifest)  │     │ (eol check) │     │  (message)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Matcher   │
//!                     │ (PEP 440)   │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`matcher`]: Version-range membership using PEP 440 specifiers
//! - [`evaluator`]: Selects end-of-life releases covered by a range
//! - [`report`]: Formats findings into output lines
//! - [`checker`]: Runs the evaluation over a batch of manifest files
//! - [`error`]: Per-manifest error type

pub mod checker;
pub mod error;
pub mod evaluator;
pub mod matcher;
pub mod report;

pub use checker::{CheckContext, check_content, check_files, check_manifest};
pub use error::CheckError;
pub use evaluator::{check_range, evaluate};
pub use matcher::RangeMatcher;
