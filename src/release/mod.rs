//! Release-cycle data for the Python runtime
//!
//! # Modules
//!
//! - [`date`]: End-of-life date parsing (`YYYY-MM-DD` and `YYYY-MM`)
//! - [`record`]: A single release and its lifecycle phase
//! - [`table`]: The release-cycle table loaded from the cache JSON
//! - [`source`]: Fetching the release cycle from the network and refreshing the cache
//! - [`error`]: Error types for loading and refreshing

pub mod date;
pub mod error;
pub mod record;
pub mod source;
pub mod table;

pub use error::{ReleaseError, SourceError};
pub use record::{EolPolicy, ReleasePhase, ReleaseRecord};
pub use table::{RawRelease, ReleaseCycleTable};
