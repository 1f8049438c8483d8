//! Release-cycle table loaded from the devguide JSON
//!
//! The JSON is an object keyed by version string:
//!
//! ```json
//! {
//!   "3.8": {
//!     "branch": "3.8",
//!     "status": "end-of-life",
//!     "end_of_life": "2024-10-07"
//!   }
//! }
//! ```
//!
//! Only `status` and `end_of_life` are read; everything else is ignored.

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use pep508_rs::pep440_rs::Version;
use serde::Deserialize;
use tracing::{debug, info};

use crate::release::error::ReleaseError;
use crate::release::record::ReleaseRecord;

/// Snapshot of the upstream release cycle compiled into the binary
const BUNDLED_RELEASE_CYCLE: &str = include_str!("../../data/release-cycle.json");

/// Raw per-version entry of the release-cycle JSON
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawRelease {
    pub status: String,
    pub end_of_life: String,
}

/// Release records keyed by version
///
/// Records keep their load order; callers ask for [`ascending`](Self::ascending)
/// or [`descending`](Self::descending) when they need one.
#[derive(Debug, Clone)]
pub struct ReleaseCycleTable {
    records: Vec<ReleaseRecord>,
}

impl ReleaseCycleTable {
    /// Build a table from `(version, entry)` pairs.
    ///
    /// Versions are compared after PEP 440 normalization, so `3.10` and
    /// `3.10.0` are the same release. A later duplicate replaces the earlier
    /// record but keeps its position.
    pub fn load<I>(entries: I) -> Result<Self, ReleaseError>
    where
        I: IntoIterator<Item = (String, RawRelease)>,
    {
        let mut records: Vec<ReleaseRecord> = Vec::new();
        let mut positions: HashMap<Version, usize> = HashMap::new();

        for (version, raw) in entries {
            let record = ReleaseRecord::from_source(&version, &raw.status, &raw.end_of_life)?;

            match positions.get(record.key()) {
                Some(&idx) => {
                    debug!("Duplicate release {} replaces earlier entry", version);
                    records[idx] = record;
                }
                None => {
                    positions.insert(record.key().clone(), records.len());
                    records.push(record);
                }
            }
        }

        if records.is_empty() {
            return Err(ReleaseError::EmptyTable);
        }

        Ok(Self { records })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ReleaseError> {
        let entries: IndexMap<String, RawRelease> = serde_json::from_str(json)?;
        Self::load(entries)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ReleaseError> {
        let entries: IndexMap<String, RawRelease> = serde_json::from_value(value)?;
        Self::load(entries)
    }

    /// Load a release-cycle cache file
    pub fn from_path(path: &Path) -> Result<Self, ReleaseError> {
        info!("Loading release cycle from {:?}", path);

        let contents = std::fs::read_to_string(path).map_err(|source| ReleaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_json_str(&contents)?;
        debug!("Loaded {} releases", table.len());
        Ok(table)
    }

    /// Load the snapshot shipped with the binary
    pub fn bundled() -> Result<Self, ReleaseError> {
        debug!("Loading bundled release cycle");
        Self::from_json_str(BUNDLED_RELEASE_CYCLE)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in load order
    pub fn iter(&self) -> impl Iterator<Item = &ReleaseRecord> {
        self.records.iter()
    }

    pub fn get(&self, version: &Version) -> Option<&ReleaseRecord> {
        self.records.iter().find(|r| r.key() == version)
    }

    /// Records sorted by version, lowest first
    pub fn ascending(&self) -> Vec<&ReleaseRecord> {
        let mut sorted: Vec<&ReleaseRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.key().cmp(b.key()));
        sorted
    }

    /// Records sorted by version, newest first
    pub fn descending(&self) -> Vec<&ReleaseRecord> {
        let mut sorted = self.ascending();
        sorted.reverse();
        sorted
    }
}
