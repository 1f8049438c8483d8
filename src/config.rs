use std::path::PathBuf;

use chrono::NaiveDate;

use crate::release::record::EolPolicy;

// =============================================================================
// Release-cycle source
// =============================================================================

/// Upstream release-cycle JSON published alongside the Python devguide
pub const RELEASE_CYCLE_URL: &str = "https://peps.python.org/api/release-cycle.json";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent when refreshing the release-cycle cache
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_REPOSITORY"),
    ") reqwest"
);

// =============================================================================
// Manifest lookup
// =============================================================================

/// Name of the runtime used in report messages
pub const RUNTIME_NAME: &str = "Python";

/// Table holding the version-range declaration in pyproject.toml
pub const RANGE_TABLE: &str = "project";

/// Key holding the version-range declaration inside [`RANGE_TABLE`]
pub const RANGE_FIELD: &str = "requires-python";

/// File name of the release-cycle cache written by `bump-cache`
pub const CACHE_FILE_NAME: &str = "release-cycle.json";

/// Options for a single check run, assembled by the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOptions {
    /// Explicit release-cycle cache; `None` falls back to [`release_cycle_cache_path`]
    /// and then to the bundled snapshot
    pub cache_path: Option<PathBuf>,
    /// Date treated as "today" when comparing end-of-life dates
    pub reference_date: NaiveDate,
    pub policy: EolPolicy,
}

impl CheckOptions {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            cache_path: None,
            reference_date,
            policy: EolPolicy::default(),
        }
    }
}

/// Returns the path to the data directory for check-eol.
/// Uses $XDG_DATA_HOME/check-eol if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/check-eol,
/// or ./check-eol if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path of the release-cycle cache refreshed by `bump-cache`.
pub fn release_cycle_cache_path() -> PathBuf {
    data_dir().join(CACHE_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("check-eol")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/check-eol"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/check-eol"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./check-eol"));
    }

    #[test]
    fn check_options_default_to_status_or_date_policy() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let options = CheckOptions::new(date);

        assert_eq!(options.policy, EolPolicy::StatusOrDate);
        assert_eq!(options.cache_path, None);
        assert_eq!(options.reference_date, date);
    }

    #[test]
    fn user_agent_names_the_crate() {
        assert!(USER_AGENT.starts_with("check-eol/"));
    }
}
