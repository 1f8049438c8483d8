//! Release record: one Python minor version and its lifecycle metadata

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use pep508_rs::pep440_rs::Version;

use crate::config::RUNTIME_NAME;
use crate::release::date::parse_eol_date;
use crate::release::error::ReleaseError;

/// Release phase as described by PEP 602
///
/// See: https://devguide.python.org/versions/#status-key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleasePhase {
    Feature,
    Prerelease,
    Bugfix,
    Security,
    EndOfLife,
}

impl ReleasePhase {
    /// Returns the string representation used by the release-cycle JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleasePhase::Feature => "feature",
            ReleasePhase::Prerelease => "prerelease",
            ReleasePhase::Bugfix => "bugfix",
            ReleasePhase::Security => "security",
            ReleasePhase::EndOfLife => "end-of-life",
        }
    }

    pub fn is_end_of_life(&self) -> bool {
        matches!(self, ReleasePhase::EndOfLife)
    }
}

impl FromStr for ReleasePhase {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feature" => Ok(ReleasePhase::Feature),
            "prerelease" => Ok(ReleasePhase::Prerelease),
            "bugfix" => Ok(ReleasePhase::Bugfix),
            "security" => Ok(ReleasePhase::Security),
            "end-of-life" => Ok(ReleasePhase::EndOfLife),
            _ => Err(ReleaseError::UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for ReleasePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which triggers mark a release as end-of-life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EolPolicy {
    /// `end-of-life` status, or an end-of-life date on or before the reference date
    #[default]
    StatusOrDate,
    /// Trust the cached status alone and ignore end-of-life dates
    StatusOnly,
}

/// Lifecycle metadata for a single release
///
/// Two records describe the same release when their [`key`](Self::key)s are
/// equal; the derived `PartialEq` compares every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub version: Version,
    pub status: ReleasePhase,
    pub end_of_life: NaiveDate,
}

impl ReleaseRecord {
    /// Build a record from the raw strings found in the release-cycle JSON
    pub fn from_source(version: &str, status: &str, end_of_life: &str) -> Result<Self, ReleaseError> {
        let parsed = Version::from_str(version).map_err(|e| ReleaseError::InvalidVersion {
            version: version.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            version: parsed,
            status: status.parse()?,
            end_of_life: parse_eol_date(end_of_life)?,
        })
    }

    /// Identity of the record within a release-cycle table
    pub fn key(&self) -> &Version {
        &self.version
    }

    /// Whether this release counts as end-of-life on `reference_date`
    ///
    /// Status and date are independent triggers; an `end-of-life` status wins
    /// even when the recorded date is still in the future.
    pub fn is_eol(&self, reference_date: NaiveDate, policy: EolPolicy) -> bool {
        if self.status.is_end_of_life() {
            return true;
        }

        match policy {
            EolPolicy::StatusOrDate => self.end_of_life <= reference_date,
            EolPolicy::StatusOnly => false,
        }
    }
}

impl fmt::Display for ReleaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - Status: {}, EOL: {}",
            RUNTIME_NAME, self.version, self.status, self.end_of_life
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_source_builds_record_with_month_only_date() {
        let record = ReleaseRecord::from_source("3.14", "prerelease", "2030-10").unwrap();

        assert_eq!(
            record,
            ReleaseRecord {
                version: Version::from_str("3.14").unwrap(),
                status: ReleasePhase::Prerelease,
                end_of_life: date(2030, 10, 1),
            }
        );
    }

    #[test]
    fn from_source_rejects_invalid_version() {
        let err = ReleaseRecord::from_source("three.eight", "bugfix", "2030-10").unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidVersion { ref version, .. } if version == "three.eight"));
    }

    #[test]
    fn from_source_rejects_unknown_status() {
        let err = ReleaseRecord::from_source("3.8", "retired", "2024-10-07").unwrap_err();
        assert!(matches!(err, ReleaseError::UnknownStatus(ref s) if s == "retired"));
    }

    #[test]
    fn from_source_propagates_date_errors() {
        let err = ReleaseRecord::from_source("3.8", "end-of-life", "October 2024").unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidDateFormat(_)));
    }

    #[rstest]
    #[case("feature", ReleasePhase::Feature)]
    #[case("prerelease", ReleasePhase::Prerelease)]
    #[case("bugfix", ReleasePhase::Bugfix)]
    #[case("security", ReleasePhase::Security)]
    #[case("end-of-life", ReleasePhase::EndOfLife)]
    fn release_phase_parses_and_displays(#[case] input: &str, #[case] expected: ReleasePhase) {
        let phase: ReleasePhase = input.parse().unwrap();
        assert_eq!(phase, expected);
        assert_eq!(phase.to_string(), input);
    }

    #[test]
    fn key_ignores_status_and_date() {
        let a = ReleaseRecord::from_source("3.10", "security", "2026-10").unwrap();
        let b = ReleaseRecord::from_source("3.10.0", "end-of-life", "2026-10-04").unwrap();

        assert_eq!(a.key(), b.key());
        assert_ne!(a, b);
    }

    #[rstest]
    // status alone
    #[case("end-of-life", "2099-01-01", EolPolicy::StatusOrDate, true)]
    #[case("end-of-life", "2099-01-01", EolPolicy::StatusOnly, true)]
    // date on or before the reference date
    #[case("security", "2025-05-01", EolPolicy::StatusOrDate, true)]
    #[case("security", "2025-04-30", EolPolicy::StatusOrDate, true)]
    #[case("security", "2025-05-02", EolPolicy::StatusOrDate, false)]
    // dates are ignored when only status is trusted
    #[case("security", "2020-01-01", EolPolicy::StatusOnly, false)]
    fn is_eol_combines_status_and_date(
        #[case] status: &str,
        #[case] eol: &str,
        #[case] policy: EolPolicy,
        #[case] expected: bool,
    ) {
        let record = ReleaseRecord::from_source("3.9", status, eol).unwrap();
        assert_eq!(record.is_eol(date(2025, 5, 1), policy), expected);
    }

    #[test]
    fn display_includes_status_and_date() {
        let record = ReleaseRecord::from_source("3.8", "end-of-life", "2024-10-07").unwrap();
        assert_eq!(
            record.to_string(),
            "Python 3.8 - Status: end-of-life, EOL: 2024-10-07"
        );
    }
}
