//! Version-range matching using PEP 440 version specifiers

use std::str::FromStr;

use pep508_rs::pep440_rs::{Operator, Version, VersionSpecifiers};
use tracing::warn;

use crate::eol::error::CheckError;

/// A parsed version-range expression such as `>=3.9,<4.0`
///
/// Every clause must hold for a version to match. Pre-release and dev
/// versions only match when an inclusive clause names a pre-release itself;
/// exclusions such as `!=3.14a1` never admit pre-releases.
#[derive(Debug, Clone)]
pub struct RangeMatcher {
    specifiers: VersionSpecifiers,
    allows_prereleases: bool,
}

impl RangeMatcher {
    pub fn parse(expression: &str) -> Result<Self, CheckError> {
        let specifiers = VersionSpecifiers::from_str(expression).map_err(|e| {
            warn!("Failed to parse version specifiers '{}': {}", expression, e);
            CheckError::InvalidRangeExpression {
                expression: expression.to_string(),
                reason: e.to_string(),
            }
        })?;

        let allows_prereleases = specifiers
            .iter()
            .filter(|spec| !matches!(spec.operator(), Operator::NotEqual | Operator::NotEqualStar))
            .any(|spec| spec.version().any_prerelease());

        Ok(Self {
            specifiers,
            allows_prereleases,
        })
    }

    pub fn matches(&self, version: &Version) -> bool {
        if version.any_prerelease() && !self.allows_prereleases {
            return false;
        }
        self.specifiers.contains(version)
    }
}

/// Check a single version against `expression`
pub fn matches(version: &Version, expression: &str) -> Result<bool, CheckError> {
    Ok(RangeMatcher::parse(expression)?.matches(version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn v(s: &str) -> Version {
        Version::from_str(s).unwrap()
    }

    #[rstest]
    #[case("3.9", ">=3.8,<4.0", true)]
    #[case("4.0", ">=3.8,<4.0", false)]
    #[case("3.7", ">=3.8,<4.0", false)]
    #[case("3.8", "==3.8", true)]
    #[case("3.8.1", "==3.8", false)]
    #[case("3.8.0", "==3.8", true)]
    #[case("3.9", "!=3.8", true)]
    #[case("3.8", "!=3.8", false)]
    #[case("3.11", "<=3.11", true)]
    #[case("3.12", "<=3.11", false)]
    #[case("3.12", ">3.11", true)]
    #[case("3.11", ">3.11", false)]
    #[case("3.10", "<3.11", true)]
    fn matches_comparison_operators(
        #[case] version: &str,
        #[case] expression: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(matches(&v(version), expression).unwrap(), expected);
    }

    #[rstest]
    #[case("3.9", "~=3.9", true)]
    #[case("3.14", "~=3.9", true)]
    #[case("4.0", "~=3.9", false)]
    #[case("3.9.5", "~=3.9.0", true)]
    #[case("3.10", "~=3.9.0", false)]
    fn matches_compatible_release(
        #[case] version: &str,
        #[case] expression: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(matches(&v(version), expression).unwrap(), expected);
    }

    #[rstest]
    #[case("3.9", "==3.*", true)]
    #[case("2.7", "==3.*", false)]
    #[case("3.8", "!=3.8.*", false)]
    #[case("3.9", "!=3.8.*", true)]
    fn matches_wildcards(#[case] version: &str, #[case] expression: &str, #[case] expected: bool) {
        assert_eq!(matches(&v(version), expression).unwrap(), expected);
    }

    #[rstest]
    #[case("3.14a1", ">=3.9", false)]
    #[case("3.14.0rc2", ">=3.9", false)]
    #[case("3.14.0.dev1", ">=3.9", false)]
    #[case("3.14b1", ">=3.14a1", true)]
    #[case("3.14b1", "!=3.14a1", false)]
    #[case("3.14b1", ">=3.9,!=3.14a1", false)]
    #[case("3.14b1", "==3.14b1", true)]
    #[case("3.14", ">=3.9", true)]
    fn matches_excludes_prereleases_unless_requested(
        #[case] version: &str,
        #[case] expression: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(matches(&v(version), expression).unwrap(), expected);
    }

    #[test]
    fn matches_with_spaces_between_clauses() {
        assert!(matches(&v("3.10"), ">= 3.9, < 4").unwrap());
    }

    #[rstest]
    #[case("invalid>>=spec")]
    #[case(">=")]
    #[case("~=3")]
    #[case(">=3.9;<4")]
    fn parse_rejects_malformed_expressions(#[case] expression: &str) {
        let err = RangeMatcher::parse(expression).unwrap_err();
        assert!(
            matches!(err, CheckError::InvalidRangeExpression { expression: ref e, .. } if e == expression)
        );
    }
}
