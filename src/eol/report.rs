//! User-facing messages for per-manifest results

use crate::config::RUNTIME_NAME;
use crate::eol::error::CheckError;
use crate::release::ReleaseRecord;

/// Join release versions with `, ` in the order given
pub fn join_versions(releases: &[ReleaseRecord]) -> String {
    releases
        .iter()
        .map(|r| r.version.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the end-of-life finding for `file`, or `None` when there is none
pub fn format(file: &str, unsupported: &[ReleaseRecord]) -> Option<String> {
    if unsupported.is_empty() {
        return None;
    }

    Some(format!(
        "{}: EOL {} support found: {}",
        file,
        RUNTIME_NAME,
        join_versions(unsupported)
    ))
}

/// Render any per-manifest error as a single output line
pub fn render(file: &str, error: &CheckError) -> String {
    match error {
        CheckError::EolFound { releases } => {
            format(file, releases).unwrap_or_else(|| format!("{file}: {error}"))
        }
        CheckError::RequiresRangeNotFound => format!("{file} {error}"),
        _ => format!("{file}: {error}"),
    }
}
