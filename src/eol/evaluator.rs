//! End-of-life evaluation of a version range against the release cycle

use chrono::NaiveDate;
use tracing::debug;

use crate::eol::error::CheckError;
use crate::eol::matcher::RangeMatcher;
use crate::release::{EolPolicy, ReleaseCycleTable, ReleaseRecord};

/// Collect the releases covered by `range` that are end-of-life on `reference_date`.
///
/// The range is parsed once before any record is inspected. The result is
/// sorted by version, lowest first; an empty result means nothing in range is
/// end-of-life, including the case where nothing in the table is in range.
pub fn evaluate(
    range: &str,
    table: &ReleaseCycleTable,
    reference_date: NaiveDate,
    policy: EolPolicy,
) -> Result<Vec<ReleaseRecord>, CheckError> {
    let matcher = RangeMatcher::parse(range)?;

    let mut unsupported: Vec<ReleaseRecord> = table
        .iter()
        .filter(|record| matcher.matches(record.key()))
        .filter(|record| {
            let eol = record.is_eol(reference_date, policy);
            debug!("{} in '{}': eol={}", record, range, eol);
            eol
        })
        .cloned()
        .collect();

    unsupported.sort_by(|a, b| a.key().cmp(b.key()));
    Ok(unsupported)
}

/// Like [`evaluate`], but any end-of-life release becomes [`CheckError::EolFound`]
pub fn check_range(
    range: &str,
    table: &ReleaseCycleTable,
    reference_date: NaiveDate,
    policy: EolPolicy,
) -> Result<(), CheckError> {
    let releases = evaluate(range, table, reference_date, policy)?;

    if releases.is_empty() {
        Ok(())
    } else {
        Err(CheckError::EolFound { releases })
    }
}
