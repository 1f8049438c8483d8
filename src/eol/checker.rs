//! Batch checking of manifest files against a shared release-cycle table

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::eol::error::CheckError;
use crate::eol::evaluator::check_range;
use crate::eol::report::render;
use crate::parser::{ManifestParser, PyprojectTomlParser};
use crate::release::{EolPolicy, ReleaseCycleTable};

/// Inputs shared by every manifest in a run
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub table: &'a ReleaseCycleTable,
    pub reference_date: NaiveDate,
    pub policy: EolPolicy,
}

/// Check manifest `content` using `parser` to find the version range
pub fn check_content<P: ManifestParser>(
    parser: &P,
    content: &str,
    ctx: &CheckContext<'_>,
) -> Result<(), CheckError> {
    let declaration = parser
        .locate_range(content)?
        .filter(|d| !d.is_blank())
        .ok_or(CheckError::RequiresRangeNotFound)?;

    debug!(
        "Found range '{}' at {}:{}",
        declaration.expression, declaration.line, declaration.column
    );

    check_range(
        declaration.expression.trim(),
        ctx.table,
        ctx.reference_date,
        ctx.policy,
    )
}

/// Check a single pyproject.toml on disk
pub fn check_manifest(path: &Path, ctx: &CheckContext<'_>) -> Result<(), CheckError> {
    let content = std::fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    check_content(&PyprojectTomlParser::new(), &content, ctx)
}

/// Check every file, writing one line per failing file to `out`.
///
/// Files are independent: a failure in one never stops the others.
/// Returns whether any file failed.
pub fn check_files<W: Write>(
    paths: &[PathBuf],
    ctx: &CheckContext<'_>,
    out: &mut W,
) -> std::io::Result<bool> {
    let mut failed = false;

    for path in paths {
        match check_manifest(path, ctx) {
            Ok(()) => debug!("{:?}: ok", path),
            Err(e) => {
                info!("{:?}: {}", path, e);
                writeln!(out, "{}", render(&path.display().to_string(), &e))?;
                failed = true;
            }
        }
    }

    Ok(failed)
}
