//! End-of-life date parsing
//!
//! Two shapes are accepted:
//! - `YYYY-MM-DD` - an ISO 8601 calendar date
//! - `YYYY-MM` - the 1st of the given month
//!
//! Every field must be zero-padded to its full width; signs are rejected.

use chrono::NaiveDate;

use crate::release::error::ReleaseError;

pub fn parse_eol_date(date_str: &str) -> Result<NaiveDate, ReleaseError> {
    let invalid = || ReleaseError::InvalidDateFormat(date_str.to_string());

    let parts: Vec<&str> = date_str.split('-').collect();
    let widths_ok = parts
        .iter()
        .zip([4, 2, 2])
        .all(|(part, width)| part.len() == width && part.bytes().all(|b| b.is_ascii_digit()));
    if !widths_ok {
        return Err(invalid());
    }

    match parts.as_slice() {
        [_, _, _] => NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| invalid()),
        [year, month] => {
            let year: i32 = year.parse().map_err(|_| invalid())?;
            let month: u32 = month.parse().map_err(|_| invalid())?;
            NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}
