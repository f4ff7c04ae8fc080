//! Header, quote, and date normalization helpers.
//!
//! Header names are normalized once and shared by the validator and the
//! transformer so both agree on key names. Date normalization reshapes
//! `M/D/Y` text into `YYYY-MM-DD` without validating numeric ranges; the
//! downstream import is the authority on calendar validity.

use std::borrow::Cow;

use crate::error::NormalizeError;

/// Lower-cases, trims, and strips byte-order-mark artifacts and literal
/// quote characters from a header name.
pub fn header(name: &str) -> String {
    let lowered = name.to_lowercase();
    lowered
        .trim()
        .replace('\u{feff}', "")
        .replace('"', "")
        .trim()
        .to_string()
}

/// Removes leading/trailing literal quote characters, borrowing when the
/// value is already unquoted.
pub fn strip_quotes(value: &str) -> Cow<'_, str> {
    let stripped = value.trim_matches('"');
    if stripped.len() == value.len() {
        Cow::Borrowed(value)
    } else {
        Cow::Borrowed(stripped)
    }
}

/// Converts `M/D/Y` text into `YYYY-MM-DD`.
///
/// Single-digit months and days are left-padded with `0`; a year shorter
/// than four characters is prefixed with `20`. Anything after the third
/// `/`-separated part is ignored.
pub fn date(value: &str) -> Result<String, NormalizeError> {
    let parts: Vec<&str> = value.split('/').collect();
    if parts.len() < 3 {
        return Err(NormalizeError::MalformedDate {
            value: value.to_string(),
        });
    }
    let month = pad_two(parts[0]);
    let day = pad_two(parts[1]);
    let year = if parts[2].len() < 4 {
        format!("20{}", parts[2])
    } else {
        parts[2].to_string()
    };
    Ok(format!("{year}-{month}-{day}"))
}

fn pad_two(part: &str) -> Cow<'_, str> {
    if part.len() < 2 {
        Cow::Owned(format!("0{part}"))
    } else {
        Cow::Borrowed(part)
    }
}
