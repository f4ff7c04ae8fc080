//! Pre-transformation syntax gate.
//!
//! Runs exactly once over the raw headers and every data row (including
//! rows the transformer will later screen out) and collects all failed
//! checks so they can be reported together before the run aborts.

use itertools::Itertools;

use crate::{error::ValidationError, normalize};

/// Checks required-column presence, required-column uniqueness, and empty
/// required values. Returns every violation found, in check order.
pub fn check_syntax(
    headers: &[String],
    rows: &[Vec<String>],
    required: &[&str],
) -> Vec<ValidationError> {
    let normalized: Vec<String> = headers.iter().map(|name| normalize::header(name)).collect();
    let mut errors = Vec::new();

    for name in required {
        if !normalized.iter().any(|header| header == name) {
            errors.push(ValidationError::MissingColumn {
                name: (*name).to_string(),
            });
        }
    }

    let counts = normalized.iter().map(String::as_str).counts();
    for name in required {
        if counts.get(name).copied().unwrap_or(0) > 1 {
            errors.push(ValidationError::DuplicateColumn {
                name: (*name).to_string(),
            });
        }
    }

    // One error per field regardless of how many rows are missing a value.
    for name in required {
        let columns: Vec<usize> = normalized.iter().positions(|header| header == name).collect();
        if columns.is_empty() {
            continue;
        }
        let has_empty = rows.iter().any(|row| {
            columns
                .iter()
                .any(|&idx| row.get(idx).map(String::as_str).unwrap_or("").is_empty())
        });
        if has_empty {
            errors.push(ValidationError::EmptyValues {
                name: (*name).to_string(),
            });
        }
    }

    errors
}
