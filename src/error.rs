//! Typed errors for the conversion pipeline.
//!
//! Validation errors are collected and reported together before the run
//! aborts; every other error halts the pipeline on first occurrence.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid date '{value}': expected month/day/year separated by '/'")]
    MalformedDate { value: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("unknown spend category code '{code}': no Workday spend category is mapped for this account")]
    UnknownSpendCategory { code: String },
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// One failed check from the pre-transformation syntax gate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "required column not present: '{name}' not found in the column headers; check the names or export a new file with the missing column"
    )]
    MissingColumn { name: String },
    #[error(
        "duplicate column name '{name}': column names must be unique; remove or rename the duplicates"
    )]
    DuplicateColumn { name: String },
    #[error("required column '{name}' has empty values; fill in the missing values and retry")]
    EmptyValues { name: String },
}
