//! Static tables driving the conversion.
//!
//! The field mapping is an ordered slice rather than a map so the output
//! column order is explicit and identical for every row. Targets are the
//! normalized (lower-cased) source column names; an empty target marks a
//! derived or constant output field.

use itertools::Itertools;

pub const DEFAULT_OUTPUT_FILE: &str = "workdayfile.csv";

/// Output column name paired with its source column, in output order.
pub const FIELD_MAPPING: &[(&str, &str)] = &[
    ("Invoice Key", "folio invoice number"),
    ("Lib Document Number", ""),
    ("Supplier", "accounting code"),
    ("Invoice Date", "invoice date"),
    ("Invoice Received Date", "approved date"),
    ("Supplier Invoice Number", "vendor invoice number"),
    ("External PO Number", ""),
    ("Memo", ""),
    ("Original Supplier Invoice Number", "vendor invoice number"),
    ("Line Order", "invoice line number"),
    ("Item Description", "description (title)"),
    ("Line Memo", ""),
    ("Spend Category", "external account number"),
    ("Extended Amount", "total"),
    ("Designation", ""),
    ("Fund", ""),
    ("Cost Center", ""),
    ("Program", ""),
    ("Gift", ""),
    ("Grant", ""),
    ("Project", ""),
    ("Activity", ""),
];

/// Composite ledger account string mapped to its Workday spend category.
pub const SPEND_CATEGORIES: &[(&str, &str)] = &[
    ("CC0141-SC0049-FD100-P44100", "SC0049"),
    ("CC0141-SC0050-FD100-P44100", "SC0050"),
    ("CC0141-SC0146-FD100-P44100", "SC0146"),
    ("CC0141-SC0147-FD100-P44100", "SC0147"),
    ("CC0141-SC0148-FD100-P44100", "SC0148"),
    ("CC0141-SC0177-FD100-P44100", "SC0177"),
    ("CC0141-SC0229-FD100-P44100", "SC0229"),
    ("CC0141-SC0230-FD100-P44100", "SC0230"),
    ("CC0141-SC0231-FD100-P44100", "SC0231"),
    ("CC0141-SC0232-FD100-P44100", "SC0232"),
    ("CC0141-DS0125-FD100-P44100", "SC0049"),
];

/// Marketplace orders are paid by purchase card and stay out of the ledger.
pub const MARKETPLACE_VENDOR_CODE: &str = "AMAZO";
/// Cost-center/fund/program combination excluded from the Workday file.
pub const EXCLUDED_ACCOUNT: &str = "CC0159-FD620-P10000-EN655700";
/// Payment method screened out of the ledger (matched case-insensitively).
pub const EXCLUDED_PAYMENT_METHOD: &str = "credit card";
/// Acquisitions unit screened out of the ledger (matched case-insensitively).
pub const EXCLUDED_ACQUISITIONS_UNIT: &str = "library designated fund";

pub const CONSTANT_FUND: &str = "FD100";
pub const CONSTANT_COST_CENTER: &str = "CC0141";
pub const CONSTANT_PROGRAM: &str = "P44100";
pub const DOCUMENT_NUMBER_PREFIX: &str = "LIB-";

// Normalized source columns with transformation or filtering rules.
pub const FIELD_FOLIO_INVOICE_NUMBER: &str = "folio invoice number";
pub const FIELD_INVOICE_DATE: &str = "invoice date";
pub const FIELD_APPROVED_DATE: &str = "approved date";
pub const FIELD_DESCRIPTION: &str = "description (title)";
pub const FIELD_EXTERNAL_ACCOUNT: &str = "external account number";
pub const FIELD_VENDOR_CODE: &str = "vendor code";
pub const FIELD_PAYMENT_METHOD: &str = "payment method";
pub const FIELD_ACQUISITIONS_UNITS: &str = "acquisitions units";

/// Distinct non-empty mapping targets; these source columns must be present
/// and populated in every input row.
pub fn required_fields() -> Vec<&'static str> {
    FIELD_MAPPING
        .iter()
        .map(|(_, source)| *source)
        .filter(|source| !source.is_empty())
        .unique()
        .collect()
}

/// Output header names in mapping-table order.
pub fn output_headers() -> Vec<&'static str> {
    FIELD_MAPPING.iter().map(|(name, _)| *name).collect()
}

pub fn spend_category(code: &str) -> Option<&'static str> {
    SPEND_CATEGORIES
        .iter()
        .find(|(account, _)| *account == code)
        .map(|(_, category)| *category)
}
