#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// Header line of a well-formed FOLIO invoice export, in vendor order.
pub const INVOICE_HEADER: &str = "FOLIO Invoice Number,Accounting code,Invoice date,Approved date,Vendor invoice number,Invoice line number,Description (Title),Total,External account number,Vendor code,Payment method,Acquisitions units";

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// One invoice data line matching [`INVOICE_HEADER`], with overridable
/// folio number, dates, payment method, and account code.
pub struct InvoiceRow {
    pub folio_number: String,
    pub accounting_code: String,
    pub invoice_date: String,
    pub approved_date: String,
    pub vendor_invoice_number: String,
    pub line_number: String,
    pub description: String,
    pub total: String,
    pub external_account: String,
    pub vendor_code: String,
    pub payment_method: String,
    pub acquisitions_units: String,
}

impl Default for InvoiceRow {
    fn default() -> Self {
        Self {
            folio_number: "10377".into(),
            accounting_code: "EBSCO".into(),
            invoice_date: "3/4/23".into(),
            approved_date: "3/6/23".into(),
            vendor_invoice_number: "INV-991".into(),
            line_number: "1".into(),
            description: "Journal of Testing".into(),
            total: "125.00".into(),
            external_account: "CC0141-SC0049-FD100-P44100".into(),
            vendor_code: "EBSCO".into(),
            payment_method: "EFT".into(),
            acquisitions_units: "Main Library".into(),
        }
    }
}

impl InvoiceRow {
    pub fn to_csv_line(&self) -> String {
        [
            &self.folio_number,
            &self.accounting_code,
            &self.invoice_date,
            &self.approved_date,
            &self.vendor_invoice_number,
            &self.line_number,
            &self.description,
            &self.total,
            &self.external_account,
            &self.vendor_code,
            &self.payment_method,
            &self.acquisitions_units,
        ]
        .map(|field| field.as_str())
        .join(",")
    }
}

/// Builds a complete invoice file from the shared header and `rows`.
pub fn invoice_file(rows: &[InvoiceRow]) -> String {
    let mut contents = String::from(INVOICE_HEADER);
    contents.push('\n');
    for row in rows {
        contents.push_str(&row.to_csv_line());
        contents.push('\n');
    }
    contents
}
