//! Row exclusion and transformation.
//!
//! A [`TransformPlan`] is built once from the input headers: it resolves
//! every source column the mapping table references, records which
//! normalization rule applies to each input column, and precomputes the
//! source of each output field. Rows are then screened and transformed by
//! walking the plan, so per-row work is index lookups only.

use anyhow::{Result, anyhow};

use crate::{error::TransformError, mapping, normalize};

/// Normalization applied to an input column before output assembly.
#[derive(Debug, Clone, Copy)]
enum ColumnRule {
    Verbatim,
    Date,
    SpendCategory,
    Description,
}

/// Where an output field's value comes from.
#[derive(Debug, Clone, Copy)]
enum OutputSource {
    Column(usize),
    Constant(&'static str),
    DocumentNumber,
    Blank,
}

#[derive(Debug)]
pub struct TransformPlan {
    rules: Vec<ColumnRule>,
    outputs: Vec<OutputSource>,
    folio_number: usize,
    vendor_code: usize,
    external_account: usize,
    payment_method: usize,
    acquisitions_units: usize,
}

impl TransformPlan {
    pub fn new(headers: &[String]) -> Result<Self> {
        let normalized: Vec<String> =
            headers.iter().map(|name| normalize::header(name)).collect();
        let find = |name: &str| {
            normalized
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| anyhow!("Column '{name}' not found in the input file"))
        };

        let rules = normalized
            .iter()
            .map(|header| match header.as_str() {
                mapping::FIELD_INVOICE_DATE | mapping::FIELD_APPROVED_DATE => ColumnRule::Date,
                mapping::FIELD_EXTERNAL_ACCOUNT => ColumnRule::SpendCategory,
                mapping::FIELD_DESCRIPTION => ColumnRule::Description,
                _ => ColumnRule::Verbatim,
            })
            .collect();

        let outputs = mapping::FIELD_MAPPING
            .iter()
            .map(|(name, source)| {
                if source.is_empty() {
                    Ok(match *name {
                        "Fund" => OutputSource::Constant(mapping::CONSTANT_FUND),
                        "Cost Center" => OutputSource::Constant(mapping::CONSTANT_COST_CENTER),
                        "Program" => OutputSource::Constant(mapping::CONSTANT_PROGRAM),
                        "Lib Document Number" => OutputSource::DocumentNumber,
                        _ => OutputSource::Blank,
                    })
                } else {
                    find(source).map(OutputSource::Column)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TransformPlan {
            rules,
            outputs,
            folio_number: find(mapping::FIELD_FOLIO_INVOICE_NUMBER)?,
            vendor_code: find(mapping::FIELD_VENDOR_CODE)?,
            external_account: find(mapping::FIELD_EXTERNAL_ACCOUNT)?,
            payment_method: find(mapping::FIELD_PAYMENT_METHOD)?,
            acquisitions_units: find(mapping::FIELD_ACQUISITIONS_UNITS)?,
        })
    }

    /// True when the row belongs to a purchase-card order or an excluded
    /// fund and must not appear in the Workday file.
    pub fn is_excluded(&self, row: &[String]) -> bool {
        field(row, self.vendor_code) == mapping::MARKETPLACE_VENDOR_CODE
            || normalize::strip_quotes(field(row, self.external_account))
                == mapping::EXCLUDED_ACCOUNT
            || field(row, self.payment_method)
                .eq_ignore_ascii_case(mapping::EXCLUDED_PAYMENT_METHOD)
            || field(row, self.acquisitions_units)
                .eq_ignore_ascii_case(mapping::EXCLUDED_ACQUISITIONS_UNIT)
    }

    /// Normalizes the row's columns, then assembles the output record in
    /// mapping-table order.
    pub fn transform_row(&self, row: &[String]) -> Result<Vec<String>, TransformError> {
        let mut intermediate = Vec::with_capacity(self.rules.len());
        for (idx, rule) in self.rules.iter().enumerate() {
            let raw = field(row, idx);
            let value = match rule {
                ColumnRule::Verbatim => raw.to_string(),
                ColumnRule::Date => normalize::date(raw)?,
                ColumnRule::SpendCategory => {
                    let code = normalize::strip_quotes(raw);
                    mapping::spend_category(&code)
                        .ok_or_else(|| TransformError::UnknownSpendCategory {
                            code: code.into_owned(),
                        })?
                        .to_string()
                }
                ColumnRule::Description => format!("\"{}\"", normalize::strip_quotes(raw)),
            };
            intermediate.push(value);
        }

        let mut record = Vec::with_capacity(self.outputs.len());
        for output in &self.outputs {
            let value = match output {
                OutputSource::Column(idx) => intermediate[*idx].clone(),
                OutputSource::Constant(value) => (*value).to_string(),
                OutputSource::DocumentNumber => format!(
                    "{}{}",
                    mapping::DOCUMENT_NUMBER_PREFIX,
                    intermediate[self.folio_number]
                ),
                OutputSource::Blank => String::new(),
            };
            record.push(value);
        }
        Ok(record)
    }
}

fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}
