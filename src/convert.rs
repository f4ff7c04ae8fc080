//! The conversion pipeline: read, validate, screen/transform, write.
//!
//! The whole input is loaded into memory before anything else happens.
//! Validation is a gate over every row (rows that will later be screened
//! out still participate), and the output file is only created after every
//! row has transformed successfully, so a failed run never leaves a
//! partial Workday file behind.

use anyhow::{Context, Result, bail};
use log::{error, info};

use crate::{cli::ConvertArgs, io_utils, mapping, transform::TransformPlan, validate};

pub fn execute(args: &ConvertArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;

    info!("Opening '{}' for processing", args.input.display());
    let mut reader = io_utils::open_csv_reader_from_path(&args.input, delimiter)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)
        .with_context(|| format!("Reading headers from {:?}", args.input))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (ordinal, result) in reader.into_byte_records().enumerate() {
        let record = result.with_context(|| format!("Reading row {}", ordinal + 2))?;
        rows.push(io_utils::decode_record(&record, encoding)?);
    }
    info!("File retrieved and parsed: {} data row(s)", rows.len());

    info!("Checking file syntax");
    let required = mapping::required_fields();
    let errors = validate::check_syntax(&headers, &rows, &required);
    if !errors.is_empty() {
        for err in &errors {
            error!("{err}");
        }
        bail!(
            "{} validation error(s) found in {:?}; no output written",
            errors.len(),
            args.input
        );
    }

    info!("Screening out purchase-card and excluded-fund orders");
    let plan = TransformPlan::new(&headers)?;
    let mut output_rows: Vec<Vec<String>> = Vec::new();
    let mut excluded = 0usize;
    for (ordinal, row) in rows.iter().enumerate() {
        if plan.is_excluded(row) {
            excluded += 1;
            continue;
        }
        let record = plan
            .transform_row(row)
            .with_context(|| format!("Transforming row {}", ordinal + 2))?;
        output_rows.push(record);
    }

    let mut writer = io_utils::open_csv_writer(&args.output)?;
    writer
        .write_record(mapping::output_headers())
        .context("Writing output headers")?;
    for record in &output_rows {
        writer.write_record(record).context("Writing output row")?;
    }
    writer.flush().context("Flushing output")?;

    info!(
        "Transformation finished: {} row(s) written to {:?}, {} excluded",
        output_rows.len(),
        args.output,
        excluded
    );
    Ok(())
}
