use std::path::PathBuf;

use clap::Parser;

use crate::mapping;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Convert a FOLIO invoice CSV export into a Workday import file",
    long_about = None
)]
pub struct ConvertArgs {
    /// Invoice CSV file exported from FOLIO
    pub input: PathBuf,
    /// Destination CSV file for the Workday import
    #[arg(short = 'o', long = "output", default_value = mapping::DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
