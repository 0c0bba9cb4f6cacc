//! Roster Parser
//!
//! Raw input → [`Roster`]. Three shapes are accepted:
//! - typed text, one player per line (tab or comma separated)
//! - rows already decoded by a CSV collaborator
//! - raw CSV bytes, decoded here with the `csv` crate
//!
//! Content is never rejected: short rows become records with empty fields.
//! The only failure is the decoder itself reporting an error.

pub mod csv_source;
pub mod parser;


use crate::error::ParseError;
use crate::models::Roster;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

pub use parser::{detect_separator, is_header_row, parse_rows, parse_text, HEADER_LABELS};

/// Raw roster input; the variant is the source format.
#[derive(Debug, Clone, Copy)]
pub enum RawInput<'a> {
    Text(&'a str),
    Rows(&'a [Vec<String>]),
    Csv(&'a [u8]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Text,
    Rows,
    Csv,
}

impl SourceFormat {
    /// `.csv` files are decoded as CSV; anything else is typed text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SourceFormat::Csv,
            _ => SourceFormat::Text,
        }
    }
}

impl FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "manual" => Ok(SourceFormat::Text),
            "rows" => Ok(SourceFormat::Rows),
            "csv" => Ok(SourceFormat::Csv),
            other => Err(format!("unknown source format: {}", other)),
        }
    }
}

/// Parse any supported input into a roster.
///
/// # Errors
///
/// [`ParseError`] only when CSV decoding fails. No roster is produced then.
pub fn parse(input: RawInput<'_>) -> Result<Roster, ParseError> {
    match input {
        RawInput::Text(text) => Ok(parse_text(text)),
        RawInput::Rows(rows) => Ok(parse_rows(rows)),
        RawInput::Csv(bytes) => {
            let rows = csv_source::decode_bytes(bytes)?;
            Ok(parse_rows(&rows))
        }
    }
}
