//! CSV decoding via the `csv` crate.
//!
//! Headers are not consumed by the reader; header detection belongs to the
//! roster parser. Flexible mode keeps short rows instead of failing them.

use crate::error::ParseError;
use std::io::Read;

/// Decode CSV from any reader into rows of text fields.
///
/// # Errors
///
/// Returns [`ParseError::Decode`] when the reader reports a failure, e.g.
/// invalid UTF-8 or an I/O error.
pub fn decode_reader<R: Read>(input: R) -> Result<Vec<Vec<String>>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<Vec<String>>, ParseError> {
    decode_reader(bytes)
}
