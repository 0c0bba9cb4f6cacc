//! Row normalization shared by every input shape.
//!
//! Text and decoded CSV both end up as rows of string fields; from there the
//! same rules apply: drop empty rows, strip a header on the first row only,
//! then map the first three fields onto a [`PlayerRecord`].

use crate::models::{PlayerRecord, Roster};
use tracing::debug;

/// Column labels that mark the first row as a header (compared lowercased).
pub const HEADER_LABELS: [&str; 3] = ["full name", "preferred position", "skill level"];

/// Trim whitespace, including a stray byte-order mark.
pub(crate) fn clean(field: &str) -> &str {
    field.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Tab if the input contains any tab, otherwise comma.
pub fn detect_separator(text: &str) -> char {
    if text.contains('\t') {
        '\t'
    } else {
        ','
    }
}

/// True if any field of `row` is exactly one of the known column labels.
pub fn is_header_row<S: AsRef<str>>(row: &[S]) -> bool {
    row.iter().any(|field| {
        let label = clean(field.as_ref()).to_lowercase();
        HEADER_LABELS.contains(&label.as_str())
    })
}

/// A row with no fields, or one blank field. Rows like `,,` still carry
/// three (empty) fields and are kept, same as in typed text.
fn is_empty_row(row: &[&str]) -> bool {
    match row {
        [] => true,
        [only] => clean(only).is_empty(),
        _ => false,
    }
}

/// Map one row onto a record. Short rows leave the missing fields empty and
/// anything past the third field is ignored.
fn to_record(row: &[&str]) -> PlayerRecord {
    let field = |idx: usize| row.get(idx).map(|f| clean(f)).unwrap_or("").to_string();
    PlayerRecord {
        full_name: field(0),
        preferred_position: field(1),
        skill_level: field(2),
    }
}

fn build_roster(rows: Vec<Vec<&str>>) -> Roster {
    let has_header = rows.first().is_some_and(|row| is_header_row(row));
    let start = usize::from(has_header);

    let roster: Roster = rows[start..].iter().map(|row| to_record(row)).collect();
    debug!(
        header_stripped = has_header,
        players = roster.len(),
        "parsed roster"
    );
    roster
}

/// Parse manually typed text, one player per non-blank line.
pub fn parse_text(text: &str) -> Roster {
    let separator = detect_separator(text);
    debug!(separator = ?separator, "parsing manual input");

    let rows: Vec<Vec<&str>> = text
        .split('\n')
        .filter(|line| !clean(line).is_empty())
        .map(|line| line.split(separator).collect())
        .collect();

    build_roster(rows)
}

/// Parse rows that were already split into fields by a decoder.
pub fn parse_rows<R, S>(rows: &[R]) -> Roster
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let rows: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| row.as_ref().iter().map(|f| f.as_ref()).collect::<Vec<&str>>())
        .filter(|row| !is_empty_row(row))
        .collect();

    build_roster(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_separator() {
        assert_eq!(detect_separator("a,b,c"), ',');
        assert_eq!(detect_separator("a\tb\tc"), '\t');
        // a single tab anywhere switches the whole input
        assert_eq!(detect_separator("a,b,c\nd\te"), '\t');
    }

    #[test]
    fn test_header_row_exact_match_only() {
        assert!(is_header_row(&["Full Name", "x", "y"]));
        assert!(is_header_row(&["x", "  SKILL LEVEL  "]));
        assert!(!is_header_row(&["Full Names", "Position", "Skill"]));
        assert!(!is_header_row::<&str>(&[]));
    }

    #[test]
    fn test_empty_row_needs_at_most_one_field() {
        assert!(is_empty_row(&[]));
        assert!(is_empty_row(&["  "]));
        assert!(!is_empty_row(&["", ""]));
        assert!(!is_empty_row(&["", " ", ""]));
    }

    #[test]
    fn test_clean_strips_bom() {
        assert_eq!(clean("\u{feff}Full Name "), "Full Name");
    }
}
