//! Parser for the plain-text alignment listing produced by the external
//! toolkit's re-export step.
//!
//! The listing is headerless tab-separated text, one aligned read per line.
//! Only two columns matter here: column 1 (read identifier) and column 3
//! (reference name, `*` for unmapped records).

use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::core::records::AlignmentRecord;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Parse an alignment listing file into (read, reference) records.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if a record line has fewer than 3 fields.
pub fn parse_listing_file(path: &Path) -> Result<Vec<AlignmentRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_listing_reader(BufReader::new(file))
}

/// Parse an alignment listing from any buffered reader.
///
/// Header lines (starting with `@`) and unmapped records (reference name `*`)
/// are skipped.
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails, or `ParseError::InvalidFormat`
/// if a record line has fewer than 3 fields.
pub fn parse_listing_reader<R: BufRead>(reader: R) -> Result<Vec<AlignmentRecord>, ParseError> {
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() || line.starts_with('@') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 3 fields"
            )));
        }

        let reference = fields[2];
        if reference == "*" {
            continue;
        }

        records.push(AlignmentRecord::new(fields[0], reference));
    }

    Ok(records)
}
