//! Parser for the tabular similarity-search output.
//!
//! The search tool emits one hit per line, tab-separated, with `#` comment
//! lines interspersed. Column 1 is the query name, which by construction is
//! the locus name from the extracted-read collection, and column 2 is the
//! contig the query hit.

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::records::HitRecord;
use crate::parsing::alignment::ParseError;

/// Parse a search-output file into (locus, contig) hit records.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if a hit line has fewer than 2 fields.
pub fn parse_hits_file(path: &Path) -> Result<Vec<HitRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_hits_reader(BufReader::new(file))
}

/// Parse search output from any buffered reader, skipping comments and blank
/// lines.
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails, or `ParseError::InvalidFormat`
/// if a hit line has fewer than 2 fields.
pub fn parse_hits_reader<R: BufRead>(reader: R) -> Result<Vec<HitRecord>, ParseError> {
    let mut hits = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 2 fields"
            )));
        }

        hits.push(HitRecord::new(fields[0], fields[1]));
    }

    Ok(hits)
}
