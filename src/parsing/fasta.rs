//! FASTA reading and writing using noodles.
//!
//! Two collections come in through here: the target-sequence collection (the
//! locus universe) and the per-library assembly. Extracted reads and the
//! final references go out through [`FastaWriter`].

use std::collections::HashSet;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use noodles::fasta;

use crate::core::contigs::ContigCollection;
use crate::core::targets::TargetSet;
use crate::parsing::alignment::ParseError;

/// Read a target-sequence collection into the canonical locus set.
///
/// Sequence lines following a header are concatenated.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if a record fails to parse, or `ParseError::InvalidFormat` if the file
/// holds no sequences.
pub fn read_target_set(path: &Path) -> Result<TargetSet, ParseError> {
    let mut reader = open_fasta(path)?;
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = String::from_utf8_lossy(record.sequence().as_ref()).to_string();
        records.push((name, sequence));
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(TargetSet::new(records))
}

/// Read only the named contigs from an assembly collection.
///
/// Contigs outside `keep` are dropped while streaming, so a large assembly
/// costs memory only for the contigs the search stage actually hit.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if a record fails to parse, or `ParseError::InvalidFormat` if a requested
/// contig is absent from the assembly.
pub fn read_contig_collection(
    path: &Path,
    keep: &HashSet<String>,
) -> Result<ContigCollection, ParseError> {
    let mut reader = open_fasta(path)?;
    let mut sequences = std::collections::HashMap::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        if !keep.contains(&name) {
            continue;
        }

        let sequence = String::from_utf8_lossy(record.sequence().as_ref()).to_string();
        sequences.insert(name, sequence);
    }

    for id in keep {
        if !sequences.contains_key(id) {
            return Err(ParseError::InvalidFormat(format!(
                "Contig '{id}' from search output not present in assembly"
            )));
        }
    }

    Ok(ContigCollection::new(sequences))
}

fn open_fasta(path: &Path) -> Result<fasta::io::Reader<BufReader<std::fs::File>>, ParseError> {
    let file = std::fs::File::open(path)?;
    Ok(fasta::io::Reader::new(BufReader::new(file)))
}

/// Writer for locus-keyed sequence records.
pub struct FastaWriter<W: Write> {
    inner: fasta::io::Writer<W>,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: fasta::io::Writer::new(writer),
        }
    }

    /// Write one record.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the underlying writer fails.
    pub fn write_record(&mut self, name: &str, sequence: &str) -> Result<(), ParseError> {
        let definition = fasta::record::Definition::new(name, None);
        let sequence = fasta::record::Sequence::from(sequence.as_bytes().to_vec());
        self.inner
            .write_record(&fasta::Record::new(definition, sequence))?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if flushing fails.
    pub fn finish(self) -> Result<W, ParseError> {
        let mut writer = self.inner.into_inner();
        writer.flush()?;
        Ok(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_target_set() {
        let fasta_content = b">locusB description\nACGTACGT\nACGT\n>locusA\nGGGG\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let targets = read_target_set(temp.path()).unwrap();
        assert_eq!(targets.loci(), ["locusA", "locusB"]);
        // Multi-line sequences are concatenated.
        assert_eq!(targets.sequence_of("locusB"), Some("ACGTACGTACGT"));
    }

    #[test]
    fn test_read_empty_target_set() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        let result = read_target_set(temp.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_contig_collection_is_restricted() {
        let fasta_content = b">c1\nACGTACGT\n>c2\nTTTT\n>c3\nGGGG\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let keep: HashSet<String> = ["c1".to_string(), "c3".to_string()].into();
        let contigs = read_contig_collection(temp.path(), &keep).unwrap();
        assert_eq!(contigs.len(), 2);
        assert_eq!(contigs.sequence_of("c1"), Some("ACGTACGT"));
        assert_eq!(contigs.sequence_of("c2"), None);
    }

    #[test]
    fn test_missing_hit_contig_is_an_error() {
        let fasta_content = b">c1\nACGT\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let keep: HashSet<String> = ["c9".to_string()].into();
        let result = read_contig_collection(temp.path(), &keep);
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("c9")));
    }

    #[test]
    fn test_fasta_writer_round_trip() {
        let mut writer = FastaWriter::new(Vec::new());
        writer.write_record("locus1", "ACGTACGT").unwrap();
        let out = writer.finish().unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, ">locus1\nACGTACGT\n");
    }
}
