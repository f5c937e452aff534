//! Mapped-read extraction: streams each compressed read file through the
//! line scanner and writes locus-keyed FASTA records for the search stage.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::core::library::Library;
use crate::core::records::LocusReads;
use crate::parsing::fasta::FastaWriter;
use crate::parsing::reads::ReadExtractor;
use crate::pipeline::runner::PipelineError;

/// Extracts every mapped read from the library's three read files and
/// writes them to `out` as FASTA records headed by the locus each read
/// mapped to. Returns the number of records written.
///
/// The read files are decompressed on the fly; nothing is written back to
/// the reads directory.
pub fn write_mapped_reads(
    library: &Library,
    reads: &LocusReads,
    marker: &str,
    out: &Path,
) -> Result<usize, PipelineError> {
    let file = File::create(out)?;
    let mut writer = FastaWriter::new(BufWriter::new(file));
    let mut extractor = ReadExtractor::new(marker, reads);
    let mut written = 0;

    for path in [&library.paired_1, &library.paired_2, &library.unpaired] {
        written += scan_read_file(path, &mut extractor, &mut writer)?;
    }

    writer.finish()?;
    Ok(written)
}

/// Feeds one compressed read file through the extractor, writing each
/// emitted read as it completes.
fn scan_read_file<W: Write>(
    path: &Path,
    extractor: &mut ReadExtractor<'_>,
    writer: &mut FastaWriter<W>,
) -> Result<usize, PipelineError> {
    let file = File::open(path)?;
    let reader = BufReader::new(GzDecoder::new(file));
    let mut written = 0;

    for line in reader.lines() {
        let line = line?;
        if let Some(read) = extractor.feed(&line) {
            writer.write_record(&read.locus, &read.sequence)?;
            written += 1;
        }
    }
    if let Some(read) = extractor.finish() {
        writer.write_record(&read.locus, &read.sequence)?;
        written += 1;
    }

    Ok(written)
}
