//! Batch driver: discovers libraries and runs each one through the full
//! mapping / extraction / search / synthesis sequence.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::Builder;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::core::library::{discover_libraries, Library};
use crate::core::records::LocusReads;
use crate::core::targets::TargetSet;
use crate::parsing::alignment::parse_listing_file;
use crate::parsing::fasta::{read_target_set, FastaWriter};
use crate::parsing::hits::parse_hits_file;
use crate::parsing::ParseError;
use crate::pipeline::{extract, synthesize};
use crate::tools::{ContigSearcher, ReadMapper, ToolError};

/// Default prefix that identifies sequence header lines in read files.
pub const DEFAULT_READ_MARKER: &str = "@HWI";

/// Default e-value cutoff passed to the contig search.
pub const DEFAULT_EVALUE: &str = "1e-10";

/// Default worker thread count for the external tools.
pub const DEFAULT_THREADS: u32 = 4;

/// Errors raised while processing a batch or a single library.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A required per-library input file does not exist.
    #[error("missing input file: {}", .0.display())]
    MissingInput(PathBuf),

    /// A winning contig disappeared between tallying and synthesis.
    #[error("contig '{0}' not found in the assembly collection")]
    MissingContig(String),

    /// A tool output file could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An external tool failed to launch or exited non-zero.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings for one batch run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// FASTA file with one record per target locus.
    pub targets: PathBuf,
    /// Directory scanned for gzip-compressed read files.
    pub reads_dir: PathBuf,
    /// Directory holding one pre-assembled contig FASTA per library.
    pub assembly_dir: PathBuf,
    /// Directory that receives the final references and reports.
    pub output_dir: PathBuf,
    /// Prefix that identifies sequence header lines in read files.
    pub read_marker: String,
    /// E-value cutoff for the contig search.
    pub evalue: String,
    /// Worker thread count for the external tools.
    pub threads: u32,
}

impl PipelineConfig {
    /// Creates a configuration with default marker, e-value, and thread
    /// count.
    pub fn new(
        targets: impl Into<PathBuf>,
        reads_dir: impl Into<PathBuf>,
        assembly_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            targets: targets.into(),
            reads_dir: reads_dir.into(),
            assembly_dir: assembly_dir.into(),
            output_dir: output_dir.into(),
            read_marker: DEFAULT_READ_MARKER.to_string(),
            evalue: DEFAULT_EVALUE.to_string(),
            threads: DEFAULT_THREADS,
        }
    }
}

/// A library that failed, with the error that stopped it.
#[derive(Debug, Clone, Serialize)]
pub struct FailedLibrary {
    /// Library identifier.
    pub library: String,
    /// Rendered error message.
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    /// Libraries whose outputs were written.
    pub completed: Vec<String>,
    /// Libraries that failed, in discovery order.
    pub failed: Vec<FailedLibrary>,
}

impl BatchSummary {
    /// Returns true when no library failed.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of libraries processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.completed.len() + self.failed.len()
    }
}

/// Runs every library discovered under the configured reads directory.
///
/// Returns an error only for run-level problems (unreadable target FASTA,
/// unwritable output directory); per-library failures are recorded in the
/// summary and do not stop the batch.
pub fn run_batch<M: ReadMapper, S: ContigSearcher>(
    config: &PipelineConfig,
    mapper: &M,
    searcher: &S,
) -> Result<BatchSummary, PipelineError> {
    let ids = discover_libraries(&config.reads_dir)?;
    if ids.is_empty() {
        debug!(
            dir = %config.reads_dir.display(),
            "no read libraries found, nothing to do"
        );
        return Ok(BatchSummary::default());
    }
    info!(libraries = ids.len(), "discovered read libraries");

    let targets = read_target_set(&config.targets)?;
    debug!(loci = targets.len(), "target collection loaded");

    std::fs::create_dir_all(&config.output_dir)?;
    let scratch = Builder::new()
        .prefix(".ref-forge-")
        .tempdir_in(&config.output_dir)?;
    let target_copy = scratch.path().join("targets.fa");
    write_target_copy(&targets, &target_copy)?;

    let mut summary = BatchSummary::default();
    for id in ids {
        let library = Library::new(id.as_str(), &config.reads_dir, &config.assembly_dir);
        info!(library = %id, "processing library");
        match process_library(
            config,
            &targets,
            &target_copy,
            &library,
            scratch.path(),
            mapper,
            searcher,
        ) {
            Ok(()) => summary.completed.push(id),
            Err(error) => {
                error!(library = %id, %error, "library failed");
                summary.failed.push(FailedLibrary {
                    library: id,
                    error: error.to_string(),
                });
            }
        }
    }

    Ok(summary)
}

/// Runs the full stage sequence for one library.
fn process_library<M: ReadMapper, S: ContigSearcher>(
    config: &PipelineConfig,
    targets: &TargetSet,
    target_copy: &Path,
    library: &Library,
    run_scratch: &Path,
    mapper: &M,
    searcher: &S,
) -> Result<(), PipelineError> {
    if let Some(path) = library.missing_inputs().into_iter().next() {
        return Err(PipelineError::MissingInput(path));
    }

    let scratch = Builder::new()
        .prefix(&format!("{}-", library.id))
        .tempdir_in(run_scratch)?;

    let listing = mapper.map_library(target_copy, library, scratch.path())?;
    debug!(library = %library.id, listing = %listing.display(), "alignment listing ready");

    let records = parse_listing_file(&listing)?;
    let reads = LocusReads::from_records(&records, targets);
    debug!(
        library = %library.id,
        alignments = records.len(),
        mapped_reads = reads.read_count(),
        mapped_loci = reads.mapped_locus_count(),
        "alignment listing reconciled against targets"
    );

    let hits = if reads.is_empty() {
        warn!(library = %library.id, "no reads mapped to any target locus");
        Vec::new()
    } else {
        let query = scratch.path().join("mapped_reads.fa");
        let extracted = extract::write_mapped_reads(library, &reads, &config.read_marker, &query)?;
        debug!(library = %library.id, reads = extracted, "mapped reads extracted");

        let hits_path = searcher.search(&library.assembly, &query, scratch.path())?;
        parse_hits_file(&hits_path)?
    };

    synthesize::write_outputs(&config.output_dir, library, targets, &reads, &hits)
}

/// Writes the target collection into the run scratch directory so the
/// mapping stage can build its index without touching the input file's
/// directory.
fn write_target_copy(targets: &TargetSet, path: &Path) -> Result<(), PipelineError> {
    let file = File::create(path)?;
    let mut writer = FastaWriter::new(BufWriter::new(file));
    for locus in targets.loci() {
        if let Some(sequence) = targets.sequence_of(locus) {
            writer.write_record(locus, sequence)?;
        }
    }
    writer.finish()?;
    Ok(())
}
