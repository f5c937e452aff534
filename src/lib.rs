//! # ref-forge
//!
//! A library for forging per-locus reference sequences from bait-capture
//! sequencing libraries.
//!
//! Bait-capture experiments sequence a panel of target loci across many
//! libraries at once. The reads for each library are mapped back against the
//! target loci, but the targets themselves are often diverged from the
//! organism in hand, so the final reference should come from the library's
//! own assembled contigs instead.
//!
//! `ref-forge` closes that loop: for every library it maps the reads against
//! the targets, carries the mapped reads over to the library's own assembly,
//! and picks the contig each locus's reads land on most often as that locus's
//! final reference sequence.
//!
//! ## Features
//!
//! - **Batch discovery**: Libraries are found by their read-file names; no
//!   manifest needed
//! - **Failure isolation**: One broken library is reported and skipped, the
//!   rest of the batch still runs
//! - **Deterministic selection**: Hit count, then contig length, then
//!   identifier decide each locus's winner
//! - **Per-library reports**: Every locus is accounted for, mapped or not
//! - **Clean scratch handling**: All intermediate files live in temporary
//!   directories that are removed on every exit path
//!
//! ## Example
//!
//! ```rust,no_run
//! use ref_forge::{run_batch, PipelineConfig};
//! use ref_forge::tools::{BlastN, Bowtie2Mapper};
//!
//! let config = PipelineConfig::new("targets.fa", "reads", "assemblies", "out");
//! let mapper = Bowtie2Mapper::new(config.threads);
//! let searcher = BlastN::new(config.threads, &config.evalue);
//!
//! let summary = run_batch(&config, &mapper, &searcher).unwrap();
//! for library in &summary.completed {
//!     println!("{library}: reference and report written");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for libraries, targets, reads, and reports
//! - [`parsing`]: Parsers and writers for the tool output formats
//! - [`selection`]: Hit tallying and the winning-contig rule
//! - [`tools`]: Interfaces to the external mapping and search tools
//! - [`pipeline`]: Per-library orchestration and the batch driver
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod pipeline;
pub mod selection;
pub mod tools;

// Re-export commonly used types for convenience
pub use core::library::Library;
pub use core::records::{AlignmentRecord, HitRecord, LocusReads};
pub use core::report::LibraryReport;
pub use core::targets::TargetSet;
pub use pipeline::{run_batch, BatchSummary, PipelineConfig, PipelineError};
pub use selection::HitTally;
pub use tools::{ContigSearcher, ReadMapper, ToolError};
