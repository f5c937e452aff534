//! Per-library orchestration of the mapping, extraction, search, and
//! synthesis stages.
//!
//! One run processes every discovered library sequentially:
//!
//! 1. map the library's reads against the target collection
//! 2. reconcile the alignment listing with the target locus set
//! 3. extract the mapped reads, re-keyed by locus
//! 4. search them against the library's pre-assembled contigs
//! 5. pick one winning contig per locus and write the final reference and
//!    report
//!
//! A failing library is logged, recorded in the [`BatchSummary`], and does
//! not stop the batch; its output files are not written. All intermediate
//! artifacts live in scratch directories inside the output directory and are
//! removed on every exit path.

pub mod extract;
pub mod runner;
pub mod synthesize;

pub use runner::{
    run_batch, BatchSummary, FailedLibrary, PipelineConfig, PipelineError, DEFAULT_EVALUE,
    DEFAULT_READ_MARKER, DEFAULT_THREADS,
};
