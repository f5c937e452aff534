//! Invokers for the external alignment and search tools.
//!
//! The pipeline delegates all real sequence work to three tools found on
//! `PATH`:
//!
//! - [`Bowtie2`]: short-read index build and paired/unpaired local mapping
//! - [`Samtools`]: alignment-format conversion, merge, coordinate sort,
//!   indexing, and plain-text re-export
//! - [`BlastN`]: nucleotide database build and tabular similarity search
//!
//! Every invocation goes through one runner that captures stderr and turns a
//! non-zero exit into a [`ToolError`], so a failing tool aborts the library
//! cleanly instead of leaving half-written artifacts behind for the next
//! stage to trip over.
//!
//! Orchestration code talks to the tools through the [`ReadMapper`] and
//! [`ContigSearcher`] interfaces, which keeps it runnable against fake
//! implementations in tests.

pub mod blast;
pub mod bowtie2;
pub mod invoke;
pub mod samtools;

pub use blast::BlastN;
pub use bowtie2::{Bowtie2, Bowtie2Mapper};
pub use invoke::{ContigSearcher, ReadMapper, ToolError};
pub use samtools::Samtools;
