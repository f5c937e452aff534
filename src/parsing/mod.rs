//! Parsers for the text artifacts the pipeline reconciles.
//!
//! Every stage of the pipeline communicates through plain-text files, and this
//! module owns the readers for each of them:
//!
//! - **alignment**: plain-text alignment listings re-exported by the external
//!   toolkit (tab-separated, read identifier in column 1, reference name in
//!   column 3)
//! - **fasta**: FASTA sequence collections — the target loci and the
//!   per-library assemblies
//! - **hits**: tabular similarity-search output with `#` comment lines
//! - **reads**: the line-level state machine that extracts mapped reads from
//!   FASTQ-style read files
//!
//! ## Example
//!
//! ```rust
//! use ref_forge::parsing::alignment::parse_listing_reader;
//!
//! let listing = "r1\t0\tlocusA\t1\t42\t50M\t*\t0\t0\tACGT\tIIII\n";
//! let records = parse_listing_reader(listing.as_bytes()).unwrap();
//! assert_eq!(records[0].locus, "locusA");
//! ```

pub mod alignment;
pub mod fasta;
pub mod hits;
pub mod reads;

pub use alignment::ParseError;
