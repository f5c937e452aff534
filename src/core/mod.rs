//! Core data types for per-locus reference synthesis.
//!
//! This module provides the fundamental types used throughout the pipeline:
//!
//! - [`Library`]: One sequencing library's identifier and input files
//! - [`TargetSet`]: The canonical, sorted set of target loci
//! - [`AlignmentRecord`], [`HitRecord`]: Parsed lines from the two external
//!   tool outputs
//! - [`LocusReads`]: The read/locus relation in both directions
//! - [`ContigCollection`]: Assembled contigs competing for final-reference
//!   status
//! - [`LibraryReport`]: The per-locus outcome table
//!
//! The relational invariant everything else leans on: [`TargetSet`] is the
//! superset driving report enumeration — every locus in it gets exactly one
//! report line, whatever the mapping or search outcome was.
//!
//! [`Library`]: library::Library
//! [`TargetSet`]: targets::TargetSet
//! [`AlignmentRecord`]: records::AlignmentRecord
//! [`HitRecord`]: records::HitRecord
//! [`LocusReads`]: records::LocusReads
//! [`ContigCollection`]: contigs::ContigCollection
//! [`LibraryReport`]: report::LibraryReport

pub mod contigs;
pub mod library;
pub mod records;
pub mod report;
pub mod targets;
