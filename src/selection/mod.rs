//! Winning-contig selection.
//!
//! The search stage answers "which contigs did this locus's reads hit"; this
//! module turns those hits into one final reference per locus:
//!
//! 1. **Popularity**: the contig hit by the most of the locus's reads wins
//! 2. **Length**: among equally popular contigs, the longest wins
//! 3. **Name**: among contigs tied on both, the lexicographically smallest
//!    identifier wins, so reruns always pick the same contig
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use ref_forge::core::contigs::ContigCollection;
//! use ref_forge::core::records::HitRecord;
//! use ref_forge::selection::HitTally;
//!
//! let hits = vec![
//!     HitRecord::new("locus1", "c1"),
//!     HitRecord::new("locus1", "c1"),
//!     HitRecord::new("locus1", "c2"),
//! ];
//!
//! let mut sequences = HashMap::new();
//! sequences.insert("c1".to_string(), "ACGTACGT".to_string());
//! sequences.insert("c2".to_string(), "ACGT".to_string());
//! let contigs = ContigCollection::new(sequences);
//!
//! let tally = HitTally::from_hits(&hits);
//! let winners = tally.select_winners(&contigs);
//! assert_eq!(winners["locus1"], "c1");
//! ```

pub mod winners;

pub use winners::HitTally;
