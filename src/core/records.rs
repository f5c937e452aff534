//! The bookkeeping records that tie reads, loci, and contigs together.

use std::collections::HashMap;

use tracing::debug;

use crate::core::targets::TargetSet;

/// One aligned read from the alignment listing: which read hit which
/// reference name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    pub read_id: String,
    pub locus: String,
}

impl AlignmentRecord {
    pub fn new(read_id: impl Into<String>, locus: impl Into<String>) -> Self {
        Self {
            read_id: read_id.into(),
            locus: locus.into(),
        }
    }
}

/// One similarity-search hit: which locus's reads hit which contig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRecord {
    pub locus: String,
    pub contig: String,
}

impl HitRecord {
    pub fn new(locus: impl Into<String>, contig: impl Into<String>) -> Self {
        Self {
            locus: locus.into(),
            contig: contig.into(),
        }
    }
}

/// Both views of the read/locus relation, built in one pass over the
/// alignment listing.
///
/// Key rules: each locus owns the list of its reads in listing order; each
/// read maps to exactly one locus, and a read aligned to several known loci
/// keeps the last one in listing order (the listing is coordinate-sorted, so
/// this is deterministic per input). Reference names outside the target set
/// are dropped entirely.
#[derive(Debug, Default)]
pub struct LocusReads {
    by_locus: HashMap<String, Vec<String>>,
    by_read: HashMap<String, String>,
}

impl LocusReads {
    #[must_use]
    pub fn from_records(records: &[AlignmentRecord], targets: &TargetSet) -> Self {
        let mut by_locus: HashMap<String, Vec<String>> = HashMap::new();
        let mut by_read: HashMap<String, String> = HashMap::new();
        let mut dropped = 0usize;

        for record in records {
            if !targets.contains(&record.locus) {
                dropped += 1;
                continue;
            }

            by_locus
                .entry(record.locus.clone())
                .or_default()
                .push(record.read_id.clone());
            by_read.insert(record.read_id.clone(), record.locus.clone());
        }

        if dropped > 0 {
            debug!(dropped, "dropped records with reference names outside the target set");
        }

        Self { by_locus, by_read }
    }

    /// Whether any read aligned to this locus.
    #[must_use]
    pub fn is_mapped(&self, locus: &str) -> bool {
        self.by_locus.contains_key(locus)
    }

    /// The locus owning this read, if the read mapped at all.
    #[must_use]
    pub fn locus_of(&self, read_id: &str) -> Option<&str> {
        self.by_read.get(read_id).map(String::as_str)
    }

    /// Number of distinct loci that received at least one read.
    #[must_use]
    pub fn mapped_locus_count(&self) -> usize {
        self.by_locus.len()
    }

    /// Number of distinct reads with a known locus.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.by_read.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_read.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> TargetSet {
        TargetSet::new(vec![
            ("locusA".to_string(), "ACGT".to_string()),
            ("locusB".to_string(), "TTTT".to_string()),
        ])
    }

    #[test]
    fn test_unknown_references_are_dropped() {
        let records = vec![
            AlignmentRecord::new("r1", "locusA"),
            AlignmentRecord::new("r2", "decoy_7"),
        ];

        let reads = LocusReads::from_records(&records, &targets());
        assert_eq!(reads.read_count(), 1);
        assert!(reads.is_mapped("locusA"));
        assert!(!reads.is_mapped("decoy_7"));
        assert_eq!(reads.locus_of("r2"), None);
    }

    #[test]
    fn test_multi_mapped_read_keeps_last_locus() {
        let records = vec![
            AlignmentRecord::new("r1", "locusA"),
            AlignmentRecord::new("r1", "locusB"),
        ];

        let reads = LocusReads::from_records(&records, &targets());
        assert_eq!(reads.locus_of("r1"), Some("locusB"));
        // The per-locus view still remembers the earlier placement.
        assert!(reads.is_mapped("locusA"));
        assert!(reads.is_mapped("locusB"));
        assert_eq!(reads.read_count(), 1);
    }

    #[test]
    fn test_empty_records() {
        let reads = LocusReads::from_records(&[], &targets());
        assert!(reads.is_empty());
        assert_eq!(reads.mapped_locus_count(), 0);
    }
}
