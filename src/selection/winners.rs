//! Per-locus hit counting and the tie-break rule.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::core::contigs::ContigCollection;
use crate::core::records::HitRecord;

/// Hit counts grouped by locus: how many of each locus's reads hit each
/// contig.
#[derive(Debug, Default)]
pub struct HitTally {
    counts: HashMap<String, HashMap<String, u32>>,
}

impl HitTally {
    #[must_use]
    pub fn from_hits(hits: &[HitRecord]) -> Self {
        let mut counts: HashMap<String, HashMap<String, u32>> = HashMap::new();
        for hit in hits {
            *counts
                .entry(hit.locus.clone())
                .or_default()
                .entry(hit.contig.clone())
                .or_default() += 1;
        }

        Self { counts }
    }

    /// Every contig identifier that received at least one hit; this is the
    /// restriction set for loading the assembly.
    #[must_use]
    pub fn contig_ids(&self) -> HashSet<String> {
        self.counts
            .values()
            .flat_map(|per_contig| per_contig.keys().cloned())
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Pick one winning contig per locus.
    ///
    /// Highest hit count wins; ties go to the longest contig; ties on count
    /// and length go to the lexicographically smallest identifier. Loci
    /// absent from the tally never appear in the result.
    #[must_use]
    pub fn select_winners(&self, contigs: &ContigCollection) -> BTreeMap<String, String> {
        let mut winners = BTreeMap::new();
        for (locus, per_contig) in &self.counts {
            if let Some(winner) = select_for_locus(per_contig, contigs) {
                winners.insert(locus.clone(), winner);
            }
        }

        winners
    }
}

fn select_for_locus(
    per_contig: &HashMap<String, u32>,
    contigs: &ContigCollection,
) -> Option<String> {
    let top_count = per_contig.values().copied().max()?;

    let mut tied: Vec<&str> = per_contig
        .iter()
        .filter(|(_, count)| **count == top_count)
        .map(|(id, _)| id.as_str())
        .collect();

    // Longest first, then smallest identifier.
    tied.sort_unstable_by(|a, b| {
        contigs
            .length_of(b)
            .unwrap_or(0)
            .cmp(&contigs.length_of(a).unwrap_or(0))
            .then_with(|| a.cmp(b))
    });

    tied.first().map(|id| (*id).to_string())
}
