//! The target locus set: the universe of loci the run reconciles against.

use std::collections::HashMap;

/// The parsed target-sequence collection.
///
/// Locus names are unique (a duplicated FASTA header keeps the last-parsed
/// sequence but contributes one name); the name list is sorted and is the
/// canonical ordering for the final report and reference files.
#[derive(Debug, Clone)]
pub struct TargetSet {
    names: Vec<String>,
    sequences: HashMap<String, String>,
}

impl TargetSet {
    #[must_use]
    pub fn new(records: Vec<(String, String)>) -> Self {
        let sequences: HashMap<String, String> = records.into_iter().collect();
        let mut names: Vec<String> = sequences.keys().cloned().collect();
        names.sort_unstable();

        Self { names, sequences }
    }

    /// All locus names in canonical (sorted) order.
    #[must_use]
    pub fn loci(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sequences.contains_key(name)
    }

    #[must_use]
    pub fn sequence_of(&self, name: &str) -> Option<&str> {
        self.sequences.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
