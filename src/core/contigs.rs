//! The assembled contigs that compete to become a locus's final reference.

use std::collections::HashMap;

/// Contig identifier → full sequence, restricted to contigs that actually
/// appear in search hits (contigs never hit are not retained).
#[derive(Debug, Default)]
pub struct ContigCollection {
    sequences: HashMap<String, String>,
}

impl ContigCollection {
    #[must_use]
    pub fn new(sequences: HashMap<String, String>) -> Self {
        Self { sequences }
    }

    #[must_use]
    pub fn length_of(&self, id: &str) -> Option<usize> {
        self.sequences.get(id).map(String::len)
    }

    #[must_use]
    pub fn sequence_of(&self, id: &str) -> Option<&str> {
        self.sequences.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
