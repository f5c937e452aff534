//! Sequencing libraries and how they are discovered on disk.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Marker substring identifying cleaned read files in the reads directory.
pub const READ_FILE_MARKER: &str = "_final.txt";

/// One sequencing library: its identifier plus the fixed-name input files
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    pub id: String,
    /// Paired-end reads, mate 1 (`<id>_1_final.txt.gz`).
    pub paired_1: PathBuf,
    /// Paired-end reads, mate 2 (`<id>_2_final.txt.gz`).
    pub paired_2: PathBuf,
    /// Unpaired reads (`<id>_u_final.txt.gz`).
    pub unpaired: PathBuf,
    /// Pre-assembled contigs (`<id>.fa.final`).
    pub assembly: PathBuf,
}

impl Library {
    #[must_use]
    pub fn new(id: impl Into<String>, reads_dir: &Path, assembly_dir: &Path) -> Self {
        let id = id.into();
        Self {
            paired_1: reads_dir.join(format!("{id}_1{READ_FILE_MARKER}.gz")),
            paired_2: reads_dir.join(format!("{id}_2{READ_FILE_MARKER}.gz")),
            unpaired: reads_dir.join(format!("{id}_u{READ_FILE_MARKER}.gz")),
            assembly: assembly_dir.join(format!("{id}.fa.final")),
            id,
        }
    }

    /// The input files this library needs but which do not exist.
    #[must_use]
    pub fn missing_inputs(&self) -> Vec<PathBuf> {
        [&self.paired_1, &self.paired_2, &self.unpaired, &self.assembly]
            .into_iter()
            .filter(|path| !path.exists())
            .cloned()
            .collect()
    }
}

/// Scan a reads directory for library identifiers.
///
/// Every entry whose name contains [`READ_FILE_MARKER`] contributes the
/// prefix before its first `_` as an identifier; the result is deduplicated
/// and sorted. A missing directory yields an empty list (the run then ends
/// silently); other IO failures propagate.
///
/// # Errors
///
/// Returns an `io::Error` if the directory exists but cannot be read.
pub fn discover_libraries(reads_dir: &Path) -> io::Result<Vec<String>> {
    let entries = match std::fs::read_dir(reads_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(dir = %reads_dir.display(), "reads directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let mut ids = BTreeSet::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.contains(READ_FILE_MARKER) {
            continue;
        }

        match name.split('_').next() {
            Some(prefix) if !prefix.is_empty() => {
                ids.insert(prefix.to_string());
            }
            _ => debug!(file = %name, "read file has no usable library prefix"),
        }
    }

    Ok(ids.into_iter().collect())
}
