//! BLAST+ invocation: nucleotide database build and tabular search.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::tools::invoke::{run_tool, ContigSearcher, ToolError};

/// Cap on reported targets per query.
const MAX_TARGET_SEQS: &str = "10";

#[derive(Debug, Clone)]
pub struct BlastN {
    threads: u32,
    evalue: String,
}

impl BlastN {
    /// The e-value is kept as the operator typed it and handed through
    /// verbatim.
    #[must_use]
    pub fn new(threads: u32, evalue: impl Into<String>) -> Self {
        Self {
            threads,
            evalue: evalue.into(),
        }
    }

    /// Build a nucleotide database from an assembly, writing the database
    /// files under the `db` prefix.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if the invocation fails.
    pub fn make_db(&self, assembly: &Path, db: &Path) -> Result<(), ToolError> {
        let mut command = Command::new("makeblastdb");
        command
            .arg("-in")
            .arg(assembly)
            .args(["-dbtype", "nucl"])
            .arg("-out")
            .arg(db);
        run_tool("makeblastdb", &mut command)
    }

    /// Search a query collection against a database; tabular output with
    /// comment lines.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if the invocation fails.
    pub fn run_search(&self, db: &Path, query: &Path, out: &Path) -> Result<(), ToolError> {
        let mut command = Command::new("blastn");
        command
            .arg("-db")
            .arg(db)
            .arg("-query")
            .arg(query)
            .args(["-num_threads", &self.threads.to_string()])
            .args(["-evalue", &self.evalue])
            .args(["-outfmt", "7"])
            .args(["-max_target_seqs", MAX_TARGET_SEQS])
            .arg("-out")
            .arg(out);
        run_tool("blastn", &mut command)
    }
}

impl ContigSearcher for BlastN {
    fn search(&self, assembly: &Path, query: &Path, scratch: &Path) -> Result<PathBuf, ToolError> {
        // Database artifacts live and die with the scratch directory.
        let db = scratch.join("contigs_db");
        self.make_db(assembly, &db)?;

        let hits = scratch.join("search_hits.tsv");
        self.run_search(&db, query, &hits)?;
        Ok(hits)
    }
}
