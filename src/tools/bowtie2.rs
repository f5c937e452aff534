//! bowtie2 invocation and the production read mapper built on it.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::core::library::Library;
use crate::tools::invoke::{run_tool, ReadMapper, ToolError};
use crate::tools::samtools::Samtools;

/// Fixed sensitivity parameters for capture mapping: soft-trim 5 bases at
/// each end, high-sensitivity local mode, report up to 10 placements.
const SENSITIVITY_ARGS: [&str; 7] = ["-5", "5", "-3", "5", "--very-sensitive-local", "-k", "10"];

/// Max fragment length accepted in paired-end mode.
const MAX_FRAGMENT_LEN: &str = "300";

#[derive(Debug, Clone)]
pub struct Bowtie2 {
    threads: u32,
}

impl Bowtie2 {
    #[must_use]
    pub fn new(threads: u32) -> Self {
        Self { threads }
    }

    /// Whether an index built with this prefix already exists.
    #[must_use]
    pub fn index_exists(prefix: &Path) -> bool {
        first_index_shard(prefix).exists()
    }

    /// Build an index over a sequence collection, quietly. The collection
    /// path doubles as the index prefix.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if `bowtie2-build` cannot be launched or
    /// exits non-zero.
    pub fn build_index(&self, fasta: &Path) -> Result<(), ToolError> {
        let mut command = Command::new("bowtie2-build");
        command.arg("-q").arg(fasta).arg(fasta);
        run_tool("bowtie2-build", &mut command)
    }

    /// Map paired reads against an index.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if `bowtie2` cannot be launched or exits
    /// non-zero.
    pub fn map_paired(
        &self,
        index: &Path,
        mate_1: &Path,
        mate_2: &Path,
        out: &Path,
    ) -> Result<(), ToolError> {
        let mut command = Command::new("bowtie2");
        command
            .args(SENSITIVITY_ARGS)
            .args(["-p", &self.threads.to_string()])
            .args(["-X", MAX_FRAGMENT_LEN])
            .arg("-x")
            .arg(index)
            .arg("-1")
            .arg(mate_1)
            .arg("-2")
            .arg(mate_2)
            .arg("-S")
            .arg(out);
        run_tool("bowtie2", &mut command)
    }

    /// Map unpaired reads against an index.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if `bowtie2` cannot be launched or exits
    /// non-zero.
    pub fn map_single(&self, index: &Path, reads: &Path, out: &Path) -> Result<(), ToolError> {
        let mut command = Command::new("bowtie2");
        command
            .args(SENSITIVITY_ARGS)
            .args(["-p", &self.threads.to_string()])
            .arg("-x")
            .arg(index)
            .arg("-U")
            .arg(reads)
            .arg("-S")
            .arg(out);
        run_tool("bowtie2", &mut command)
    }
}

/// The production [`ReadMapper`]: bowtie2 for alignment, samtools to merge,
/// coordinate-sort, and re-export the result as a plain-text listing.
#[derive(Debug, Clone)]
pub struct Bowtie2Mapper {
    aligner: Bowtie2,
    toolkit: Samtools,
}

impl Bowtie2Mapper {
    #[must_use]
    pub fn new(threads: u32) -> Self {
        Self {
            aligner: Bowtie2::new(threads),
            toolkit: Samtools::new(),
        }
    }
}

impl ReadMapper for Bowtie2Mapper {
    fn map_library(
        &self,
        targets: &Path,
        library: &Library,
        scratch: &Path,
    ) -> Result<PathBuf, ToolError> {
        if Bowtie2::index_exists(targets) {
            debug!(index = %targets.display(), "target index present, skipping rebuild");
        } else {
            self.aligner.build_index(targets)?;
            self.toolkit.faidx(targets)?;
        }

        let paired_sam = scratch.join("paired.sam");
        let single_sam = scratch.join("single.sam");
        self.aligner
            .map_paired(targets, &library.paired_1, &library.paired_2, &paired_sam)?;
        self.aligner
            .map_single(targets, &library.unpaired, &single_sam)?;

        let paired_bam = scratch.join("paired.bam");
        let single_bam = scratch.join("single.bam");
        self.toolkit.to_binary(&paired_sam, &paired_bam)?;
        self.toolkit.to_binary(&single_sam, &single_bam)?;

        let merged = scratch.join("merged.bam");
        self.toolkit.merge(&merged, &[&paired_bam, &single_bam])?;

        let sorted = scratch.join("sorted.bam");
        self.toolkit.sort(&merged, &sorted, &scratch.join("sort_tmp"))?;
        self.toolkit.index(&sorted)?;

        let listing = scratch.join("alignments.sam");
        self.toolkit.to_text(&sorted, &listing)?;

        Ok(listing)
    }
}

fn first_index_shard(prefix: &Path) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(".1.bt2");
    PathBuf::from(name)
}
