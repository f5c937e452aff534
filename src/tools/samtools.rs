//! samtools invocation: format conversion, merge, sort, index, re-export.

use std::path::Path;
use std::process::Command;

use crate::tools::invoke::{run_tool, ToolError};

#[derive(Debug, Clone, Default)]
pub struct Samtools;

impl Samtools {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Index a sequence collection (`faidx`).
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if the invocation fails.
    pub fn faidx(&self, fasta: &Path) -> Result<(), ToolError> {
        let mut command = Command::new("samtools");
        command.arg("faidx").arg(fasta);
        run_tool("samtools faidx", &mut command)
    }

    /// Convert a plain-text listing to the binary columnar format.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if the invocation fails.
    pub fn to_binary(&self, sam: &Path, bam: &Path) -> Result<(), ToolError> {
        let mut command = Command::new("samtools");
        command.args(["view", "-bS", "-o"]).arg(bam).arg(sam);
        run_tool("samtools view", &mut command)
    }

    /// Merge binary alignment files into one.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if the invocation fails.
    pub fn merge(&self, out: &Path, inputs: &[&Path]) -> Result<(), ToolError> {
        let mut command = Command::new("samtools");
        command.arg("merge").arg(out);
        for input in inputs {
            command.arg(input);
        }
        run_tool("samtools merge", &mut command)
    }

    /// Coordinate-sort a binary alignment file, spilling temporary chunks
    /// under `tmp_prefix`.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if the invocation fails.
    pub fn sort(&self, input: &Path, out: &Path, tmp_prefix: &Path) -> Result<(), ToolError> {
        let mut command = Command::new("samtools");
        command
            .arg("sort")
            .arg("-T")
            .arg(tmp_prefix)
            .arg("-o")
            .arg(out)
            .arg(input);
        run_tool("samtools sort", &mut command)
    }

    /// Index a sorted binary alignment file.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if the invocation fails.
    pub fn index(&self, bam: &Path) -> Result<(), ToolError> {
        let mut command = Command::new("samtools");
        command.arg("index").arg(bam);
        run_tool("samtools index", &mut command)
    }

    /// Re-export a binary alignment file as a plain-text listing.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolError`] if the invocation fails.
    pub fn to_text(&self, bam: &Path, out: &Path) -> Result<(), ToolError> {
        let mut command = Command::new("samtools");
        command.args(["view", "-o"]).arg(out).arg(bam);
        run_tool("samtools view", &mut command)
    }
}
