//! Shared subprocess plumbing and the tool-facing interfaces.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

use crate::core::library::Library;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run a prepared command to completion.
///
/// Stdout and stderr are captured; stderr is surfaced at debug level on
/// success and attached to the error on failure.
pub(crate) fn run_tool(tool: &str, command: &mut Command) -> Result<(), ToolError> {
    debug!(tool, command = ?command, "launching external tool");

    let output = command.output().map_err(|source| ToolError::Launch {
        tool: tool.to_string(),
        source,
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        return Err(ToolError::Failed {
            tool: tool.to_string(),
            status: output.status,
            stderr: stderr.trim().to_string(),
        });
    }

    if !stderr.trim().is_empty() {
        debug!(tool, "{}", stderr.trim());
    }

    Ok(())
}

/// Maps one library's reads against the target collection.
///
/// Implementations own the whole mapping leg: index preparation, paired and
/// unpaired alignment, merge, coordinate sort, and re-export. The returned
/// path is the plain-text alignment listing, placed under `scratch`.
pub trait ReadMapper {
    /// # Errors
    ///
    /// Returns a [`ToolError`] if any underlying invocation fails to launch
    /// or exits non-zero.
    fn map_library(
        &self,
        targets: &Path,
        library: &Library,
        scratch: &Path,
    ) -> Result<PathBuf, ToolError>;
}

/// Searches an extracted-read collection against a library's assembled
/// contigs.
///
/// The returned path is the tabular hit listing, placed under `scratch`
/// along with any database artifacts.
pub trait ContigSearcher {
    /// # Errors
    ///
    /// Returns a [`ToolError`] if any underlying invocation fails to launch
    /// or exits non-zero.
    fn search(&self, assembly: &Path, query: &Path, scratch: &Path) -> Result<PathBuf, ToolError>;
}
