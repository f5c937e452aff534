//! The per-library outcome report.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::core::records::LocusReads;
use crate::core::targets::TargetSet;

/// Fixed header line of the report file.
pub const REPORT_HEADER: &str = "Locus\tMapped Initially?\tFinal Reference";

/// Marker written for loci without a winning contig.
pub const NOT_IN_FINAL: &str = "Not in final";

/// Outcome for a single locus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Whether any read aligned to the locus initially.
    pub mapped: bool,
    /// The winning contig, when the search stage produced one.
    pub final_reference: Option<String>,
}

/// One report line per locus in the canonical target set, no more, no less.
#[derive(Debug, Serialize)]
pub struct LibraryReport {
    entries: BTreeMap<String, ReportEntry>,
}

impl LibraryReport {
    /// Assemble the report for every locus in the target set.
    #[must_use]
    pub fn build(
        targets: &TargetSet,
        reads: &LocusReads,
        winners: &BTreeMap<String, String>,
    ) -> Self {
        let mut entries = BTreeMap::new();
        for locus in targets.loci() {
            entries.insert(
                locus.clone(),
                ReportEntry {
                    mapped: reads.is_mapped(locus),
                    final_reference: winners.get(locus).cloned(),
                },
            );
        }

        Self { entries }
    }

    #[must_use]
    pub fn entry(&self, locus: &str) -> Option<&ReportEntry> {
        self.entries.get(locus)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the tab-separated report.
    ///
    /// # Errors
    ///
    /// Returns any IO error from the underlying writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{REPORT_HEADER}")?;
        for (locus, entry) in &self.entries {
            let mapped = if entry.mapped { "YES" } else { "NO" };
            let reference = entry.final_reference.as_deref().unwrap_or(NOT_IN_FINAL);
            writeln!(writer, "{locus}\t{mapped}\t{reference}")?;
        }
        Ok(())
    }
}
