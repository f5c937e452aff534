//! Reference synthesis: tallies search hits, picks one winning contig per
//! locus, and writes the library's final reference FASTA and report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::core::contigs::ContigCollection;
use crate::core::library::Library;
use crate::core::records::{HitRecord, LocusReads};
use crate::core::report::LibraryReport;
use crate::core::targets::TargetSet;
use crate::parsing::fasta::{read_contig_collection, FastaWriter};
use crate::pipeline::runner::PipelineError;
use crate::selection::HitTally;

/// Writes `<library>.fa` and `<library>_ref.report` into the output
/// directory.
///
/// The reference FASTA holds one record per locus that won a contig, in
/// canonical locus order; loci without hits are absent from the FASTA but
/// still appear in the report. An empty hit list produces an empty FASTA
/// and an all-`NO` report without touching the assembly file.
pub fn write_outputs(
    output_dir: &Path,
    library: &Library,
    targets: &TargetSet,
    reads: &LocusReads,
    hits: &[HitRecord],
) -> Result<(), PipelineError> {
    let tally = HitTally::from_hits(hits);
    let contigs = if tally.is_empty() {
        ContigCollection::default()
    } else {
        read_contig_collection(&library.assembly, &tally.contig_ids())?
    };
    let winners = tally.select_winners(&contigs);

    let reference_path = output_dir.join(format!("{}.fa", library.id));
    let file = File::create(&reference_path)?;
    let mut writer = FastaWriter::new(BufWriter::new(file));
    for locus in targets.loci() {
        if let Some(contig_id) = winners.get(locus) {
            let sequence = contigs
                .sequence_of(contig_id)
                .ok_or_else(|| PipelineError::MissingContig(contig_id.clone()))?;
            writer.write_record(locus, sequence)?;
        }
    }
    writer.finish()?;

    let report = LibraryReport::build(targets, reads, &winners);
    let report_path = output_dir.join(format!("{}_ref.report", library.id));
    let mut report_file = BufWriter::new(File::create(&report_path)?);
    report.write_to(&mut report_file)?;
    report_file.flush()?;

    info!(
        library = %library.id,
        references = winners.len(),
        loci = targets.len(),
        "final reference and report written"
    );
    Ok(())
}
