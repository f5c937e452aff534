//! Execution of the batch command and rendering of the run summary.

use anyhow::{bail, Context};

use crate::cli::{Cli, OutputFormat};
use crate::pipeline::{run_batch, BatchSummary, PipelineConfig};
use crate::tools::{BlastN, Bowtie2Mapper};

/// Execute the batch run described by the parsed command line.
///
/// # Errors
///
/// Returns an error when the run could not start (unreadable targets,
/// unwritable output directory) or when at least one library failed, so the
/// process exit code reflects the batch outcome.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = PipelineConfig::new(
        &cli.targets,
        &cli.reads_dir,
        &cli.assembly_dir,
        &cli.output_dir,
    );
    config.read_marker = cli.read_marker.clone();
    config.evalue = cli.evalue.clone();
    config.threads = cli.threads;

    let mapper = Bowtie2Mapper::new(cli.threads);
    let searcher = BlastN::new(cli.threads, &cli.evalue);

    let summary =
        run_batch(&config, &mapper, &searcher).context("batch run stopped before completion")?;

    print_summary(&summary, cli.format)?;

    if !summary.all_succeeded() {
        bail!(
            "{} of {} libraries failed",
            summary.failed.len(),
            summary.total()
        );
    }
    Ok(())
}

fn print_summary(summary: &BatchSummary, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if summary.total() == 0 {
                return Ok(());
            }
            println!("Libraries completed: {}", summary.completed.len());
            for library in &summary.completed {
                println!("  {library}");
            }
            if !summary.failed.is_empty() {
                println!("Libraries failed: {}", summary.failed.len());
                for failure in &summary.failed {
                    println!("  {}: {}", failure.library, failure.error);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
    }
    Ok(())
}
