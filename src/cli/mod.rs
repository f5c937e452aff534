//! Command-line interface for ref-forge.
//!
//! ref-forge is a single-command tool: point it at a target FASTA, a reads
//! directory, and an assembly directory, and it forges one reference FASTA
//! and one report per discovered library.
//!
//! ## Usage
//!
//! ```text
//! # Run a batch with the default marker, e-value, and thread count
//! ref-forge -r targets.fa -f reads/ -a assemblies/ -o out/
//!
//! # Reads from a different instrument, stricter search cutoff
//! ref-forge -r targets.fa -f reads/ -a assemblies/ -o out/ -d @M00123 -e 1e-20
//!
//! # JSON summary for scripting
//! ref-forge -r targets.fa -f reads/ -a assemblies/ -o out/ --format json
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::{DEFAULT_EVALUE, DEFAULT_READ_MARKER, DEFAULT_THREADS};

pub mod run;

#[derive(Parser)]
#[command(name = "ref-forge")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Forge per-locus reference sequences from bait-capture sequencing libraries")]
#[command(
    long_about = "ref-forge builds a per-library reference FASTA from bait-capture sequencing data.\n\nFor every library found in the reads directory it:\n- maps the library's reads against the target loci\n- extracts the reads that mapped, keyed by locus\n- searches them against the library's pre-assembled contigs\n- picks one winning contig per locus and writes it under the locus name\n\nEach library also gets a tab-separated report stating, per locus, whether any\nread mapped initially and which contig (if any) made the final reference."
)]
pub struct Cli {
    /// FASTA file with one record per target locus
    #[arg(short = 'r', long)]
    pub targets: PathBuf,

    /// Directory with per-library read files (<library>_{1,2,u}_final.txt.gz)
    #[arg(short = 'f', long)]
    pub reads_dir: PathBuf,

    /// Directory with per-library assembled contigs (<library>.fa.final)
    #[arg(short = 'a', long)]
    pub assembly_dir: PathBuf,

    /// Directory that receives the final references and reports
    #[arg(short = 'o', long)]
    pub output_dir: PathBuf,

    /// Prefix that identifies sequence header lines in the read files
    #[arg(short = 'd', long, default_value = DEFAULT_READ_MARKER)]
    pub read_marker: String,

    /// E-value cutoff for the contig search
    #[arg(short = 'e', long, default_value = DEFAULT_EVALUE)]
    pub evalue: String,

    /// Number of worker threads for the external tools
    #[arg(
        short = 't',
        long,
        default_value_t = DEFAULT_THREADS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub threads: u32,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for the run summary
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
