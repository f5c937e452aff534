//! End-to-end batch tests with fake mapping and search tools.
//!
//! The external aligner and search tool are replaced by fakes that drop
//! canned outputs into the scratch directory, so the full batch path runs
//! exactly as in production (discovery, listing reconciliation, read
//! extraction, winner selection, synthesis) without any external binary.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;

use ref_forge::tools::{ContigSearcher, ReadMapper, ToolError};
use ref_forge::{run_batch, Library, PipelineConfig};

/// A mapper that writes a canned alignment listing per library and fails
/// for libraries it does not know.
struct FakeMapper {
    listings: HashMap<String, String>,
}

impl FakeMapper {
    fn new(listings: &[(&str, &str)]) -> Self {
        Self {
            listings: listings
                .iter()
                .map(|(id, listing)| ((*id).to_string(), (*listing).to_string()))
                .collect(),
        }
    }
}

impl ReadMapper for FakeMapper {
    fn map_library(
        &self,
        _targets: &Path,
        library: &Library,
        scratch: &Path,
    ) -> Result<PathBuf, ToolError> {
        let listing = self
            .listings
            .get(&library.id)
            .ok_or_else(|| ToolError::Launch {
                tool: "bowtie2".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no canned listing"),
            })?;
        let path = scratch.join("alignments.sam");
        std::fs::write(&path, listing)?;
        Ok(path)
    }
}

/// A searcher that writes the same canned hit table for every library.
struct FakeSearcher {
    hits: String,
}

impl ContigSearcher for FakeSearcher {
    fn search(&self, _assembly: &Path, _query: &Path, scratch: &Path) -> Result<PathBuf, ToolError> {
        let path = scratch.join("search_hits.tsv");
        std::fs::write(&path, &self.hits)?;
        Ok(path)
    }
}

/// A searcher that fails the test if the search stage runs at all.
struct NeverSearcher;

impl ContigSearcher for NeverSearcher {
    fn search(&self, _: &Path, _: &Path, _: &Path) -> Result<PathBuf, ToolError> {
        unreachable!("search stage must not run for this scenario");
    }
}

fn write_gz(path: &Path, content: &str) {
    let file = File::create(path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

/// Lays out targets.fa plus empty reads/, assemblies/, and out/ paths.
fn setup(dir: &Path) -> (PathBuf, PathBuf, PathBuf, PathBuf) {
    let targets = dir.join("targets.fa");
    std::fs::write(&targets, ">locus1\nAAAAAAAA\n>locus2\nCCCCCCCC\n").unwrap();

    let reads = dir.join("reads");
    let assemblies = dir.join("assemblies");
    std::fs::create_dir_all(&reads).unwrap();
    std::fs::create_dir_all(&assemblies).unwrap();
    (targets, reads, assemblies, dir.join("out"))
}

fn add_library(reads: &Path, assemblies: &Path, id: &str, r1: &str, r2: &str, assembly: &str) {
    write_gz(&reads.join(format!("{id}_1_final.txt.gz")), r1);
    write_gz(&reads.join(format!("{id}_2_final.txt.gz")), r2);
    write_gz(&reads.join(format!("{id}_u_final.txt.gz")), "");
    std::fs::write(assemblies.join(format!("{id}.fa.final")), assembly).unwrap();
}

const LIB_A_LISTING: &str = "@HD\tVN:1.0\n\
    HWI-7:1:1101\t0\tlocus1\t1\t42\t8M\t*\t0\t0\tACGTACGT\tIIIIIIII\n";

/// Full single-library run: one locus receives reads, its hits pick a
/// contig, and the other locus is reported as never mapped.
#[test]
fn test_single_library_end_to_end() {
    let dir = TempDir::new().unwrap();
    let (targets, reads, assemblies, out) = setup(dir.path());
    add_library(
        &reads,
        &assemblies,
        "libA",
        "@HWI-7:1:1101/1\nACGTACGT\n+\nIIIIIIII\n",
        "@HWI-7:1:1101/2\nTGCATGCA\n+\nIIIIIIII\n",
        ">c1\nACGTACGTACGTACGT\n>c2\nTTTT\n",
    );

    let mapper = FakeMapper::new(&[("libA", LIB_A_LISTING)]);
    let searcher = FakeSearcher {
        hits: "# blastn hits\nlocus1\tc1\nlocus1\tc1\n".to_string(),
    };

    let config = PipelineConfig::new(&targets, &reads, &assemblies, &out);
    let summary = run_batch(&config, &mapper, &searcher).unwrap();

    assert!(summary.all_succeeded());
    assert_eq!(summary.completed, vec!["libA".to_string()]);

    let fasta = std::fs::read_to_string(out.join("libA.fa")).unwrap();
    assert_eq!(fasta, ">locus1\nACGTACGTACGTACGT\n");

    let report = std::fs::read_to_string(out.join("libA_ref.report")).unwrap();
    assert_eq!(
        report,
        "Locus\tMapped Initially?\tFinal Reference\n\
         locus1\tYES\tc1\n\
         locus2\tNO\tNot in final\n"
    );
}

/// Two identical runs into the same output directory produce byte-identical
/// outputs and leave no scratch files behind.
#[test]
fn test_batch_is_idempotent_and_cleans_scratch() {
    let dir = TempDir::new().unwrap();
    let (targets, reads, assemblies, out) = setup(dir.path());
    add_library(
        &reads,
        &assemblies,
        "libA",
        "@HWI-7:1:1101/1\nACGTACGT\n+\nIIIIIIII\n",
        "",
        ">c1\nACGTACGT\n",
    );

    let mapper = FakeMapper::new(&[("libA", LIB_A_LISTING)]);
    let searcher = FakeSearcher {
        hits: "locus1\tc1\n".to_string(),
    };
    let config = PipelineConfig::new(&targets, &reads, &assemblies, &out);

    run_batch(&config, &mapper, &searcher).unwrap();
    let first_fasta = std::fs::read(out.join("libA.fa")).unwrap();
    let first_report = std::fs::read(out.join("libA_ref.report")).unwrap();

    run_batch(&config, &mapper, &searcher).unwrap();
    assert_eq!(std::fs::read(out.join("libA.fa")).unwrap(), first_fasta);
    assert_eq!(
        std::fs::read(out.join("libA_ref.report")).unwrap(),
        first_report
    );

    let mut names: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["libA.fa", "libA_ref.report"]);
}

/// A library whose mapping fails is recorded and skipped; the rest of the
/// batch still completes.
#[test]
fn test_failing_library_does_not_stop_the_batch() {
    let dir = TempDir::new().unwrap();
    let (targets, reads, assemblies, out) = setup(dir.path());
    add_library(
        &reads,
        &assemblies,
        "libA",
        "@HWI-7:1:1101/1\nACGTACGT\n+\nIIIIIIII\n",
        "",
        ">c1\nACGTACGT\n",
    );
    add_library(
        &reads,
        &assemblies,
        "libB",
        "@HWI-7:2:2202/1\nTTTT\n+\nIIII\n",
        "",
        ">c9\nTTTT\n",
    );

    // The mapper only knows libA, so libB's mapping stage fails.
    let mapper = FakeMapper::new(&[("libA", LIB_A_LISTING)]);
    let searcher = FakeSearcher {
        hits: "locus1\tc1\n".to_string(),
    };

    let config = PipelineConfig::new(&targets, &reads, &assemblies, &out);
    let summary = run_batch(&config, &mapper, &searcher).unwrap();

    assert!(!summary.all_succeeded());
    assert_eq!(summary.completed, vec!["libA".to_string()]);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].library, "libB");
    assert!(summary.failed[0].error.contains("bowtie2"));

    assert!(out.join("libA.fa").exists());
    assert!(!out.join("libB.fa").exists());
    assert!(!out.join("libB_ref.report").exists());
}

/// A library with an input file missing fails up front with a clear error.
#[test]
fn test_missing_input_file_fails_the_library() {
    let dir = TempDir::new().unwrap();
    let (targets, reads, assemblies, out) = setup(dir.path());
    // Only mate 1 exists; mate 2, unpaired, and the assembly are absent.
    write_gz(
        &reads.join("libB_1_final.txt.gz"),
        "@HWI-7:2:2202/1\nTTTT\n+\nIIII\n",
    );

    let mapper = FakeMapper::new(&[]);
    let config = PipelineConfig::new(&targets, &reads, &assemblies, &out);
    let summary = run_batch(&config, &mapper, &NeverSearcher).unwrap();

    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].library, "libB");
    assert!(summary.failed[0].error.contains("missing input file"));
}

/// With no reads mapped to any target, the search stage is skipped and the
/// library still gets an empty reference plus an all-NO report.
#[test]
fn test_unmapped_library_skips_search() {
    let dir = TempDir::new().unwrap();
    let (targets, reads, assemblies, out) = setup(dir.path());
    add_library(
        &reads,
        &assemblies,
        "libA",
        "@HWI-7:1:1101/1\nACGTACGT\n+\nIIIIIIII\n",
        "",
        ">c1\nACGTACGT\n",
    );

    // One unmapped record, one record against a reference that is not a
    // target locus; both must be dropped.
    let mapper = FakeMapper::new(&[(
        "libA",
        "HWI-7:1:1101\t4\t*\t0\t0\t*\t*\t0\t0\tACGTACGT\tIIIIIIII\n\
         HWI-7:1:1102\t0\tdecoy\t1\t42\t8M\t*\t0\t0\tACGTACGT\tIIIIIIII\n",
    )]);

    let config = PipelineConfig::new(&targets, &reads, &assemblies, &out);
    let summary = run_batch(&config, &mapper, &NeverSearcher).unwrap();

    assert!(summary.all_succeeded());
    assert_eq!(std::fs::read_to_string(out.join("libA.fa")).unwrap(), "");

    let report = std::fs::read_to_string(out.join("libA_ref.report")).unwrap();
    assert_eq!(
        report,
        "Locus\tMapped Initially?\tFinal Reference\n\
         locus1\tNO\tNot in final\n\
         locus2\tNO\tNot in final\n"
    );
}

/// An empty reads directory is a clean no-op: no output directory, no error.
#[test]
fn test_empty_reads_directory_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let (targets, reads, assemblies, out) = setup(dir.path());

    let mapper = FakeMapper::new(&[]);
    let config = PipelineConfig::new(&targets, &reads, &assemblies, &out);
    let summary = run_batch(&config, &mapper, &NeverSearcher).unwrap();

    assert_eq!(summary.total(), 0);
    assert!(summary.all_succeeded());
    assert!(!out.exists());
}

/// Libraries are processed in sorted identifier order regardless of how the
/// filesystem returns directory entries.
#[test]
fn test_libraries_run_in_sorted_order() {
    let dir = TempDir::new().unwrap();
    let (targets, reads, assemblies, out) = setup(dir.path());
    for id in ["s10", "s2", "s1"] {
        add_library(
            &reads,
            &assemblies,
            id,
            "@HWI-7:1:1101/1\nACGT\n+\nIIII\n",
            "",
            ">c1\nACGT\n",
        );
    }

    let listing = "HWI-7:1:1101\t0\tlocus1\t1\t42\t4M\t*\t0\t0\tACGT\tIIII\n";
    let mapper = FakeMapper::new(&[("s1", listing), ("s10", listing), ("s2", listing)]);
    let searcher = FakeSearcher {
        hits: "locus1\tc1\n".to_string(),
    };

    let config = PipelineConfig::new(&targets, &reads, &assemblies, &out);
    let summary = run_batch(&config, &mapper, &searcher).unwrap();

    assert_eq!(summary.completed, ["s1", "s10", "s2"]);
}
