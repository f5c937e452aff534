//! Command-line behavior tests.
//!
//! These run the real binary but only in scenarios that return before any
//! external tool would be launched: argument errors, empty batches, and
//! failures while loading run-level inputs.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ref_forge() -> Command {
    Command::cargo_bin("ref-forge").unwrap()
}

#[test]
fn test_no_arguments_prints_usage() {
    ref_forge()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_describes_the_tool() {
    ref_forge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ref-forge"))
        .stdout(predicate::str::contains("--reads-dir"));
}

#[test]
fn test_empty_reads_directory_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let targets = dir.path().join("targets.fa");
    std::fs::write(&targets, ">locus1\nACGT\n").unwrap();
    let reads = dir.path().join("reads");
    std::fs::create_dir_all(&reads).unwrap();

    ref_forge()
        .arg("-r")
        .arg(&targets)
        .arg("-f")
        .arg(&reads)
        .arg("-a")
        .arg(dir.path().join("assemblies"))
        .arg("-o")
        .arg(dir.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unreadable_targets_fails_before_any_library() {
    let dir = TempDir::new().unwrap();
    let reads = dir.path().join("reads");
    std::fs::create_dir_all(&reads).unwrap();
    // A discoverable library forces the targets file to be loaded.
    std::fs::write(reads.join("libA_1_final.txt.gz"), b"").unwrap();

    ref_forge()
        .arg("-r")
        .arg(dir.path().join("no_such_targets.fa"))
        .arg("-f")
        .arg(&reads)
        .arg("-a")
        .arg(dir.path().join("assemblies"))
        .arg("-o")
        .arg(dir.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("batch run stopped"));
}

#[test]
fn test_json_summary_for_an_empty_batch() {
    let dir = TempDir::new().unwrap();
    let targets = dir.path().join("targets.fa");
    std::fs::write(&targets, ">locus1\nACGT\n").unwrap();
    let reads = dir.path().join("reads");
    std::fs::create_dir_all(&reads).unwrap();

    ref_forge()
        .arg("-r")
        .arg(&targets)
        .arg("-f")
        .arg(&reads)
        .arg("-a")
        .arg(dir.path().join("assemblies"))
        .arg("-o")
        .arg(dir.path().join("out"))
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"completed\": []"))
        .stdout(predicate::str::contains("\"failed\": []"));
}
