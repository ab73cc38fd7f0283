//! End-to-end tests of the fastx-genome binary.

use assert_cmd::prelude::*;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const BINARY: &str = "fastx-genome";
type TestResult = Result<(), Box<dyn std::error::Error>>;

const GENOME: &[u8] = b">chrX sex chromosome\nACGTNN\nacgt\n>chr1\nAAAA\n>chr2 second\nCCCCCC\nGG\n";

fn temp_file(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(suffix).unwrap();
    temp.write_all(content).unwrap();
    temp.flush().unwrap();
    temp
}

fn gz_temp_file(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content).unwrap();
    temp_file(suffix, &encoder.finish().unwrap())
}

#[test]
fn find_existing_sequence() -> TestResult {
    let genome = temp_file(".fa", GENOME);

    Command::cargo_bin(BINARY)?
        .arg("find")
        .arg("-f")
        .arg(genome.path())
        .args(["-I", "chr2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found chr2 in genome. Length = 8"));

    Ok(())
}

#[test]
fn find_missing_sequence() -> TestResult {
    let genome = gz_temp_file(".fa.gz", GENOME);

    Command::cargo_bin(BINARY)?
        .arg("find")
        .arg("-f")
        .arg(genome.path())
        .args(["-I", "chrY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not find chrY in genome."));

    Ok(())
}

#[test]
fn find_json_output() -> TestResult {
    let genome = temp_file(".fa", GENOME);

    let output = Command::cargo_bin(BINARY)?
        .arg("find")
        .arg("-f")
        .arg(genome.path())
        .args(["-I", "chrX", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["id"], "chrX");
    assert_eq!(json["found"], true);
    assert_eq!(json["length"], 10);

    Ok(())
}

#[test]
fn find_too_many_sequences_fails() -> TestResult {
    let genome = temp_file(".fa", GENOME);

    Command::cargo_bin(BINARY)?
        .arg("find")
        .arg("-f")
        .arg(genome.path())
        .args(["-I", "chr1", "--max-sequences", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 2"));

    Ok(())
}

#[test]
fn missing_file_fails() -> TestResult {
    Command::cargo_bin(BINARY)?
        .args(["fasta", "file_which_does_not_exist.fa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open"));

    Ok(())
}

#[test]
fn invalid_gzip_fails() -> TestResult {
    let reads = temp_file(".fq.gz", b"@r1\nACGT\n+\n!!!!\n");

    Command::cargo_bin(BINARY)?
        .arg("fastq")
        .arg(reads.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open"));

    Ok(())
}

#[test]
fn fasta_listing_with_md5() -> TestResult {
    let fasta = temp_file(".fa", b">chr1\nacgt\n>chr2\nGG\nGG\n");

    Command::cargo_bin(BINARY)?
        .arg("fasta")
        .arg(fasta.path())
        .args(["--md5", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id\tlength\tmd5"))
        .stdout(predicate::str::contains(
            "chr1\t4\tf1f8f4bf413b16ad135722aa4591043e",
        ))
        .stdout(predicate::str::contains("chr2\t4\t"));

    Ok(())
}

#[test]
fn fasta_truncation_warns() -> TestResult {
    let fasta = temp_file(".fa", b">long\nACGTACGT\n>short\nAC\n");

    Command::cargo_bin(BINARY)?
        .arg("fasta")
        .arg(fasta.path())
        .args(["--max-fasta-len", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saw long length 4"))
        .stdout(predicate::str::contains("Saw short length 2"))
        .stderr(predicate::str::contains("long is truncated to 4"));

    Ok(())
}

#[test]
fn fastq_counts() -> TestResult {
    let reads = gz_temp_file(".fq.gz", b"@r1 desc\nACGT\n+\n!!!!\n@r2\nAC\n+\nII\n");

    Command::cargo_bin(BINARY)?
        .arg("fastq")
        .arg(reads.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("reads: 2 reads, 6 bases"))
        .stdout(predicate::str::contains("Mean length: 3.00"));

    Ok(())
}

#[test]
fn fastq_truncation_warns() -> TestResult {
    let reads = temp_file(".fq", b"@r1\nACGTACGT\n+\nIIIIIIII\n@r2\nAC\n+\nII\n");

    Command::cargo_bin(BINARY)?
        .arg("fastq")
        .arg(reads.path())
        .args(["--max-fastq-len", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reads: 2 reads, 6 bases"))
        .stderr(predicate::str::contains("r1 is truncated to 4"));

    Ok(())
}

#[test]
fn fastq_framing_error_fails() -> TestResult {
    let reads = temp_file(".fq", b"@r1\nACGT\n-\n!!!!\n");

    Command::cargo_bin(BINARY)?
        .arg("fastq")
        .arg(reads.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Problem reading quality line for r1"));

    Ok(())
}

#[test]
fn fastq_pairs_with_uneven_files_warns() -> TestResult {
    let r1 = temp_file("_R1.fq", b"@a/1\nAC\n+\nII\n@b/1\nGG\n+\nII\n");
    let r2 = temp_file("_R2.fq", b"@a/2\nTTT\n+\nIII\n");

    Command::cargo_bin(BINARY)?
        .arg("fastq")
        .arg(r1.path())
        .arg("--r2")
        .arg(r2.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("R1: 1 reads, 2 bases"))
        .stdout(predicate::str::contains("R2: 1 reads, 3 bases"))
        .stderr(predicate::str::contains("has more records than"));

    Ok(())
}

#[test]
fn fastq_pairs_verify_ids() -> TestResult {
    let r1 = temp_file("_R1.fq", b"@a/1\nAC\n+\nII\n");
    let r2 = temp_file("_R2.fq", b"@b/2\nAC\n+\nII\n");

    Command::cargo_bin(BINARY)?
        .arg("fastq")
        .arg(r1.path())
        .arg("--r2")
        .arg(r2.path())
        .arg("--verify-ids")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Paired reads do not match"));

    Ok(())
}
