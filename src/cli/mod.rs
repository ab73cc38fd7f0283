//! Command-line interface for fastx-genome.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **find**: Load a FASTA genome and look up a sequence by identifier
//! - **fasta**: List the records of a FASTA file with lengths and checksums
//! - **fastq**: Count reads (or read pairs) in FASTQ files
//!
//! ## Usage
//!
//! ```text
//! # Look up a chromosome
//! fastx-genome find -f hg38.fa.gz -I chr2
//!
//! # List sequences with MD5 checksums as JSON
//! fastx-genome fasta hg38.fa.gz --md5 --format json
//!
//! # Count paired reads, checking mate identifiers
//! fastx-genome fastq sample_R1.fq.gz --r2 sample_R2.fq.gz --verify-ids
//! ```

use clap::{Parser, Subcommand};

use crate::utils::validation::{ScanLimits, MAX_FQ_LEN, MAX_ID_LEN, MAX_SEQ_LEN};

pub mod fasta;
pub mod fastq;
pub mod find;

#[derive(Parser)]
#[command(name = "fastx-genome")]
#[command(version)]
#[command(about = "Stream FASTA/FASTQ files and look up genome sequences by identifier")]
#[command(
    long_about = "fastx-genome reads FASTA and FASTQ files, plain or gzip-compressed (chosen by a .gz suffix).\n\nIt can:\n- Load a FASTA genome and find a sequence by its identifier\n- List FASTA records with lengths and MD5 checksums\n- Count single or paired-end FASTQ reads"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a sequence in a FASTA genome by identifier
    Find(find::FindArgs),

    /// List the records of a FASTA file
    Fasta(fasta::FastaArgs),

    /// Count reads in single or paired FASTQ files
    Fastq(fastq::FastqArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Length caps shared by every subcommand
#[derive(Clone, Copy, Debug, clap::Args)]
pub struct LimitArgs {
    /// Maximum identifier length
    #[arg(long, default_value_t = MAX_ID_LEN)]
    pub max_id_len: usize,

    /// Maximum bases kept per FASTA record
    #[arg(long, default_value_t = MAX_SEQ_LEN)]
    pub max_fasta_len: usize,

    /// Maximum bases kept per FASTQ read
    #[arg(long, default_value_t = MAX_FQ_LEN)]
    pub max_fastq_len: usize,
}

impl From<LimitArgs> for ScanLimits {
    fn from(args: LimitArgs) -> Self {
        ScanLimits::default()
            .with_max_id_len(args.max_id_len)
            .with_max_fasta_len(args.max_fasta_len)
            .with_max_fastq_len(args.max_fastq_len)
    }
}
