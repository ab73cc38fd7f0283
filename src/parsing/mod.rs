//! Record-oriented parsers for FASTA and FASTQ byte streams.
//!
//! This module provides:
//!
//! - **[`ByteSource`]**: a plain or gzip-compressed stream with one byte of pushback
//! - **[`FastaReader`]**: `>` records with multi-line, whitespace-stripped sequence
//! - **[`FastqReader`]**: strict four-line `@`/`+` records
//! - **[`PairedFastqReader`]**: R1/R2 readers advanced in lock-step
//!
//! ## Example
//!
//! ```rust,no_run
//! use fastx_genome::parsing::FastqReader;
//! use fastx_genome::utils::validation::ScanLimits;
//!
//! let reader = FastqReader::open("reads.fq.gz", ScanLimits::default()).unwrap();
//! for record in reader {
//!     let record = record.unwrap();
//!     println!("{}\t{}", record.id, record.len());
//! }
//! ```
//!
//! ## Limits
//!
//! | Limit | Default | Applies to |
//! |-------|---------|------------|
//! | `max_id_len` | 511 | FASTA/FASTQ identifiers |
//! | `max_fasta_len` | 536,870,911 | bases per FASTA record |
//! | `max_fastq_len` | 2,047 | bases/qualities per FASTQ record |
//!
//! Overlong FASTQ identifiers are truncated; overlong FASTA identifiers are
//! rejected. Overlong sequences are truncated with a warning in both formats.

pub mod error;
pub mod fasta;
pub mod fastq;
pub mod paired;
pub mod source;

pub use error::ParseError;
pub use fasta::FastaReader;
pub use fastq::FastqReader;
pub use paired::PairedFastqReader;
pub use source::{is_gz, ByteSource};
