//! # fastx-genome
//!
//! Streaming parsers for FASTA and FASTQ files and a small in-memory genome
//! index for looking up sequences by identifier.
//!
//! Both formats are read byte by byte from plain or gzip-compressed files.
//! Compression is chosen by file name: anything ending in `.gz` is
//! decompressed. Records are framed strictly (`>` for FASTA; `@`, `+` and
//! four lines for FASTQ), lengths are capped by configurable limits, and
//! malformed input is reported as a typed error rather than a partial record.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fastx_genome::{FastaReader, GenomeIndex, ScanLimits};
//!
//! let mut reader = FastaReader::open("genome.fa.gz", ScanLimits::default()).unwrap();
//! let mut genome = GenomeIndex::new();
//! genome.load_fasta(&mut reader).unwrap();
//! reader.close();
//! genome.finalize();
//!
//! if let Some(seq) = genome.find("chr2").unwrap() {
//!     println!("chr2: {} bp", seq.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Record types for FASTA sequences and FASTQ reads
//! - [`parsing`]: Byte sources and the FASTA, FASTQ and paired FASTQ readers
//! - [`catalog`]: The sorted genome index
//! - [`utils`]: Scan limits and validation helpers
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::genome::{GenomeIndex, IndexError};
pub use core::read::{FastqRecord, PairedRecord};
pub use core::sequence::Sequence;
pub use parsing::{ByteSource, FastaReader, FastqReader, PairedFastqReader, ParseError};
pub use utils::validation::ScanLimits;
