//! Genome index storage and lookup.
//!
//! A [`GenomeIndex`](genome::GenomeIndex) holds the FASTA records of one
//! genome in memory and answers exact identifier lookups by binary search.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fastx_genome::catalog::genome::GenomeIndex;
//! use fastx_genome::utils::validation::{ScanLimits, MAX_GENOME_SEQS};
//!
//! let genome =
//!     GenomeIndex::from_fasta_path("hg38.fa.gz", ScanLimits::default(), MAX_GENOME_SEQS)
//!         .unwrap();
//!
//! match genome.find("chr2").unwrap() {
//!     Some(seq) => println!("{}: {} bp", seq.id, seq.len()),
//!     None => println!("chr2 not found"),
//! }
//! ```
//!
//! ## Lifecycle
//!
//! 1. `append` sequences in file order (capacity checked)
//! 2. `finalize` once, sorting by identifier
//! 3. `find` any number of times
//!
//! Lookups before step 2 and appends after it are rejected with an
//! [`IndexError`](genome::IndexError).

pub mod genome;
