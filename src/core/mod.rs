//! Core record types.
//!
//! - [`Sequence`]: one FASTA record (identifier plus upper-cased bases)
//! - [`FastqRecord`]: one FASTQ read (identifier, bases, qualities)
//! - [`PairedRecord`]: R1/R2 reads advanced together from two streams
//!
//! Records are plain owned values. A [`Sequence`] is typically handed to a
//! [`GenomeIndex`](crate::catalog::genome::GenomeIndex), which owns it from
//! then on; FASTQ records are transient and are usually processed and
//! dropped immediately.

pub mod read;
pub mod sequence;

pub use read::{FastqRecord, PairedRecord};
pub use sequence::{Sequence, SequenceSummary};
