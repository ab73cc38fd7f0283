use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::sequence::Sequence;
use crate::parsing::error::ParseError;
use crate::parsing::fasta::FastaReader;
use crate::utils::validation::{check_sequence_limit, ScanLimits, MAX_GENOME_SEQS};

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Genome index must be finalized before lookups")]
    NotFinalized,

    #[error("Genome index is finalized; no more sequences can be added")]
    AlreadyFinalized,

    #[error("{0}")]
    Full(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// In-memory collection of FASTA sequences, looked up by identifier.
///
/// The index is built then frozen: sequences are appended in file order,
/// [`finalize`](Self::finalize) sorts them once by identifier (byte-wise),
/// and from then on only lookups are allowed.
///
/// Duplicate identifiers are kept. The sort is stable, so [`find`](Self::find)
/// returns the one that was appended first.
#[derive(Debug)]
pub struct GenomeIndex {
    sequences: Vec<Sequence>,
    max_sequences: usize,
    finalized: bool,
}

impl Default for GenomeIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl GenomeIndex {
    pub fn new() -> Self {
        Self::with_max_sequences(MAX_GENOME_SEQS)
    }

    pub fn with_max_sequences(max_sequences: usize) -> Self {
        Self {
            sequences: Vec::new(),
            max_sequences,
            finalized: false,
        }
    }

    /// Load every record of a FASTA file and finalize the index
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Parse` if the file cannot be opened or a record
    /// is malformed, or `IndexError::Full` if the file holds more than
    /// `max_sequences` records.
    pub fn from_fasta_path(
        path: impl AsRef<Path>,
        limits: ScanLimits,
        max_sequences: usize,
    ) -> Result<Self, IndexError> {
        let mut reader = FastaReader::open(path, limits)?;
        let mut genome = Self::with_max_sequences(max_sequences);
        genome.load_fasta(&mut reader)?;
        reader.close();
        genome.finalize();
        Ok(genome)
    }

    /// Append every remaining record from `reader`; returns how many were added
    ///
    /// # Errors
    ///
    /// Stops at the first parse or capacity error.
    pub fn load_fasta(&mut self, reader: &mut FastaReader) -> Result<usize, IndexError> {
        let mut added = 0;
        while let Some(seq) = reader.next_record()? {
            debug!("Saw {} length {}", seq.id, seq.len());
            self.append(seq)?;
            added += 1;
        }
        Ok(added)
    }

    /// Add a sequence during the load phase
    ///
    /// # Errors
    ///
    /// Returns `IndexError::AlreadyFinalized` after [`finalize`](Self::finalize),
    /// or `IndexError::Full` if the index already holds `max_sequences`.
    pub fn append(&mut self, seq: Sequence) -> Result<(), IndexError> {
        if self.finalized {
            return Err(IndexError::AlreadyFinalized);
        }
        if let Some(msg) = check_sequence_limit(self.sequences.len(), self.max_sequences) {
            return Err(IndexError::Full(msg));
        }
        self.sequences.push(seq);
        Ok(())
    }

    /// Sort by identifier and freeze the index. Calling it again has no effect.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }

        self.sequences
            .sort_by(|a, b| a.id.as_bytes().cmp(b.id.as_bytes()));

        for id in self.duplicate_ids() {
            warn!("Duplicate sequence identifier {id}; lookups return the first loaded");
        }

        self.finalized = true;
        debug!("Finalized genome index with {} sequences", self.sequences.len());
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Binary search for an exact identifier
    ///
    /// # Errors
    ///
    /// Returns `IndexError::NotFinalized` if called before [`finalize`](Self::finalize).
    pub fn find(&self, id: &str) -> Result<Option<&Sequence>, IndexError> {
        if !self.finalized {
            return Err(IndexError::NotFinalized);
        }

        let idx = self
            .sequences
            .partition_point(|s| s.id.as_bytes() < id.as_bytes());

        Ok(self.sequences.get(idx).filter(|s| s.id == id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Sum of the lengths of all stored sequences
    #[must_use]
    pub fn total_bases(&self) -> u64 {
        self.sequences.iter().map(|s| s.len() as u64).sum()
    }

    /// Sequences in load order before finalizing, identifier order after
    pub fn iter(&self) -> impl Iterator<Item = &Sequence> {
        self.sequences.iter()
    }

    /// Identifiers stored more than once, each listed once. Expects sorted sequences.
    fn duplicate_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .sequences
            .windows(2)
            .filter(|pair| pair[0].id == pair[1].id)
            .map(|pair| pair[0].id.as_str())
            .collect();
        ids.dedup();
        ids
    }
}
