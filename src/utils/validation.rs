//! Centralized scan limits and validation helpers.

/// Maximum number of identifier bytes kept for a single record
pub const MAX_ID_LEN: usize = 511;

/// Maximum number of bases kept for a single FASTA record
pub const MAX_SEQ_LEN: usize = 536_870_911;

/// Maximum number of bases (or quality characters) kept for a single FASTQ record
pub const MAX_FQ_LEN: usize = 2047;

/// Maximum number of sequences a genome index accepts
pub const MAX_GENOME_SEQS: usize = 1_000_000;

/// Length limits applied while scanning records.
///
/// Every limit is a hard cap on what is stored; bytes past the cap are consumed
/// and discarded so the stream stays framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimits {
    /// Identifier bytes kept per record
    pub max_id_len: usize,

    /// Bases kept per FASTA record
    pub max_fasta_len: usize,

    /// Bases/quality characters kept per FASTQ record
    pub max_fastq_len: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_id_len: MAX_ID_LEN,
            max_fasta_len: MAX_SEQ_LEN,
            max_fastq_len: MAX_FQ_LEN,
        }
    }
}

impl ScanLimits {
    #[must_use]
    pub fn with_max_id_len(mut self, max_id_len: usize) -> Self {
        self.max_id_len = max_id_len;
        self
    }

    #[must_use]
    pub fn with_max_fasta_len(mut self, max_fasta_len: usize) -> Self {
        self.max_fasta_len = max_fasta_len;
        self
    }

    #[must_use]
    pub fn with_max_fastq_len(mut self, max_fastq_len: usize) -> Self {
        self.max_fastq_len = max_fastq_len;
        self
    }
}

/// Check if adding another sequence would exceed `max`.
///
/// Call this with the current count BEFORE adding a new sequence.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_sequence_limit(count: usize, max: usize) -> Option<String> {
    if count >= max {
        Some(format!(
            "Too many sequences: genome index holds at most {max}"
        ))
    } else {
        None
    }
}

/// Whitespace as the C locale defines it (space, \t, \n, \v, \f, \r).
///
/// `u8::is_ascii_whitespace` leaves out vertical tab, which legacy files
/// occasionally carry inside sequence blocks.
#[inline]
#[must_use]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
