//! Paired-end FASTQ reading.
//!
//! R1 and R2 files are advanced in lock-step: a pair is produced only when
//! both files yield a record. When one file runs out before the other the
//! pair stream ends and a warning names the file that still had data.

use std::path::Path;

use tracing::warn;

use crate::core::read::PairedRecord;
use crate::parsing::error::ParseError;
use crate::parsing::fastq::FastqReader;
use crate::utils::validation::ScanLimits;

#[derive(Debug)]
pub struct PairedFastqReader {
    r1: FastqReader,
    r2: FastqReader,
    verify_ids: bool,
    pairs: usize,
    done: bool,
}

impl PairedFastqReader {
    pub fn new(r1: FastqReader, r2: FastqReader) -> Self {
        Self {
            r1,
            r2,
            verify_ids: false,
            pairs: 0,
            done: false,
        }
    }

    /// Open both files of a pair (gzip inferred per file from a `.gz` suffix)
    ///
    /// # Errors
    ///
    /// Returns `ParseError::SourceOpenFailed` if either file cannot be opened.
    pub fn open(
        r1: impl AsRef<Path>,
        r2: impl AsRef<Path>,
        limits: ScanLimits,
    ) -> Result<Self, ParseError> {
        Ok(Self::new(
            FastqReader::open(r1, limits)?,
            FastqReader::open(r2, limits)?,
        ))
    }

    /// Require R1 and R2 identifiers to agree, ignoring `/1` and `/2` suffixes
    #[must_use]
    pub fn with_id_check(mut self, verify_ids: bool) -> Self {
        self.verify_ids = verify_ids;
        self
    }

    /// Number of pairs returned so far
    #[must_use]
    pub fn pairs_read(&self) -> usize {
        self.pairs
    }

    pub fn close(self) {
        self.r1.close();
        self.r2.close();
    }

    /// Read the next pair, or `None` once either file is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates any `ParseError` from either reader, and returns
    /// `ParseError::PairMismatch` when identifier checking is enabled and the
    /// mates disagree.
    pub fn next_pair(&mut self) -> Result<Option<PairedRecord>, ParseError> {
        if self.done {
            return Ok(None);
        }

        let result = self.read_pair();
        if !matches!(result, Ok(Some(_))) {
            self.done = true;
        }
        result
    }

    fn read_pair(&mut self) -> Result<Option<PairedRecord>, ParseError> {
        let r1 = self.r1.next_record()?;
        let r2 = self.r2.next_record()?;

        match (r1, r2) {
            (Some(r1), Some(r2)) => {
                let pair = PairedRecord { r1, r2 };
                if self.verify_ids && !pair.ids_match() {
                    return Err(ParseError::PairMismatch {
                        r1: pair.r1.id,
                        r2: pair.r2.id,
                    });
                }
                self.pairs += 1;
                Ok(Some(pair))
            }

            (None, None) => Ok(None),

            (Some(_), None) => {
                warn!(
                    "{} has more records than {} (continues after {} pairs)",
                    self.r1.name(),
                    self.r2.name(),
                    self.pairs
                );
                Ok(None)
            }

            (None, Some(_)) => {
                warn!(
                    "{} has more records than {} (continues after {} pairs)",
                    self.r2.name(),
                    self.r1.name(),
                    self.pairs
                );
                Ok(None)
            }
        }
    }
}

impl Iterator for PairedFastqReader {
    type Item = Result<PairedRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_pair().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::ByteSource;
    use std::io::Cursor;

    fn fastq(records: &[&str]) -> Vec<u8> {
        records
            .iter()
            .map(|id| format!("@{id}\nACGT\n+\nIIII\n"))
            .collect::<String>()
            .into_bytes()
    }

    fn paired(r1: Vec<u8>, r2: Vec<u8>) -> PairedFastqReader {
        PairedFastqReader::new(
            FastqReader::new(ByteSource::from_reader("R1", Cursor::new(r1))),
            FastqReader::new(ByteSource::from_reader("R2", Cursor::new(r2))),
        )
    }

    #[test]
    fn test_pairs_in_lock_step() {
        let mut reader = paired(fastq(&["a/1", "b/1"]), fastq(&["a/2", "b/2"]));

        let pair = reader.next_pair().unwrap().unwrap();
        assert_eq!(pair.r1.id, "a/1");
        assert_eq!(pair.r2.id, "a/2");

        let pair = reader.next_pair().unwrap().unwrap();
        assert_eq!(pair.r1.id, "b/1");
        assert_eq!(pair.r2.id, "b/2");

        assert!(reader.next_pair().unwrap().is_none());
        assert_eq!(reader.pairs_read(), 2);
    }

    #[test]
    fn test_r1_longer_ends_pairs() {
        let mut reader = paired(fastq(&["a", "b", "c"]), fastq(&["a"]));
        let pairs: Vec<_> = reader.by_ref().map(Result::unwrap).collect();
        assert_eq!(pairs.len(), 1);
        assert!(reader.next_pair().unwrap().is_none());
    }

    #[test]
    fn test_r2_longer_ends_pairs() {
        let mut reader = paired(fastq(&["a"]), fastq(&["a", "b"]));
        assert!(reader.next_pair().unwrap().is_some());
        assert!(reader.next_pair().unwrap().is_none());
        assert_eq!(reader.pairs_read(), 1);
    }

    #[test]
    fn test_error_in_either_file_fails_pair() {
        let mut r2 = fastq(&["a"]);
        r2.extend_from_slice(b"@b\nAC\n+\nI\n");
        let mut reader = paired(fastq(&["a", "b"]), r2);

        assert!(reader.next_pair().unwrap().is_some());
        assert!(matches!(
            reader.next_pair(),
            Err(ParseError::LengthMismatch { .. })
        ));
        assert!(reader.next_pair().unwrap().is_none());
    }

    #[test]
    fn test_ids_unchecked_by_default() {
        let mut reader = paired(fastq(&["x"]), fastq(&["y"]));
        let pair = reader.next_pair().unwrap().unwrap();
        assert_eq!(pair.r1.id, "x");
        assert_eq!(pair.r2.id, "y");
    }

    #[test]
    fn test_id_check() {
        let mut reader = paired(fastq(&["a/1", "x/1"]), fastq(&["a/2", "y/2"])).with_id_check(true);
        assert!(reader.next_pair().unwrap().is_some());
        match reader.next_pair().unwrap_err() {
            ParseError::PairMismatch { r1, r2 } => {
                assert_eq!(r1, "x/1");
                assert_eq!(r2, "y/2");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
