//! Streaming FASTA parser.
//!
//! Each record is a `>` line followed by any number of sequence lines. The
//! identifier is the first whitespace-delimited token of the `>` line and the
//! rest of that line is ignored. Sequence lines are concatenated with all
//! whitespace removed and every base upper-cased; no line width is assumed.
//!
//! Supported inputs:
//! - `.fa`, `.fasta`, `.fna` or any other name (uncompressed)
//! - any name ending in `.gz` (gzip or bgzip compressed)

use std::path::Path;

use tracing::warn;

use crate::core::sequence::Sequence;
use crate::parsing::error::{utf8_identifier, ParseError};
use crate::parsing::source::ByteSource;
use crate::utils::validation::{is_space, ScanLimits};

/// Pulls [`Sequence`] records from a [`ByteSource`] one at a time.
///
/// After an error the reader is finished and yields no further records.
#[derive(Debug)]
pub struct FastaReader {
    source: ByteSource,
    limits: ScanLimits,
    records: usize,
    done: bool,
}

impl FastaReader {
    pub fn new(source: ByteSource) -> Self {
        Self::with_limits(source, ScanLimits::default())
    }

    pub fn with_limits(source: ByteSource, limits: ScanLimits) -> Self {
        Self {
            source,
            limits,
            records: 0,
            done: false,
        }
    }

    /// Open a FASTA file (gzip inferred from a `.gz` suffix)
    ///
    /// # Errors
    ///
    /// Returns `ParseError::SourceOpenFailed` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>, limits: ScanLimits) -> Result<Self, ParseError> {
        Ok(Self::with_limits(ByteSource::open(path)?, limits))
    }

    /// Number of records returned so far
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records
    }

    /// Release the underlying source
    pub fn close(self) {
        self.source.close();
    }

    /// Read the next record, or `None` once the stream holds no further `>` marker.
    ///
    /// A sequence longer than `max_fasta_len` is capped at that length, a
    /// warning is logged, and the remaining bases up to the next record are
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Framing` if a record does not start with `>`,
    /// `ParseError::IdentifierTooLong` if the identifier exceeds `max_id_len`,
    /// or `ParseError::Io` if the stream cannot be read.
    pub fn next_record(&mut self) -> Result<Option<Sequence>, ParseError> {
        if self.done {
            return Ok(None);
        }

        match self.read_record() {
            Ok(Some(seq)) => {
                self.records += 1;
                Ok(Some(seq))
            }
            Ok(None) => {
                self.done = true;
                Ok(None)
            }
            Err(e) => {
                self.done = true;
                Err(e)
            }
        }
    }

    fn read_record(&mut self) -> Result<Option<Sequence>, ParseError> {
        let marker = loop {
            match self.source.next_byte()? {
                None => return Ok(None),
                Some(b'\n' | b'\r') => {}
                Some(b) => break b,
            }
        };

        if marker != b'>' {
            return Err(ParseError::Framing(format!(
                "fasta record {} in {} not beginning with >",
                self.records + 1,
                self.source.name()
            )));
        }

        let (id, terminator) = self.read_identifier()?;
        if !matches!(terminator, Some(b'\n') | None) {
            self.source.skip_line()?;
        }

        let max = self.limits.max_fasta_len;
        let mut bases = Vec::new();
        let mut truncated = false;

        while let Some(b) = self.source.next_byte()? {
            if b == b'>' {
                self.source.push_back(b);
                break;
            }
            if is_space(b) {
                continue;
            }
            if bases.len() < max {
                bases.push(b.to_ascii_uppercase());
            } else {
                truncated = true;
            }
        }

        if truncated {
            warn!("{id} is truncated to {max}");
        }

        Ok(Some(Sequence {
            id,
            bases,
            truncated,
        }))
    }

    /// Identifier bytes up to the first whitespace, plus the byte that ended it
    fn read_identifier(&mut self) -> Result<(String, Option<u8>), ParseError> {
        let max = self.limits.max_id_len;
        let mut id = Vec::new();

        let terminator = loop {
            match self.source.next_byte()? {
                Some(b) if is_space(b) => break Some(b),
                Some(b) => {
                    if id.len() == max {
                        return Err(ParseError::IdentifierTooLong {
                            prefix: String::from_utf8_lossy(&id).into_owned(),
                            max,
                        });
                    }
                    id.push(b);
                }
                None => break None,
            }
        };

        Ok((utf8_identifier(id, self.source.name())?, terminator))
    }
}

impl Iterator for FastaReader {
    type Item = Result<Sequence, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
