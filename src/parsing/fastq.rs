//! Streaming FASTQ parser with strict four-line framing.
//!
//! ```text
//! @id optional description
//! SEQUENCE
//! +optional repeat of id
//! QUALITIES
//! ```
//!
//! The sequence and quality lines must each fit on one physical line. Bases
//! are upper-cased; quality characters are kept verbatim. Whitespace inside
//! either line is dropped.

use std::path::Path;

use tracing::warn;

use crate::core::read::FastqRecord;
use crate::parsing::error::{utf8_identifier, ParseError};
use crate::parsing::source::ByteSource;
use crate::utils::validation::{is_space, ScanLimits};

/// Pulls [`FastqRecord`]s from a [`ByteSource`] one at a time.
///
/// After an error the reader is finished and yields no further records.
#[derive(Debug)]
pub struct FastqReader {
    source: ByteSource,
    limits: ScanLimits,
    records: usize,
    done: bool,
}

/// One capped line of sequence or quality
struct Line {
    bytes: Vec<u8>,
    /// Non-whitespace bytes on the line, kept or not
    seen: usize,
    truncated: bool,
    /// Ended by `\n` rather than end of stream
    terminated: bool,
}

impl FastqReader {
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

    /// Open a FASTQ file (gzip inferred from a `.gz` suffix)
    ///
    /// # Errors
    ///
    /// Returns `ParseError::SourceOpenFailed` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>, limits: ScanLimits) -> Result<Self, ParseError> {
        Ok(Self::with_limits(ByteSource::open(path)?, limits))
    }

    /// Name of the underlying source
    #[must_use]
    pub fn name(&self) -> &str {
        self.source.name()
    }

    /// Number of complete records returned so far
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records
    }

    /// Release the underlying source
    pub fn close(self) {
        self.source.close();
    }

    /// Read the next record, or `None` at end of stream.
    ///
    /// A record is only returned once all four lines have been read; a stream
    /// that ends part-way through a record is an error, never a partial read.
    /// Lines longer than `max_fastq_len` are capped, the overflow is consumed
    /// and discarded, and a warning is logged.
    ///
    /// # Errors
    ///
    /// - `ParseError::Framing` if the header does not start with `@` or the
    ///   separator does not start with `+`
    /// - `ParseError::IncompleteRecord` if the stream ends inside a record
    /// - `ParseError::LengthMismatch` if sequence and quality lengths differ
    /// - `ParseError::Io` if the stream cannot be read
    pub fn next_record(&mut self) -> Result<Option<FastqRecord>, ParseError> {
        if self.done {
            return Ok(None);
        }

        match self.read_record() {
            Ok(Some(rec)) => {
                self.records += 1;
                Ok(Some(rec))
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

    fn read_record(&mut self) -> Result<Option<FastqRecord>, ParseError> {
        // line 1: @id [description]
        let marker = loop {
            match self.source.next_byte()? {
                None => return Ok(None),
                Some(b'\n' | b'\r') => {}
                Some(b) => break b,
            }
        };
        if marker != b'@' {
            return Err(ParseError::Framing(format!(
                "fastq record not beginning with @ (record {} in {})",
                self.records + 1,
                self.source.name()
            )));
        }

        let max_id = self.limits.max_id_len;
        let mut id = Vec::new();
        let mut id_truncated = false;
        let terminator = loop {
            match self.source.next_byte()? {
                Some(b) if is_space(b) => break Some(b),
                Some(b) if id.len() < max_id => id.push(b),
                Some(_) => id_truncated = true,
                None => break None,
            }
        };
        let id = utf8_identifier(id, self.source.name())?;

        let header_complete = match terminator {
            Some(b'\n') => true,
            Some(_) => self.source.skip_line()?,
            None => false,
        };
        if !header_complete {
            return Err(ParseError::IncompleteRecord { id });
        }
        if id_truncated {
            warn!("Identifier {id} is truncated to {max_id}");
        }

        // line 2: sequence
        let max = self.limits.max_fastq_len;
        let sequence = self.read_capped_line(max, true)?;
        if !sequence.terminated {
            return Err(ParseError::IncompleteRecord { id });
        }

        // line 3: +[id]
        match self.source.next_byte()? {
            Some(b'+') => {}
            Some(_) => {
                return Err(ParseError::Framing(format!(
                    "Problem reading quality line for {id}"
                )))
            }
            None => return Err(ParseError::IncompleteRecord { id }),
        }
        if !self.source.skip_line()? {
            return Err(ParseError::IncompleteRecord { id });
        }

        // line 4: qualities; a missing final newline is tolerated
        match self.source.next_byte()? {
            Some(b) => self.source.push_back(b),
            None => return Err(ParseError::IncompleteRecord { id }),
        }
        let quality = self.read_capped_line(max, false)?;

        // compare what was in the file, not what survived the cap
        if sequence.seen != quality.seen {
            return Err(ParseError::LengthMismatch {
                id,
                sequence: sequence.seen,
                quality: quality.seen,
            });
        }

        if sequence.truncated || quality.truncated {
            warn!("{id} is truncated to {max}");
        }

        Ok(Some(FastqRecord {
            id,
            sequence: sequence.bytes,
            quality: quality.bytes,
            truncated: id_truncated || sequence.truncated || quality.truncated,
        }))
    }

    /// Read through the end of the current line, keeping at most `max` non-whitespace bytes
    fn read_capped_line(&mut self, max: usize, uppercase: bool) -> Result<Line, ParseError> {
        let mut line = Line {
            bytes: Vec::new(),
            seen: 0,
            truncated: false,
            terminated: false,
        };

        while let Some(b) = self.source.next_byte()? {
            if b == b'\n' {
                line.terminated = true;
                break;
            }
            if is_space(b) {
                continue;
            }
            line.seen += 1;
            if line.bytes.len() < max {
                line.bytes
                    .push(if uppercase { b.to_ascii_uppercase() } else { b });
            } else {
                line.truncated = true;
            }
        }

        Ok(line)
    }
}

impl Iterator for FastqReader {
    type Item = Result<FastqRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
