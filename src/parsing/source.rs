//! Byte-at-a-time input over plain or gzip-compressed files.
//!
//! Compression is chosen by file name alone: a path whose last three
//! characters are `.gz` is decompressed, anything else is read as-is.
//! The check is case-sensitive and never looks at the file contents.

use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::parsing::error::ParseError;

/// Returns true iff the path ends in `.gz`
#[must_use]
pub fn is_gz(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".gz")
}

/// A readable stream with a single byte of lookahead.
///
/// The underlying handle is owned exclusively and is released as soon as
/// the stream is exhausted, on [`close`](Self::close), or on drop.
pub struct ByteSource {
    name: String,
    reader: Option<Box<dyn BufRead>>,
    pending: Option<u8>,
}

impl ByteSource {
    /// Open a file, decompressing it when the name ends in `.gz`.
    ///
    /// The first block is read eagerly so that an unreadable file or a
    /// corrupt gzip header is reported here rather than on the first record.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::SourceOpenFailed` if the file cannot be opened or
    /// its first block cannot be read or decompressed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let open_failed = |source: io::Error| ParseError::SourceOpenFailed {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_failed)?;
        let gz = is_gz(path);
        let mut reader: Box<dyn BufRead> = if gz {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        reader.fill_buf().map_err(open_failed)?;

        debug!("Opened {} (gzip: {gz})", path.display());

        Ok(Self {
            name: path.display().to_string(),
            reader: Some(reader),
            pending: None,
        })
    }

    /// Wrap an already-open reader, e.g. stdin or an in-memory buffer
    pub fn from_reader(name: impl Into<String>, reader: impl Read + 'static) -> Self {
        Self {
            name: name.into(),
            reader: Some(Box::new(BufReader::new(reader))),
            pending: None,
        }
    }

    /// Name of the file (or label) this source reads from
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Next byte, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Propagates read and decompression errors from the underlying stream.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending.take() {
            return Ok(Some(byte));
        }

        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        let byte = loop {
            match reader.fill_buf() {
                Ok(available) => break available.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        };

        match byte {
            Some(b) => {
                reader.consume(1);
                Ok(Some(b))
            }
            None => {
                self.release();
                Ok(None)
            }
        }
    }

    /// Return one byte to the stream; the next [`next_byte`](Self::next_byte) yields it.
    ///
    /// Only one byte of lookahead is held; pushing back twice without an
    /// intervening read is a logic error.
    pub fn push_back(&mut self, byte: u8) {
        debug_assert!(
            self.pending.is_none(),
            "push_back called twice without a read"
        );
        self.pending = Some(byte);
    }

    /// Consume bytes through the next `\n`.
    ///
    /// Returns `false` if the stream ended before a newline was found.
    ///
    /// # Errors
    ///
    /// Propagates read and decompression errors from the underlying stream.
    pub fn skip_line(&mut self) -> io::Result<bool> {
        if let Some(byte) = self.pending.take() {
            if byte == b'\n' {
                return Ok(true);
            }
        }

        loop {
            let Some(reader) = self.reader.as_mut() else {
                return Ok(false);
            };

            let (found, used) = {
                let available = match reader.fill_buf() {
                    Ok(available) => available,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                match available.iter().position(|&b| b == b'\n') {
                    Some(i) => (true, i + 1),
                    None => (false, available.len()),
                }
            };

            if used == 0 {
                self.release();
                return Ok(false);
            }

            reader.consume(used);
            if found {
                return Ok(true);
            }
        }
    }

    /// Release the underlying handle
    pub fn close(mut self) {
        if self.reader.is_some() {
            self.release();
        }
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            debug!("Released {}", self.name);
        }
    }
}

impl std::fmt::Debug for ByteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteSource")
            .field("name", &self.name)
            .field("open", &self.reader.is_some())
            .field("pending", &self.pending)
            .finish()
    }
}
