use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot open {}: {source}", path.display())]
    SourceOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Byte stream does not carry the expected `>`, `@` or `+` marker
    #[error("{0}")]
    Framing(String),

    #[error("Record {id} ended before all of its lines were read")]
    IncompleteRecord { id: String },

    #[error("Identifier starting with '{prefix}' exceeds maximum length of {max}")]
    IdentifierTooLong { prefix: String, max: usize },

    #[error("Record {id} has {sequence} bases but {quality} quality values")]
    LengthMismatch {
        id: String,
        sequence: usize,
        quality: usize,
    },

    #[error("Paired reads do not match: R1 is {r1}, R2 is {r2}")]
    PairMismatch { r1: String, r2: String },
}

/// Identifier bytes as a `String`; identifiers must be valid UTF-8
pub(crate) fn utf8_identifier(bytes: Vec<u8>, source: &str) -> Result<String, ParseError> {
    String::from_utf8(bytes).map_err(|e| {
        ParseError::Framing(format!(
            "Identifier '{}' in {source} is not valid UTF-8",
            String::from_utf8_lossy(e.as_bytes())
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_identifier() {
        assert_eq!(utf8_identifier(b"chr1".to_vec(), "x.fa").unwrap(), "chr1");

        let err = utf8_identifier(vec![b'c', 0xff, b'1'], "x.fa").unwrap_err();
        assert!(matches!(err, ParseError::Framing(_)));
        assert!(err.to_string().contains("x.fa is not valid UTF-8"));
    }
}
