/// A single FASTQ read.
///
/// `sequence` and `quality` always have the same length; the reader rejects
/// records where they disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FastqRecord {
    /// Identifier (first whitespace-delimited token after `@`)
    pub id: String,

    /// Bases, upper-cased, whitespace removed
    pub sequence: Vec<u8>,

    /// Quality characters, verbatim apart from whitespace removal
    pub quality: Vec<u8>,

    /// Set when the identifier, sequence or quality line hit a length cap
    pub truncated: bool,
}

impl FastqRecord {
    pub fn new(
        id: impl Into<String>,
        sequence: impl Into<Vec<u8>>,
        quality: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
            quality: quality.into(),
            truncated: false,
        }
    }

    /// Number of bases in the read
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// R1 and R2 reads taken from the same position of two FASTQ streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedRecord {
    pub r1: FastqRecord,
    pub r2: FastqRecord,
}

impl PairedRecord {
    /// Read identifier with any trailing `/1` or `/2` mate suffix removed
    #[must_use]
    pub fn mate_stem(id: &str) -> &str {
        id.strip_suffix("/1")
            .or_else(|| id.strip_suffix("/2"))
            .unwrap_or(id)
    }

    /// True when both mates carry the same identifier stem
    #[must_use]
    pub fn ids_match(&self) -> bool {
        Self::mate_stem(&self.r1.id) == Self::mate_stem(&self.r2.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_len() {
        let rec = FastqRecord::new("r1", b"ACGT".to_vec(), b"!!!!".to_vec());
        assert_eq!(rec.len(), 4);
        assert!(!rec.is_empty());
        assert!(!rec.truncated);
    }

    #[test]
    fn test_mate_stem() {
        assert_eq!(PairedRecord::mate_stem("read7/1"), "read7");
        assert_eq!(PairedRecord::mate_stem("read7/2"), "read7");
        assert_eq!(PairedRecord::mate_stem("read7"), "read7");
        assert_eq!(PairedRecord::mate_stem("read7/3"), "read7/3");
    }

    #[test]
    fn test_ids_match() {
        let pair = PairedRecord {
            r1: FastqRecord::new("frag1/1", b"A".to_vec(), b"I".to_vec()),
            r2: FastqRecord::new("frag1/2", b"C".to_vec(), b"I".to_vec()),
        };
        assert!(pair.ids_match());

        let pair = PairedRecord {
            r1: FastqRecord::new("frag1", b"A".to_vec(), b"I".to_vec()),
            r2: FastqRecord::new("frag2", b"C".to_vec(), b"I".to_vec()),
        };
        assert!(!pair.ids_match());
    }
}
