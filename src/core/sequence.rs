use serde::Serialize;

/// A single FASTA record: identifier plus concatenated, upper-cased bases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Identifier (first whitespace-delimited token after `>`)
    pub id: String,

    /// Bases with whitespace removed and ASCII letters upper-cased
    pub bases: Vec<u8>,

    /// Set when the bases were capped at the configured maximum length
    pub truncated: bool,
}

impl Sequence {
    pub fn new(id: impl Into<String>, bases: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            bases: bases.into(),
            truncated: false,
        }
    }

    /// Number of bases stored
    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Lowercase hex MD5 of the stored bases.
    ///
    /// Bases are already upper-cased during the scan, so this matches the
    /// usual reference-sequence checksum convention.
    #[must_use]
    pub fn md5(&self) -> String {
        format!("{:x}", md5::compute(&self.bases))
    }

    /// Condensed view used for reporting
    #[must_use]
    pub fn summary(&self, with_md5: bool) -> SequenceSummary {
        SequenceSummary {
            id: self.id.clone(),
            length: self.len() as u64,
            md5: with_md5.then(|| self.md5()),
            truncated: self.truncated,
        }
    }
}

/// Identifier, length and optional checksum of a [`Sequence`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceSummary {
    pub id: String,
    pub length: u64,

    /// Lowercase hex, 32 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_tracks_bases() {
        let seq = Sequence::new("chr1", b"ACGTN".to_vec());
        assert_eq!(seq.len(), 5);
        assert!(!seq.is_empty());
        assert!(Sequence::new("empty", Vec::new()).is_empty());
    }

    #[test]
    fn test_md5() {
        // "ACGT" -> f1f8f4bf413b16ad135722aa4591043e
        let seq = Sequence::new("chr1", b"ACGT".to_vec());
        assert_eq!(seq.md5(), "f1f8f4bf413b16ad135722aa4591043e");
    }

    #[test]
    fn test_summary() {
        let seq = Sequence::new("chr1", b"ACGT".to_vec());

        let summary = seq.summary(false);
        assert_eq!(summary.id, "chr1");
        assert_eq!(summary.length, 4);
        assert!(summary.md5.is_none());

        let summary = seq.summary(true);
        assert_eq!(
            summary.md5.as_deref(),
            Some("f1f8f4bf413b16ad135722aa4591043e")
        );
    }

    #[test]
    fn test_summary_json_skips_defaults() {
        let json = serde_json::to_string(&Sequence::new("chrM", b"AC".to_vec()).summary(false))
            .unwrap();
        assert_eq!(json, r#"{"id":"chrM","length":2}"#);
    }
}
