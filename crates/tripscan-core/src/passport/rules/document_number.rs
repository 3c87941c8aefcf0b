//! Passport number extraction.

use super::patterns::DOCUMENT_NUMBER_PATTERNS;
use super::{labeled_matches, ExtractionMatch, FieldExtractor};

/// Labeled document number extractor.
///
/// A candidate must be an upper-case alphanumeric token whose length is
/// within the configured range.
pub struct DocumentNumberExtractor {
    min_len: usize,
    max_len: usize,
}

impl DocumentNumberExtractor {
    /// Create an extractor accepting 6 to 12 characters.
    pub fn new() -> Self {
        Self {
            min_len: 6,
            max_len: 12,
        }
    }

    /// Set the accepted length range (inclusive).
    pub fn with_length(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }

    /// Whether `candidate` looks like a document number.
    pub fn accepts(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        len >= self.min_len
            && len <= self.max_len
            && candidate
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }
}

impl Default for DocumentNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DocumentNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        labeled_matches(&DOCUMENT_NUMBER_PATTERNS[..], text)
            .into_iter()
            .filter(|m| self.accepts(&m.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_passport_no() {
        let extractor = DocumentNumberExtractor::new();
        let result = extractor.extract("PASSPORT NO: AB1234567").unwrap();
        assert_eq!(result.value, "AB1234567");
        assert_eq!(result.rule, 0);
    }

    #[test]
    fn test_extract_localized_label() {
        let extractor = DocumentNumberExtractor::new();
        let result = extractor.extract("REISEPASS C01X00T47").unwrap();
        assert_eq!(result.value, "C01X00T47");
        assert_eq!(result.rule, 1);
    }

    #[test]
    fn test_extract_hash_label() {
        let extractor = DocumentNumberExtractor::new();
        let result = extractor.extract("PASS# 987654321").unwrap();
        assert_eq!(result.value, "987654321");
        assert_eq!(result.rule, 2);
    }

    #[test]
    fn test_first_pattern_wins() {
        let extractor = DocumentNumberExtractor::new();
        let result = extractor
            .extract("PASAPORTE XK0000001\nDOCUMENT NO. ZZ9999999")
            .unwrap();
        assert_eq!(result.value, "ZZ9999999");
    }

    #[test]
    fn test_rejects_out_of_range_tokens() {
        let extractor = DocumentNumberExtractor::new();
        assert!(extractor.extract("NO: 12345").is_none());
        assert!(extractor.extract("NUMBER 1234567890123").is_none());

        let relaxed = DocumentNumberExtractor::new().with_length(4, 13);
        assert_eq!(relaxed.extract("NO: 12345").unwrap().value, "12345");
    }

    #[test]
    fn test_label_value_on_next_line() {
        let extractor = DocumentNumberExtractor::new();
        let result = extractor.extract("PASSPORT NUMBER\nCD7654321").unwrap();
        assert_eq!(result.value, "CD7654321");
        assert_eq!(result.rule, 0);

        // The token never runs on past the line it starts on
        assert!(extractor.extract("PASSPORT NO\nCD76\n54321").is_none());
    }

    #[test]
    fn test_accepts() {
        let extractor = DocumentNumberExtractor::new();
        assert!(extractor.accepts("CD7654321"));
        assert!(!extractor.accepts("CD-765432"));
        assert!(!extractor.accepts("cd7654321"));
    }
}
