//! Nationality extraction.

use super::patterns::NATIONALITY_PATTERNS;
use super::{labeled_matches, ExtractionMatch, FieldExtractor};

/// Labeled nationality extractor. First match wins.
pub struct NationalityExtractor;

impl NationalityExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NationalityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NationalityExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        labeled_matches(&NATIONALITY_PATTERNS[..], text)
    }
}
