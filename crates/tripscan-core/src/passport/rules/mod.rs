//! Rule-based field extractors for passports.

pub mod blocks;
pub mod dates;
pub mod document_number;
pub mod mrz;
pub mod name;
pub mod nationality;
pub mod patterns;

pub use blocks::value_after_marker;
pub use dates::{parse_document_date, BirthDateExtractor, ExpiryDateExtractor};
pub use document_number::DocumentNumberExtractor;
pub use mrz::MrzNameExtractor;
pub use name::NameExtractor;
pub use nationality::NationalityExtractor;

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field, in priority order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A single field match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Index of the pattern that produced the match (0 = highest priority).
    pub rule: usize,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, rule: usize, source: impl Into<String>) -> Self {
        Self {
            value,
            rule,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Every capture of every pattern, pattern order first, then text order.
///
/// The first capture group is trimmed; empty captures are dropped.
pub(crate) fn labeled_matches(patterns: &[Regex], text: &str) -> Vec<ExtractionMatch<String>> {
    let mut results = Vec::new();

    for (rule, pattern) in patterns.iter().enumerate() {
        for caps in pattern.captures_iter(text) {
            let (Some(full_match), Some(value)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            let value = value.as_str().trim();
            if value.is_empty() {
                continue;
            }

            results.push(
                ExtractionMatch::new(value.to_string(), rule, full_match.as_str())
                    .with_position(full_match.start(), full_match.end()),
            );
        }
    }

    results
}
