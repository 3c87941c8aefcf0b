//! Holder name extraction from labeled text.

use crate::models::config::NamePolicy;

use super::patterns::{NAME_LABEL_WORD, NAME_PATTERNS};
use super::{labeled_matches, ExtractionMatch, FieldExtractor};

/// Labeled name extractor.
///
/// Unlike the other fields, a name may be upgraded: with
/// [`NamePolicy::Longest`] every labeled candidate that is strictly longer
/// than the held name replaces it. This favours complete names
/// ("SURNAME AND GIVEN NAMES: ...") over short ones ("NAME: ...").
pub struct NameExtractor {
    policy: NamePolicy,
}

impl NameExtractor {
    pub fn new() -> Self {
        Self {
            policy: NamePolicy::Longest,
        }
    }

    pub fn with_policy(mut self, policy: NamePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Pick the labeled candidate that should replace `held`, if any.
    ///
    /// `held` is typically a name read from the MRZ line. A candidate only
    /// replaces it when strictly longer in characters.
    pub fn resolve(&self, held: Option<&str>, text: &str) -> Option<ExtractionMatch<String>> {
        let mut best_len = held.map(|h| h.chars().count()).unwrap_or(0);
        let mut best = None;

        for candidate in self.extract_all(text) {
            let len = candidate.value.chars().count();
            if len <= best_len {
                continue;
            }

            best_len = len;
            best = Some(candidate);

            if self.policy == NamePolicy::FirstMatch {
                break;
            }
        }

        best
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.resolve(None, text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        labeled_matches(&NAME_PATTERNS[..], text)
            .into_iter()
            .map(|mut m| {
                m.value = m
                    .value
                    .trim_end_matches(|c: char| c == ',' || c.is_whitespace())
                    .to_string();
                m
            })
            .filter(|m| !m.value.is_empty() && !NAME_LABEL_WORD.is_match(&m.value))
            .collect()
    }
}
