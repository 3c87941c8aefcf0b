//! Name extraction from the machine-readable zone.

use super::patterns::{MRZ_NAME_LINE, WHITESPACE_RUN};
use super::{ExtractionMatch, FieldExtractor};

/// Reads the holder name from an MRZ line such as
/// `P<USASMITH<<JOHN<MICHAEL<<<<<<<<`.
///
/// Filler characters become spaces, so the example yields
/// `SMITH JOHN MICHAEL`.
pub struct MrzNameExtractor;

impl MrzNameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MrzNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MrzNameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        MRZ_NAME_LINE
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                let name = WHITESPACE_RUN
                    .replace_all(&caps[2].replace('<', " "), " ")
                    .trim()
                    .to_string();

                (!name.is_empty()).then(|| {
                    ExtractionMatch::new(name, 0, full_match.as_str())
                        .with_position(full_match.start(), full_match.end())
                })
            })
            .collect()
    }
}
