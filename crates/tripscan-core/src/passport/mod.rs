//! Passport field extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionReport, FieldSource, FieldSources, PassportParser};

use crate::models::document::RecognizedDocument;
use crate::models::passport::ExtractionResult;

/// Trait for passport field extractors.
///
/// Extraction never fails; `None` means nothing useful was recognized and
/// the caller should ask for a fresh scan.
pub trait PassportExtractor {
    /// Extract passport data from an OCR result.
    fn extract(&self, document: &RecognizedDocument) -> Option<ExtractionResult>;

    /// Extract passport data from plain text.
    fn extract_from_text(&self, text: &str) -> Option<ExtractionResult> {
        self.extract(&RecognizedDocument::from_text(text))
    }
}
