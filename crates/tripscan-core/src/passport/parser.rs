//! Passport parser combining labeled rules, the MRZ line and a block scan.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::models::config::{ExtractionConfig, NamePolicy};
use crate::models::document::RecognizedDocument;
use crate::models::passport::{ExtractionResult, NOT_FOUND};

use super::rules::{
    patterns::NAME_LABEL_WORD, value_after_marker, BirthDateExtractor, DocumentNumberExtractor,
    ExpiryDateExtractor, ExtractionMatch, FieldExtractor, MrzNameExtractor, NameExtractor,
    NationalityExtractor,
};
use super::PassportExtractor;

/// Marker looked for in blocks when the name label has no inline value.
const NAME_MARKER: &str = "NAME";
/// Marker looked for in blocks when the number label has no inline value.
const NUMBER_MARKER: &str = "PASSPORT";

/// Where a field value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldSource {
    /// Inline labeled pattern, by priority index.
    Labeled { rule: usize },
    /// Machine-readable zone name line.
    Mrz,
    /// Line following a marker line, by block index.
    Block { index: usize },
    /// Not recognized.
    Missing,
}

/// Provenance of every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSources {
    pub full_name: FieldSource,
    pub document_number: FieldSource,
    pub nationality: FieldSource,
    pub date_of_birth: FieldSource,
    pub expiry_date: FieldSource,
}

/// Extraction result together with how each field was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// The extracted record, absent when neither name nor number was found.
    pub result: Option<ExtractionResult>,
    /// Provenance per field.
    pub sources: FieldSources,
    /// Fields that could not be recognized.
    pub warnings: Vec<String>,
}

/// Rule-based passport parser.
///
/// Stateless between calls: the same document always yields the same result.
#[derive(Debug, Clone)]
pub struct PassportParser {
    /// Resolution of competing name matches.
    name_policy: NamePolicy,
    /// Accepted document number length (inclusive).
    number_length: (usize, usize),
    /// Placeholder for missing fields.
    sentinel: String,
}

impl PassportParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            name_policy: NamePolicy::Longest,
            number_length: (6, 12),
            sentinel: NOT_FOUND.to_string(),
        }
    }

    /// Create a parser from configuration, rejecting invalid ranges.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new()
            .with_sentinel(config.not_found.clone())
            .with_name_policy(config.name_policy)
            .with_number_length(config.number_min_len, config.number_max_len))
    }

    /// Set the "not found" placeholder.
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    /// Set name match resolution.
    pub fn with_name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    /// Set the accepted document number length range.
    pub fn with_number_length(mut self, min_len: usize, max_len: usize) -> Self {
        self.number_length = (min_len, max_len);
        self
    }

    fn number_extractor(&self) -> DocumentNumberExtractor {
        DocumentNumberExtractor::new().with_length(self.number_length.0, self.number_length.1)
    }

    /// Run the extraction and report where each field came from.
    pub fn analyze(&self, document: &RecognizedDocument) -> ExtractionReport {
        let text = document.text.to_uppercase();
        debug!(
            "Parsing passport from {} characters and {} blocks",
            text.len(),
            document.blocks.len()
        );

        let nationality = labeled(NationalityExtractor::new().extract(&text));
        let date_of_birth = labeled(BirthDateExtractor::new().extract(&text));
        let expiry_date = labeled(ExpiryDateExtractor::new().extract(&text));

        let mut full_name = MrzNameExtractor::new()
            .extract(&text)
            .map(|m| (m.value, FieldSource::Mrz));
        if let Some((name, _)) = &full_name {
            trace!("MRZ line seeds name {:?}", name);
        }

        let numbers = self.number_extractor();
        let mut document_number = labeled(numbers.extract(&text));

        let names = NameExtractor::new().with_policy(self.name_policy);
        let held = full_name.as_ref().map(|(name, _)| name.as_str());
        if let Some(longer) = names.resolve(held, &text) {
            trace!("Labeled name {:?} replaces {:?}", longer.value, held);
            full_name = labeled(Some(longer));
        }

        if full_name.is_none() {
            full_name = value_after_marker(&document.blocks, NAME_MARKER, |candidate| {
                !candidate.is_empty() && !NAME_LABEL_WORD.is_match(candidate)
            })
            .map(from_block);
        }

        if document_number.is_none() {
            document_number =
                value_after_marker(&document.blocks, NUMBER_MARKER, |candidate| {
                    numbers.accepts(candidate)
                })
                .map(from_block);
        }

        let sources = FieldSources {
            full_name: source_of(&full_name),
            document_number: source_of(&document_number),
            nationality: source_of(&nationality),
            date_of_birth: source_of(&date_of_birth),
            expiry_date: source_of(&expiry_date),
        };

        let warnings: Vec<String> = [
            ("full name", &sources.full_name),
            ("document number", &sources.document_number),
            ("nationality", &sources.nationality),
            ("date of birth", &sources.date_of_birth),
            ("expiry date", &sources.expiry_date),
        ]
        .iter()
        .filter(|(_, source)| **source == FieldSource::Missing)
        .map(|(field, _)| format!("Could not extract {}", field))
        .collect();

        let result = ExtractionResult::assemble(
            full_name.map(|(v, _)| v),
            document_number.map(|(v, _)| v),
            nationality.map(|(v, _)| v),
            date_of_birth.map(|(v, _)| v),
            expiry_date.map(|(v, _)| v),
            &self.sentinel,
        );

        match &result {
            Some(found) => debug!("Extracted {} of 5 passport fields", found.found_fields()),
            None => debug!("No name or document number recognized"),
        }

        ExtractionReport {
            result,
            sources,
            warnings,
        }
    }
}

fn labeled(found: Option<ExtractionMatch<String>>) -> Option<(String, FieldSource)> {
    found.map(|m| (m.value, FieldSource::Labeled { rule: m.rule }))
}

fn from_block(found: ExtractionMatch<String>) -> (String, FieldSource) {
    (found.value, FieldSource::Block { index: found.rule })
}

fn source_of(field: &Option<(String, FieldSource)>) -> FieldSource {
    field
        .as_ref()
        .map(|(_, source)| *source)
        .unwrap_or(FieldSource::Missing)
}

impl Default for PassportParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PassportExtractor for PassportParser {
    fn extract(&self, document: &RecognizedDocument) -> Option<ExtractionResult> {
        self.analyze(document).result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text_only(text: &str) -> RecognizedDocument {
        RecognizedDocument::new(text, Vec::new())
    }

    #[test]
    fn test_empty_document_yields_nothing() {
        let parser = PassportParser::new();
        assert_eq!(parser.extract(&RecognizedDocument::default()), None);
        assert_eq!(parser.extract(&RecognizedDocument::new("", vec![])), None);
    }

    #[test]
    fn test_name_only() {
        let result = PassportParser::new()
            .extract(&text_only("Name: John Smith"))
            .unwrap();

        assert_eq!(result.full_name, "JOHN SMITH");
        assert_eq!(result.document_number, NOT_FOUND);
        assert_eq!(result.nationality, NOT_FOUND);
    }

    #[test]
    fn test_number_and_name() {
        let result = PassportParser::new()
            .extract(&text_only("PASSPORT NO: AB1234567\nNAME: JANE DOE"))
            .unwrap();

        assert_eq!(result.document_number, "AB1234567");
        assert_eq!(result.full_name, "JANE DOE");
    }

    #[test]
    fn test_longer_name_wins() {
        let text = "NAME: JOHN\nSURNAME AND GIVEN NAMES: JOHN MICHAEL SMITH";
        let result = PassportParser::new().extract(&text_only(text)).unwrap();
        assert_eq!(result.full_name, "JOHN MICHAEL SMITH");

        let reversed = "SURNAME AND GIVEN NAMES: JOHN MICHAEL SMITH\nNAME: JOHN";
        let result = PassportParser::new().extract(&text_only(reversed)).unwrap();
        assert_eq!(result.full_name, "JOHN MICHAEL SMITH");
    }

    #[test]
    fn test_first_match_name_policy() {
        let text = "NAME: JOHN\nSURNAME AND GIVEN NAMES: JOHN MICHAEL SMITH";
        let result = PassportParser::new()
            .with_name_policy(NamePolicy::FirstMatch)
            .extract(&text_only(text))
            .unwrap();
        assert_eq!(result.full_name, "JOHN");
    }

    #[test]
    fn test_label_and_value_in_separate_blocks() {
        let text = "PASSPORT NO\nAB1234567\nNATIONALITY\nCANADIAN";
        let blocks = text.lines().map(str::to_string).collect();
        let report = PassportParser::new().analyze(&RecognizedDocument::new(text, blocks));
        let result = report.result.unwrap();

        assert_eq!(result.document_number, "AB1234567");
        assert_eq!(result.nationality, "CANADIAN");
        assert_eq!(result.full_name, NOT_FOUND);
        assert_eq!(report.sources.document_number, FieldSource::Labeled { rule: 0 });
        assert_eq!(report.sources.nationality, FieldSource::Labeled { rule: 0 });
    }

    #[test]
    fn test_block_fallback_for_number() {
        let block = "PASSPORT / PASSAPORTO\nCD7654321".to_string();
        let doc = RecognizedDocument::new(block.clone(), vec![block]);

        let report = PassportParser::new().analyze(&doc);
        let result = report.result.unwrap();

        assert_eq!(result.document_number, "CD7654321");
        assert_eq!(result.full_name, NOT_FOUND);
        assert_eq!(report.sources.document_number, FieldSource::Block { index: 0 });
    }

    #[test]
    fn test_block_fallback_rejects_bad_number() {
        let doc = RecognizedDocument::from_text("PASSPORT NUMBER\nCD-76");
        assert_eq!(PassportParser::new().extract(&doc), None);
    }

    #[test]
    fn test_block_fallback_for_name() {
        let doc = RecognizedDocument::new(
            "",
            vec![
                "UNITED KINGDOM".to_string(),
                "Surname\nGiven names\nMaria Lopez".to_string(),
            ],
        );

        let report = PassportParser::new().analyze(&doc);
        assert_eq!(report.result.unwrap().full_name, "MARIA LOPEZ");
        assert_eq!(report.sources.full_name, FieldSource::Block { index: 1 });
    }

    #[test]
    fn test_unrelated_text_yields_nothing() {
        let doc = RecognizedDocument::from_text(
            "Welcome aboard\nFlight 221 to Lisbon\n\nGate 12 boarding at 10:45",
        );
        assert_eq!(PassportParser::new().extract(&doc), None);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = RecognizedDocument::from_text(
            "P<USASMITH<<JOHN<MICHAEL<<<<<<<<<<<<<<<<<<<<<<\nNATIONALITY: USA\nDOB: 01/01/1980",
        );
        let parser = PassportParser::new();
        assert_eq!(parser.analyze(&doc), parser.analyze(&doc));
    }

    #[test]
    fn test_mrz_seeds_name() {
        let text = "P<USASMITH<<JOHN<MICHAEL<<<<<<<<<<<<<<<<<<<<<<\n\
                    1234567890USA8001015M2501012<<<<<<<<<<<<<<00";
        let report = PassportParser::new().analyze(&text_only(text));

        assert_eq!(report.result.unwrap().full_name, "SMITH JOHN MICHAEL");
        assert_eq!(report.sources.full_name, FieldSource::Mrz);
    }

    #[test]
    fn test_longer_label_overrides_mrz() {
        let text = "P<GBRDOE<<JANE<<<<<<<<<<<<\nFULL NAME: JANE ELIZABETH DOE";
        let result = PassportParser::new().extract(&text_only(text)).unwrap();
        assert_eq!(result.full_name, "JANE ELIZABETH DOE");

        let text = "P<GBRDOE<<JANE<<<<<<<<<<<<\nNAME: JANE";
        let result = PassportParser::new().extract(&text_only(text)).unwrap();
        assert_eq!(result.full_name, "DOE JANE");
    }

    #[test]
    fn test_full_data_page() {
        let text = "\
            PASSPORT\n\
            Passport No: X12345678\n\
            Surname and given names: Garcia Ana\n\
            Nationality: Spanish\n\
            Date of birth: 04/07/1985\n\
            Date of expiry: 2031-03-12\n";
        let report = PassportParser::new().analyze(&RecognizedDocument::from_text(text));
        let result = report.result.unwrap();

        assert_eq!(result.document_number, "X12345678");
        assert_eq!(result.full_name, "GARCIA ANA");
        assert_eq!(result.nationality, "SPANISH");
        assert_eq!(result.date_of_birth, "04/07/1985");
        assert_eq!(result.expiry_date, "2031-03-12");
        assert!(report.warnings.is_empty());
        assert_eq!(report.sources.expiry_date, FieldSource::Labeled { rule: 1 });
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let report = PassportParser::new().analyze(&text_only("NAME: JOHN SMITH"));
        assert_eq!(
            report.warnings,
            vec![
                "Could not extract document number".to_string(),
                "Could not extract nationality".to_string(),
                "Could not extract date of birth".to_string(),
                "Could not extract expiry date".to_string(),
            ]
        );
    }

    #[test]
    fn test_custom_sentinel_and_config() {
        let mut config = ExtractionConfig::default();
        config.not_found = "-".to_string();
        let parser = PassportParser::from_config(&config).unwrap();

        let result = parser.extract(&text_only("NAME: JOHN SMITH")).unwrap();
        assert_eq!(result.document_number, "-");
        assert_eq!(result.number(), None);

        config.number_min_len = 0;
        assert!(PassportParser::from_config(&config).is_err());
    }

    #[test]
    fn test_extract_from_text() {
        let result = PassportParser::new()
            .extract_from_text("passport number\nCD7654321")
            .unwrap();
        assert_eq!(result.document_number, "CD7654321");
    }
}
