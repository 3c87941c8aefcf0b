//! Passport data model.

use chrono::NaiveDate;
use serde::Serialize;

use crate::passport::rules::parse_document_date;

/// Placeholder stored in a field that could not be recognized.
pub const NOT_FOUND: &str = "Not found";

/// Fields recognized on a passport.
///
/// Every field holds either the captured text or the "not found"
/// sentinel. A record only exists when the name or the document number
/// was recognized. Records are only built by [`ExtractionResult::assemble`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Holder's full name.
    pub full_name: String,

    /// Passport (document) number.
    pub document_number: String,

    /// Nationality as printed.
    pub nationality: String,

    /// Date of birth as printed.
    pub date_of_birth: String,

    /// Expiry date as printed.
    pub expiry_date: String,

    /// Sentinel used for missing fields.
    #[serde(skip)]
    sentinel: String,
}

impl ExtractionResult {
    /// Assemble a record, filling missing fields with `sentinel`.
    ///
    /// Returns `None` unless the name or the document number is present.
    pub fn assemble(
        full_name: Option<String>,
        document_number: Option<String>,
        nationality: Option<String>,
        date_of_birth: Option<String>,
        expiry_date: Option<String>,
        sentinel: &str,
    ) -> Option<Self> {
        if full_name.is_none() && document_number.is_none() {
            return None;
        }

        let or_sentinel = |v: Option<String>| v.unwrap_or_else(|| sentinel.to_string());

        Some(Self {
            full_name: or_sentinel(full_name),
            document_number: or_sentinel(document_number),
            nationality: or_sentinel(nationality),
            date_of_birth: or_sentinel(date_of_birth),
            expiry_date: or_sentinel(expiry_date),
            sentinel: sentinel.to_string(),
        })
    }

    /// The sentinel this record was built with.
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    fn found<'a>(&self, value: &'a str) -> Option<&'a str> {
        (value != self.sentinel).then_some(value)
    }

    pub fn name(&self) -> Option<&str> {
        self.found(&self.full_name)
    }

    pub fn number(&self) -> Option<&str> {
        self.found(&self.document_number)
    }

    pub fn nationality(&self) -> Option<&str> {
        self.found(&self.nationality)
    }

    pub fn date_of_birth(&self) -> Option<&str> {
        self.found(&self.date_of_birth)
    }

    pub fn expiry_date(&self) -> Option<&str> {
        self.found(&self.expiry_date)
    }

    /// Number of recognized fields (0 - 5).
    pub fn found_fields(&self) -> usize {
        [
            self.name(),
            self.number(),
            self.nationality(),
            self.date_of_birth(),
            self.expiry_date(),
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }

    /// Date of birth parsed as a calendar date, when its format is known.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.date_of_birth().and_then(parse_document_date)
    }

    /// Expiry parsed as a calendar date, when its format is known.
    pub fn expiry(&self) -> Option<NaiveDate> {
        self.expiry_date().and_then(parse_document_date)
    }

    /// Whether the document had expired on `on`. `None` if the expiry is unknown.
    pub fn is_expired(&self, on: NaiveDate) -> Option<bool> {
        self.expiry().map(|expiry| expiry < on)
    }
}
