//! Date of birth and expiry extraction.
//!
//! Captured dates are kept verbatim; [`parse_document_date`] turns them
//! into calendar dates when the format is recognizable.

use chrono::NaiveDate;

use super::patterns::{
    BIRTH_DATE_PATTERNS, DATE_DAY_MONTH_YEAR, DATE_DMY, DATE_YMD, EXPIRY_DATE_PATTERNS,
};
use super::{labeled_matches, ExtractionMatch, FieldExtractor};

/// Labeled date of birth extractor. First match wins.
pub struct BirthDateExtractor;

impl BirthDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BirthDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for BirthDateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        labeled_matches(&BIRTH_DATE_PATTERNS[..], text)
    }
}

/// Labeled expiry date extractor. First match wins.
pub struct ExpiryDateExtractor;

impl ExpiryDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExpiryDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ExpiryDateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        labeled_matches(&EXPIRY_DATE_PATTERNS[..], text)
    }
}

/// Parse a date as printed on a passport.
///
/// Supports `DD/MM/YYYY` (also `.` and `-` separators, two-digit years),
/// `YYYY-MM-DD` and `DD MON YYYY` with English month names. A value that
/// is not a valid day-first date, such as `90-01-15`, is retried year
/// first.
pub fn parse_document_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim().to_uppercase();

    parse_day_first(&value)
        .or_else(|| parse_year_first(&value))
        .or_else(|| parse_month_name(&value))
}

fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let caps = DATE_DMY.captures(value)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    NaiveDate::from_ymd_opt(parse_year(&caps[3])?, month, day)
}

fn parse_year_first(value: &str) -> Option<NaiveDate> {
    let caps = DATE_YMD.captures(value)?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(parse_year(&caps[1])?, month, day)
}

fn parse_month_name(value: &str) -> Option<NaiveDate> {
    let caps = DATE_DAY_MONTH_YEAR.captures(value)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_to_number(&caps[2])?;
    NaiveDate::from_ymd_opt(parse_year(&caps[3])?, month, day)
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() == 2 {
        // Two-digit year: 00-50 is 2000s, 51-99 is 1900s
        Some(if year <= 50 { 2000 + year } else { 1900 + year })
    } else {
        Some(year)
    }
}

fn month_to_number(month: &str) -> Option<u32> {
    let prefix: String = month.chars().take(3).collect();
    let number = match prefix.as_str() {
        "JAN" => 1,
        "FEB" => 2,
        "MAR" => 3,
        "APR" => 4,
        "MAY" => 5,
        "JUN" => 6,
        "JUL" => 7,
        "AUG" => 8,
        "SEP" => 9,
        "OCT" => 10,
        "NOV" => 11,
        "DEC" => 12,
        _ => return None,
    };
    Some(number)
}
