//! Regex tables for passport field extraction.
//!
//! All patterns run against upper-cased text. Each table is ordered by
//! priority. Labels are word-bounded and longer labels come first in an
//! alternation, so `SURNAME` is never read as `NAME`. A label may be
//! followed by its value on the next line, but no capture class admits a
//! line break, so a value never spans lines.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Document number: captured as a whole token, length checked by the extractor
    pub static ref DOCUMENT_NUMBER_PATTERNS: [Regex; 3] = [
        Regex::new(
            r"\b(?:PASSPORT NUMBER|PASSPORT NO|DOCUMENT NUMBER|DOCUMENT NO|NUMBER|NO)\b[.:]?\s*([A-Z0-9]+)"
        ).unwrap(),
        Regex::new(
            r"\b(?:PASSEPORT|REISEPASS|PASAPORTE)\b[.:]?\s*([A-Z0-9]+)"
        ).unwrap(),
        Regex::new(
            r"\b(?:PASS|P)#\s*([A-Z0-9]+)"
        ).unwrap(),
    ];

    // Holder name
    pub static ref NAME_PATTERNS: [Regex; 2] = [
        Regex::new(
            r"\b(?:SURNAME AND GIVEN NAMES|FULL NAME|NAME)\b[.:]?\s*(\p{Lu}[\p{Lu} ,]*)"
        ).unwrap(),
        Regex::new(
            r"\b(?:SURNAME|GIVEN NAMES)\b[.:]?\s*(\p{Lu}[\p{Lu} ,]*)"
        ).unwrap(),
    ];

    /// A captured "name" that is itself label text.
    pub static ref NAME_LABEL_WORD: Regex = Regex::new(
        r"\b(?:NAMES?|SURNAME)\b"
    ).unwrap();

    // Nationality
    pub static ref NATIONALITY_PATTERNS: [Regex; 2] = [
        Regex::new(
            r"\b(?:NATIONALITY|NATIONALITÉ|NATIONALITE)\b[.:]?\s*(\p{Lu}[\p{Lu} ]*)"
        ).unwrap(),
        Regex::new(
            r"\b(?:CITIZENSHIP|CITIZEN OF)\b[.:]?\s*(\p{Lu}[\p{Lu} ]*)"
        ).unwrap(),
    ];

    // Date of birth: day first, year first, then "01 JAN 1990"
    pub static ref BIRTH_DATE_PATTERNS: [Regex; 3] = [
        Regex::new(
            r"\b(?:DATE OF BIRTH|BIRTH DATE|DOB|BIRTH)\b[.:]?\s*(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})\b"
        ).unwrap(),
        Regex::new(
            r"\b(?:DATE OF BIRTH|BIRTH DATE|DOB|BIRTH)\b[.:]?\s*(\d{2,4}[/.\-]\d{1,2}[/.\-]\d{1,2})\b"
        ).unwrap(),
        Regex::new(
            r"\b(?:BORN|BIRTH)\b[.:]?\s*(\d{1,2}[ \t]+[A-Z]{3,}[ \t]+\d{2,4})\b"
        ).unwrap(),
    ];

    // Expiry date, same shapes as the date of birth
    pub static ref EXPIRY_DATE_PATTERNS: [Regex; 3] = [
        Regex::new(
            r"\b(?:DATE OF EXPIRY|EXPIRY DATE|EXPIRATION|EXPIRY|EXPIRES|VALID UNTIL)\b[.:]?\s*(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})\b"
        ).unwrap(),
        Regex::new(
            r"\b(?:DATE OF EXPIRY|EXPIRY DATE|EXPIRATION|EXPIRY|EXPIRES|VALID UNTIL)\b[.:]?\s*(\d{2,4}[/.\-]\d{1,2}[/.\-]\d{1,2})\b"
        ).unwrap(),
        Regex::new(
            r"\b(?:EXPIRY|EXPIRES|VALID UNTIL)\b[.:]?\s*(\d{1,2}[ \t]+[A-Z]{3,}[ \t]+\d{2,4})\b"
        ).unwrap(),
    ];

    // MRZ name line: P<USASMITH<<JOHN<MICHAEL<<<<<<<<
    pub static ref MRZ_NAME_LINE: Regex = Regex::new(
        r"\bP[A-Z<]([A-Z<]{3})([A-Z]+(?:<{1,2}[A-Z]+)*)<<"
    ).unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Plain date shapes used when parsing captured values
    pub static ref DATE_DMY: Regex = Regex::new(
        r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4}|\d{2})$"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"^(\d{4}|\d{2})[/.\-](\d{1,2})[/.\-](\d{1,2})$"
    ).unwrap();

    pub static ref DATE_DAY_MONTH_YEAR: Regex = Regex::new(
        r"^(\d{1,2})\s+([A-Z]{3,})\s+(\d{4}|\d{2})$"
    ).unwrap();
}
