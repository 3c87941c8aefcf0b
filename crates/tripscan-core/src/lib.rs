//! Core library for passport field extraction.
//!
//! This crate provides:
//! - The recognized-document model handed over by an OCR collaborator
//! - Rule-based passport field extraction (name, number, nationality, dates)
//! - A machine-readable zone name reader and a block scan fallback
//! - JSON configuration for the extraction pipeline

pub mod error;
pub mod models;
pub mod passport;

pub use error::{DocumentError, Result, TripscanError};
pub use models::config::{ExtractionConfig, NamePolicy, TripscanConfig};
pub use models::document::RecognizedDocument;
pub use models::passport::{ExtractionResult, NOT_FOUND};
pub use passport::{ExtractionReport, FieldSource, PassportExtractor, PassportParser};
