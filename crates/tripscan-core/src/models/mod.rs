//! Data models for passport extraction.

pub mod config;
pub mod document;
pub mod passport;

pub use config::{ExtractionConfig, NamePolicy, OutputConfig, TripscanConfig};
pub use document::RecognizedDocument;
pub use passport::{ExtractionResult, NOT_FOUND};
