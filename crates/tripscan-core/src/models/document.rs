//! Recognized text handed over by an OCR collaborator.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DocumentError, Result};

lazy_static! {
    /// One or more blank (whitespace-only) lines.
    static ref BLOCK_SEPARATOR: Regex = Regex::new(r"\n[ \t\r]*\n\s*").unwrap();
}

/// Output of a single OCR pass: the full transcription plus its text blocks.
///
/// Blocks keep the order in which the recognizer produced them. The
/// extractor only ever borrows a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecognizedDocument {
    /// Full recognized text.
    pub text: String,

    /// Ordered text blocks.
    #[serde(default)]
    pub blocks: Vec<String>,
}

impl RecognizedDocument {
    /// Create a document from full text and explicit blocks.
    pub fn new(text: impl Into<String>, blocks: Vec<String>) -> Self {
        Self {
            text: text.into(),
            blocks,
        }
    }

    /// Create a document from a plain transcription.
    ///
    /// Blocks are the paragraphs of the text, split on blank lines.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let blocks = BLOCK_SEPARATOR
            .split(&text.replace("\r\n", "\n"))
            .map(|b| b.trim())
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .collect();

        Self { text, blocks }
    }

    /// Create a document from blocks only; the full text is the blocks joined by newlines.
    pub fn from_blocks<I, S>(blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let blocks: Vec<String> = blocks.into_iter().map(Into::into).collect();
        Self {
            text: blocks.join("\n"),
            blocks,
        }
    }

    /// True when neither the text nor any block carries non-whitespace content.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.blocks.iter().all(|b| b.trim().is_empty())
    }

    /// Load a document from disk.
    ///
    /// `.json` files hold a serialized document; `.txt`, `.text` and files
    /// without an extension are treated as a plain transcription.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => {
                let content = std::fs::read_to_string(path)?;
                Self::from_json(&content).map_err(|e| {
                    DocumentError::Parse {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    }
                    .into()
                })
            }
            "txt" | "text" | "" => {
                let content = std::fs::read_to_string(path)?;
                let document = Self::from_text(content);
                debug!(
                    "Loaded {} with {} blocks",
                    path.display(),
                    document.blocks.len()
                );
                Ok(document)
            }
            other => Err(DocumentError::UnsupportedFormat(other.to_string()).into()),
        }
    }

    /// Parse a JSON-serialized document.
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_from_text_splits_paragraphs() {
        let doc = RecognizedDocument::from_text(
            "PASSPORT NUMBER\nCD7654321\n\n  \nNAME\nJANE DOE\n",
        );

        assert_eq!(
            doc.blocks,
            vec!["PASSPORT NUMBER\nCD7654321".to_string(), "NAME\nJANE DOE".to_string()]
        );
    }

    #[test]
    fn test_from_blocks_joins_text() {
        let doc = RecognizedDocument::from_blocks(["A", "B"]);
        assert_eq!(doc.text, "A\nB");
        assert_eq!(doc.blocks.len(), 2);
    }

    #[test]
    fn test_is_empty() {
        assert!(RecognizedDocument::default().is_empty());
        assert!(RecognizedDocument::new("  \n", vec![" ".to_string()]).is_empty());
        assert!(!RecognizedDocument::from_text("NAME").is_empty());
    }

    #[test]
    fn test_json_blocks_default_to_empty() {
        let doc = RecognizedDocument::from_json(r#"{"text": "NAME: JOHN"}"#).unwrap();
        assert_eq!(doc.text, "NAME: JOHN");
        assert!(doc.blocks.is_empty());
    }

    #[test]
    fn test_load_text_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let txt = dir.path().join("scan.txt");
        std::fs::File::create(&txt)
            .unwrap()
            .write_all(b"NAME: JOHN SMITH\n\nNATIONALITY: USA")
            .unwrap();
        let doc = RecognizedDocument::load(&txt).unwrap();
        assert_eq!(doc.blocks.len(), 2);

        let json = dir.path().join("scan.json");
        std::fs::write(&json, r#"{"text": "X", "blocks": ["X"]}"#).unwrap();
        let doc = RecognizedDocument::load(&json).unwrap();
        assert_eq!(doc, RecognizedDocument::new("X", vec!["X".to_string()]));
    }

    #[test]
    fn test_load_rejects_images() {
        let result = RecognizedDocument::load(Path::new("passport.png"));
        assert!(matches!(
            result,
            Err(crate::TripscanError::Document(DocumentError::UnsupportedFormat(_)))
        ));
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("broken.json");
        std::fs::write(&json, "{not json").unwrap();

        let result = RecognizedDocument::load(&json);
        assert!(matches!(
            result,
            Err(crate::TripscanError::Document(DocumentError::Parse { .. }))
        ));
    }
}
