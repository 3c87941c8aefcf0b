//! WASM bindings for passport field extraction.
//!
//! The host (browser or web view) runs its own OCR and hands the
//! recognized text over; results come back as plain JS objects, or
//! `null` when nothing useful was recognized.

use wasm_bindgen::prelude::*;

use tripscan_core::{
    ExtractionResult, PassportExtractor, PassportParser, RecognizedDocument,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js(result: Option<ExtractionResult>) -> Result<JsValue, JsValue> {
    match result {
        Some(result) => serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsValue::from_str(&e.to_string())),
        None => Ok(JsValue::NULL),
    }
}

/// Extract passport data from plain recognized text.
///
/// Blocks are derived from the paragraphs of the text.
#[wasm_bindgen]
pub fn extract_passport_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(PassportParser::new().extract_from_text(text))
}

/// Extract passport data from a JSON-serialized recognized document
/// (`{"text": "...", "blocks": ["..."]}`).
#[wasm_bindgen]
pub fn extract_passport_from_json(document: &str) -> Result<JsValue, JsValue> {
    let document = RecognizedDocument::from_json(document)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(PassportParser::new().extract(&document))
}

/// Parse a date as printed on a passport into `YYYY-MM-DD`.
#[wasm_bindgen]
pub fn parse_document_date(value: &str) -> Option<String> {
    tripscan_core::passport::rules::parse_document_date(value).map(|d| d.to_string())
}

/// Accumulates OCR output and runs the extractor over it.
#[wasm_bindgen]
pub struct PassportScanner {
    text: String,
    blocks: Vec<String>,
    parser: PassportParser,
    debug: bool,
}

#[wasm_bindgen]
impl PassportScanner {
    /// Create a new scanner.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            text: String::new(),
            blocks: Vec::new(),
            parser: PassportParser::new(),
            debug: false,
        }
    }

    /// Add a recognized text block, in reading order.
    #[wasm_bindgen]
    pub fn add_block(&mut self, text: &str) {
        self.blocks.push(text.to_string());
    }

    /// Add several blocks from a JS array of strings; non-strings are skipped.
    #[wasm_bindgen]
    pub fn add_blocks(&mut self, blocks: js_sys::Array) {
        self.blocks
            .extend(blocks.iter().filter_map(|value| value.as_string()));
    }

    /// Set the full text.
    #[wasm_bindgen]
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Get the full text, falling back to the joined blocks.
    #[wasm_bindgen]
    pub fn get_text(&self) -> String {
        if self.text.is_empty() {
            self.blocks.join("\n")
        } else {
            self.text.clone()
        }
    }

    /// Use a different placeholder for missing fields.
    #[wasm_bindgen]
    pub fn set_sentinel(&mut self, sentinel: &str) {
        self.parser = self.parser.clone().with_sentinel(sentinel);
    }

    /// Log extraction provenance to the browser console.
    #[wasm_bindgen]
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Drop all text and blocks, ready for the next scan.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.text.clear();
        self.blocks.clear();
    }

    /// Extract passport data; returns `null` when nothing was recognized.
    #[wasm_bindgen]
    pub fn extract(&self) -> Result<JsValue, JsValue> {
        let document = RecognizedDocument::new(self.get_text(), self.blocks.clone());
        let report = self.parser.analyze(&document);

        if self.debug {
            let sources = serde_json::to_string(&report.sources)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            web_sys::console::log_1(&JsValue::from_str(&sources));
        }

        to_js(report.result)
    }
}

impl Default for PassportScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_extract_null_for_unrelated_text() {
        let value = extract_passport_from_text("Welcome aboard").unwrap();
        assert!(value.is_null());
    }

    #[wasm_bindgen_test]
    fn test_scanner_block_fallback() {
        let mut scanner = PassportScanner::new();
        scanner.add_block("PASSPORT NUMBER\nCD7654321");
        let value = scanner.extract().unwrap();
        assert!(value.is_object());
    }

    #[wasm_bindgen_test]
    fn test_get_text_joins_blocks() {
        let mut scanner = PassportScanner::new();
        scanner.add_block("A");
        scanner.add_block("B");
        assert_eq!(scanner.get_text(), "A\nB");

        scanner.clear();
        assert_eq!(scanner.get_text(), "");
    }

    #[wasm_bindgen_test]
    fn test_parse_document_date() {
        assert_eq!(parse_document_date("15 JAN 1990"), Some("1990-01-15".to_string()));
        assert_eq!(parse_document_date("soon"), None);
    }
}
