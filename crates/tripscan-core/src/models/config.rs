//! Configuration structures for tripscan.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripscanError};
use crate::models::passport::NOT_FOUND;

/// Main configuration for tripscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripscanConfig {
    /// Passport extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// How competing labeled name matches are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePolicy {
    /// A later match replaces the held name when it is strictly longer.
    #[default]
    Longest,
    /// The first labeled match is kept, like every other field.
    FirstMatch,
}

/// Passport extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Placeholder for fields that were not recognized.
    pub not_found: String,

    /// Resolution of competing name matches.
    pub name_policy: NamePolicy,

    /// Minimum length of a document number.
    pub number_min_len: usize,

    /// Maximum length of a document number.
    pub number_max_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            not_found: NOT_FOUND.to_string(),
            name_policy: NamePolicy::Longest,
            number_min_len: 6,
            number_max_len: 12,
        }
    }
}

impl ExtractionConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.number_min_len == 0 {
            return Err(TripscanError::Config(
                "extraction.number_min_len must be at least 1".to_string(),
            ));
        }
        if self.number_min_len > self.number_max_len {
            return Err(TripscanError::Config(format!(
                "extraction.number_min_len ({}) exceeds number_max_len ({})",
                self.number_min_len, self.number_max_len
            )));
        }
        Ok(())
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl TripscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.extraction.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = TripscanConfig::default();
        assert_eq!(config.extraction.not_found, "Not found");
        assert_eq!(config.extraction.name_policy, NamePolicy::Longest);
        assert_eq!(config.extraction.number_min_len, 6);
        assert_eq!(config.extraction.number_max_len, 12);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TripscanConfig =
            serde_json::from_str(r#"{"extraction": {"name_policy": "first_match"}}"#).unwrap();
        assert_eq!(config.extraction.name_policy, NamePolicy::FirstMatch);
        assert_eq!(config.extraction.number_max_len, 12);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = TripscanConfig::default();
        config.extraction.not_found = "N/A".to_string();
        config.save(&path).unwrap();

        assert_eq!(TripscanConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut config = ExtractionConfig::default();
        config.number_min_len = 0;
        assert!(config.validate().is_err());

        config.number_min_len = 10;
        config.number_max_len = 8;
        assert!(matches!(config.validate(), Err(TripscanError::Config(_))));
    }
}
