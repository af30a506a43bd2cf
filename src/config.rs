//! Configuration for spell checking.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::spelling::corpus::CorpusFormat;

/// Default edit budget per query.
pub const DEFAULT_MAX_EDITS: usize = 2;

/// Default number of suggestions per misspelled query.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Default upper bound accepted for the edit budget.
pub const DEFAULT_MAX_EDIT_CEILING: usize = 3;

/// Settings shared by the CLI and the batch checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellConfig {
    /// Edits allowed between a query and a suggestion.
    pub max_edits: usize,

    /// Suggestions returned for a misspelled query.
    pub max_suggestions: usize,

    /// Largest edit budget a caller may request.
    /// Search cost grows steeply with the budget.
    pub max_edit_ceiling: usize,

    /// Worker threads for batch checking.
    /// If None, uses the number of CPU cores.
    pub threads: Option<usize>,

    /// How corpus files are split into words.
    pub corpus_format: CorpusFormat,
}

impl Default for SpellConfig {
    fn default() -> Self {
        SpellConfig {
            max_edits: DEFAULT_MAX_EDITS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_edit_ceiling: DEFAULT_MAX_EDIT_CEILING,
            threads: None,
            corpus_format: CorpusFormat::Lines,
        }
    }
}

impl SpellConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SpellConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values against each other.
    pub fn validate(&self) -> Result<()> {
        if self.max_edits > self.max_edit_ceiling {
            return Err(SpellError::config(format!(
                "max_edits {} exceeds max_edit_ceiling {}",
                self.max_edits, self.max_edit_ceiling
            )));
        }
        if self.threads == Some(0) {
            return Err(SpellError::config("threads must be at least 1"));
        }
        Ok(())
    }

    /// Worker threads to use for batch checking.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SpellConfig::default();
        assert_eq!(config.max_edits, 2);
        assert_eq!(config.max_suggestions, 3);
        assert!(config.validate().is_ok());
        assert!(config.effective_threads() >= 1);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "max_suggestions": 5, "corpus_format": "text" }}"#).unwrap();
        file.flush().unwrap();

        let config = SpellConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.max_edits, DEFAULT_MAX_EDITS);
        assert_eq!(config.corpus_format, CorpusFormat::Text);
    }

    #[test]
    fn test_rejects_budget_over_ceiling() {
        let config = SpellConfig {
            max_edits: 4,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SpellError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_threads() {
        let config = SpellConfig {
            threads: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        file.flush().unwrap();

        let result = SpellConfig::load_from_file(file.path());
        assert!(matches!(result, Err(SpellError::Json(_))));
    }
}
