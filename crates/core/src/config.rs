//! Index configuration via `permudex.toml`
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock analyzer. Stop words are a per-instance value handed to the
//! tokenizer rather than a process-wide constant.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up by shells that want a local config.
pub const CONFIG_FILE_NAME: &str = "permudex.toml";

/// Stop words dropped during normalization unless configured otherwise.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "in", "is", "it", "that", "they", "can", "be", "will", "but", "such", "also",
    "have", "if", "at", "to", "as",
];

/// Tokenizer and normalizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Words excluded from the index (lowercase ASCII letters only).
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
    /// Tokens shorter than this are dropped (default: 1, keeps everything).
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
}

fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_min_token_len() -> usize {
    1
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            min_token_len: default_min_token_len(),
        }
    }
}

impl AnalyzerConfig {
    /// Analyzer that keeps every token.
    pub fn without_stop_words() -> Self {
        Self {
            stop_words: Vec::new(),
            ..Self::default()
        }
    }

    /// Check that the settings can be applied.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `min_token_len` is zero or a stop word
    /// is empty or contains anything other than lowercase ASCII letters (such a
    /// word could never match a token).
    pub fn validate(&self) -> Result<()> {
        if self.min_token_len == 0 {
            return Err(Error::InvalidConfig(
                "min_token_len must be at least 1".to_string(),
            ));
        }
        for word in &self.stop_words {
            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(Error::InvalidConfig(format!(
                    "stop word '{}' must be non-empty lowercase ASCII letters",
                    word
                )));
            }
        }
        Ok(())
    }
}

/// Top-level configuration loaded from `permudex.toml`.
///
/// # Example
///
/// ```toml
/// [analyzer]
/// stop_words = ["a", "an", "the"]
/// min_token_len = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Tokenizer settings.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl IndexConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: IndexConfig = toml::from_str(text)?;
        config.analyzer.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Permudex index configuration

[analyzer]
# Words excluded from the index. Lowercase ASCII letters only.
stop_words = ["a", "an", "the", "in", "is", "it", "that", "they", "can", "be",
              "will", "but", "such", "also", "have", "if", "at", "to", "as"]

# Tokens shorter than this many letters are dropped.
min_token_len = 1
"#
    }
}
