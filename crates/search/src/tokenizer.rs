//! Document tokenizer and normalizer
//!
//! Pipeline: lowercase → split into maximal runs of ASCII letters
//!           → drop short tokens → drop stop words
//!
//! No stemming is applied: "superconductor" and "superconductors" are
//! distinct terms.

use permudex_core::{AnalyzerConfig, Term};
use rustc_hash::FxHashSet;

/// Split text into raw tokens
///
/// - Lowercase
/// - Every character other than `a`–`z` is a separator (digits, punctuation,
///   whitespace and non-ASCII letters alike)
///
/// # Example
///
/// ```
/// use permudex_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Hello, World! test123");
/// assert_eq!(tokens, vec!["hello", "world", "test"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenizer plus the per-instance normalization settings
#[derive(Debug, Clone)]
pub struct Analyzer {
    stop_words: FxHashSet<String>,
    min_token_len: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl Analyzer {
    /// Build an analyzer from its configuration
    pub fn new(config: &AnalyzerConfig) -> Self {
        Analyzer {
            stop_words: config.stop_words.iter().cloned().collect(),
            min_token_len: config.min_token_len.max(1),
        }
    }

    /// Check if a token is a stop word
    #[inline]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Number of configured stop words
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Drop short tokens and stop words, keeping order and duplicates
    pub fn normalize(&self, tokens: Vec<String>) -> Vec<Term> {
        tokens
            .into_iter()
            .filter(|t| t.len() >= self.min_token_len)
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }

    /// Tokenize then normalize
    ///
    /// # Example
    ///
    /// ```
    /// use permudex_search::Analyzer;
    ///
    /// let terms = Analyzer::default().analyze("It will be repelled, it will!");
    /// assert_eq!(terms, vec!["repelled"]);
    /// ```
    pub fn analyze(&self, text: &str) -> Vec<Term> {
        self.normalize(tokenize(text))
    }

    /// Analyze and deduplicate, keeping first-occurrence order
    pub fn analyze_unique(&self, text: &str) -> Vec<Term> {
        let mut seen = FxHashSet::default();
        self.analyze(text)
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect()
    }
}
