//! Lexer for Boolean query strings
//!
//! Splits on whitespace and classifies each word. Operator keywords are
//! matched case-insensitively as whole words; everything else is a term word,
//! lowercased so it can be compared against index terms.

/// Token types for query parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A term or wildcard pattern word
    Word(String),
    /// AND operator
    And,
    /// OR operator
    Or,
    /// NOT operator
    Not,
    /// XOR operator
    Xor,
}

impl Token {
    fn classify(word: &str) -> Token {
        if word.eq_ignore_ascii_case("and") {
            Token::And
        } else if word.eq_ignore_ascii_case("or") {
            Token::Or
        } else if word.eq_ignore_ascii_case("not") {
            Token::Not
        } else if word.eq_ignore_ascii_case("xor") {
            Token::Xor
        } else {
            Token::Word(word.to_lowercase())
        }
    }
}

/// Tokenize a query string
///
/// # Example
///
/// ```
/// use permudex_search::query::lexer::{lex, Token};
///
/// let tokens = lex("Super* and NOT magnet");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Word("super*".into()),
///         Token::And,
///         Token::Not,
///         Token::Word("magnet".into()),
///     ]
/// );
/// ```
pub fn lex(input: &str) -> Vec<Token> {
    input.split_whitespace().map(Token::classify).collect()
}
