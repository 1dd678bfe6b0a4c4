//! Single-operator query grammar
//!
//! ```text
//! query    := operand
//!           | operand binop operand
//!           | NOT operand
//!           | operand NOT
//!           | operand NOT operand        (same as AND NOT)
//! binop    := AND | OR | XOR | AND NOT | OR NOT
//! operand  := word+
//! ```
//!
//! `AND NOT` and `OR NOT` are single compound operators. Any query with a
//! second operator is rejected rather than silently split at one of them.

use super::lexer::{lex, Token};
use super::{BinaryOp, Query};
use permudex_core::QueryError;

/// Operator as written, after fusing compound forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    And,
    Or,
    Xor,
    Not,
    AndNot,
    OrNot,
}

impl Keyword {
    fn name(self) -> &'static str {
        match self {
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Xor => "XOR",
            Keyword::Not => "NOT",
            Keyword::AndNot => "AND NOT",
            Keyword::OrNot => "OR NOT",
        }
    }
}

/// Parse a query string
pub fn parse_query(input: &str) -> Result<Query, QueryError> {
    let tokens = lex(input);
    if tokens.is_empty() {
        return Err(QueryError::Empty);
    }

    let mut left: Vec<String> = Vec::new();
    let mut right: Vec<String> = Vec::new();
    let mut keyword: Option<Keyword> = None;

    let mut iter = tokens.into_iter().peekable();
    while let Some(token) = iter.next() {
        let found = match token {
            Token::Word(word) => {
                if keyword.is_some() {
                    right.push(word);
                } else {
                    left.push(word);
                }
                continue;
            }
            Token::And | Token::Or if iter.peek() == Some(&Token::Not) => {
                iter.next();
                if token == Token::And {
                    Keyword::AndNot
                } else {
                    Keyword::OrNot
                }
            }
            Token::And => Keyword::And,
            Token::Or => Keyword::Or,
            Token::Xor => Keyword::Xor,
            Token::Not => Keyword::Not,
        };

        if let Some(first) = keyword {
            return Err(QueryError::MultipleOperators {
                first: first.name(),
                second: found.name(),
            });
        }
        keyword = Some(found);
    }

    let left = join(left);
    let right = join(right);

    let keyword = match keyword {
        None => return Ok(Query::Term(left.unwrap_or_default())),
        Some(keyword) => keyword,
    };

    let binary = match keyword {
        Keyword::And => BinaryOp::And,
        Keyword::Or => BinaryOp::Or,
        Keyword::Xor => BinaryOp::Xor,
        Keyword::AndNot => BinaryOp::AndNot,
        Keyword::OrNot => BinaryOp::OrNot,
        Keyword::Not => {
            return match (left, right) {
                (None, Some(operand)) | (Some(operand), None) => Ok(Query::Not(operand)),
                (Some(left), Some(right)) => Ok(Query::Binary {
                    op: BinaryOp::AndNot,
                    left,
                    right,
                }),
                (None, None) => Err(QueryError::MissingOperand {
                    operator: keyword.name(),
                }),
            };
        }
    };

    match (left, right) {
        (Some(left), Some(right)) => Ok(Query::Binary {
            op: binary,
            left,
            right,
        }),
        _ => Err(QueryError::MissingOperand {
            operator: keyword.name(),
        }),
    }
}

fn join(words: Vec<String>) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
