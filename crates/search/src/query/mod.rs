//! Boolean query model
//!
//! A query is a single term (literal or wildcard), a complemented term, or
//! two terms joined by one binary operator. Parsing never looks at the
//! index; evaluation lives in [`crate::model::BooleanModel`].

pub mod lexer;
pub mod parser;

pub use parser::parse_query;

use serde::Serialize;
use std::fmt;

/// Binary set operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    /// `L1 ∩ L2`
    And,
    /// `L1 ∪ L2`
    Or,
    /// `(L1 \ L2) ∪ (L2 \ L1)`
    Xor,
    /// `L1 \ L2`
    AndNot,
    /// `L1 ∪ (U \ L2)`
    OrNot,
}

impl BinaryOp {
    /// Keyword form, as accepted by the parser
    pub fn keyword(self) -> &'static str {
        match self {
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Xor => "XOR",
            BinaryOp::AndNot => "AND NOT",
            BinaryOp::OrNot => "OR NOT",
        }
    }
}

/// Parsed query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Query {
    /// One term or wildcard pattern
    Term(String),
    /// Every known document except those matching the term
    Not(String),
    /// Two operands combined by a set operator
    Binary {
        /// Operator
        op: BinaryOp,
        /// First operand
        left: String,
        /// Second operand
        right: String,
    },
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Term(term) => write!(f, "{}", term),
            Query::Not(term) => write!(f, "NOT {}", term),
            Query::Binary { op, left, right } => {
                write!(f, "{} {} {}", left, op.keyword(), right)
            }
        }
    }
}
