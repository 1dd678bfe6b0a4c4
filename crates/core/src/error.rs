//! Error types for Permudex
//!
//! Retrieval itself never fails: unknown terms, unsupported wildcards and
//! malformed queries all resolve to an empty result. The errors below cover
//! configuration loading and the fallible query-parsing surface used by
//! interactive shells to explain why a query matched nothing.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for Permudex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Permudex
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading config or document files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file is not valid TOML or has the wrong shape
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but holds an unusable value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Query string does not fit the single-operator grammar
    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),
}

/// Reasons a query string is rejected by the parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Query is empty or whitespace only
    #[error("query is empty")]
    Empty,

    /// An operator is missing one of its operands
    #[error("operator {operator} is missing an operand")]
    MissingOperand {
        /// Operator keyword as written in the grammar
        operator: &'static str,
    },

    /// More than one operator appears in the query
    #[error("only one operator is supported, found {first} and {second}")]
    MultipleOperators {
        /// First operator encountered
        first: &'static str,
        /// Second operator encountered
        second: &'static str,
    },
}
