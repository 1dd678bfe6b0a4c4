//! Core types for Permudex
//!
//! This crate defines the foundational types shared by the index and query layers:
//! - DocId: Opaque document identifier
//! - Term: Normalized index term
//! - PostingList: Ordered, duplicate-free set of DocIds for one term
//! - Error / QueryError: Error type hierarchy
//! - IndexConfig / AnalyzerConfig: Per-instance configuration (stop words, token length)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{AnalyzerConfig, IndexConfig, CONFIG_FILE_NAME, DEFAULT_STOP_WORDS};
pub use error::{Error, QueryError, Result};
pub use types::{DocId, PostingList, Term};
