//! Permudex - in-memory Boolean retrieval
//!
//! Permudex indexes a document collection into a 2-3 tree of terms and a
//! permuterm rotation index, then answers two-operand Boolean queries
//! (AND, OR, NOT, XOR, AND NOT, OR NOT) with optional wildcard terms.
//!
//! # Quick Start
//!
//! ```
//! use permudex::BooleanModel;
//!
//! let mut model = BooleanModel::new();
//! model.add_document("Doc1", "superconductors have zero resistance");
//! model.add_document("Doc2", "a small magnet is brought near a superconductor");
//!
//! let hits = model.boolean_query("super* AND NOT magnet");
//! assert!(hits.contains("Doc1"));
//! assert!(!hits.contains("Doc2"));
//! ```
//!
//! # Architecture
//!
//! - `permudex-core`: DocId, PostingList, errors, configuration
//! - `permudex-engine`: TermTree and PermutermIndex
//! - `permudex-search`: Analyzer, query parsing, set algebra, BooleanModel
//!
//! Only the types callers need are re-exported here.

pub use permudex_core::{
    AnalyzerConfig, DocId, Error, IndexConfig, PostingList, QueryError, Result, Term,
};
pub use permudex_engine::{PermutermIndex, TermTree};
pub use permudex_search::{
    parse_query, Analyzer, BinaryOp, BooleanModel, DocSet, ModelStats, Query, SharedBooleanModel,
};
