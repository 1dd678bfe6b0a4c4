//! Boolean retrieval for Permudex
//!
//! This crate provides:
//! - Analyzer: tokenizer plus configurable stop-word normalization
//! - Query lexer and single-operator parser
//! - Set algebra over document sets
//! - BooleanModel: document store + term tree + permuterm index
//! - SharedBooleanModel: single-writer handle for use across threads
//!
//! # Usage
//!
//! ```
//! use permudex_search::BooleanModel;
//!
//! let mut model = BooleanModel::new();
//! model.add_document("Doc1", "superconductors have zero resistance");
//! model.add_document("Doc2", "a magnet near a superconductor");
//!
//! let hits = model.boolean_query("super* AND magnet");
//! assert_eq!(hits.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod model;
pub mod ops;
pub mod query;
pub mod shared;
pub mod tokenizer;

// Re-export commonly used types
pub use model::{BooleanModel, ModelStats};
pub use ops::DocSet;
pub use query::{parse_query, BinaryOp, Query};
pub use shared::SharedBooleanModel;
pub use tokenizer::{tokenize, Analyzer};
