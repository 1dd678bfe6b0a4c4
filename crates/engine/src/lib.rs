//! Index structures for Permudex
//!
//! This crate provides:
//! - TermTree: arena-backed 2-3 tree mapping terms to posting lists
//! - PermutermIndex: rotation index resolving wildcard patterns to terms
//!
//! Both structures are single-writer: mutation takes `&mut self` and no
//! interior locking is performed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod permuterm;
pub mod tree;

pub use permuterm::{PermutermIndex, WildcardPattern, END_MARKER};
pub use tree::{InvariantViolation, NodeId, TermTree, TreeStats};
