//! Core types for Permudex
//!
//! This module defines the foundational types:
//! - DocId: Opaque identifier of an indexed document
//! - Term: A normalized token stored as an index key
//! - PostingList: The set of documents containing one term

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// A normalized index term (lowercase ASCII letters, not a stop word).
pub type Term = String;

/// Opaque document identifier
///
/// A DocId carries no structure beyond string equality and ordering. Ordering
/// matches `str` ordering, so sets of DocIds can be probed with `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    /// Create a DocId from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for DocId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Documents containing a term
///
/// Insertion is idempotent: adding a DocId that is already listed leaves the
/// list unchanged. Iteration is in DocId order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingList {
    docs: BTreeSet<DocId>,
}

impl PostingList {
    /// Create a new empty posting list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a posting list holding a single document
    pub fn single(doc_id: DocId) -> Self {
        let mut list = Self::new();
        list.insert(doc_id);
        list
    }

    /// Add a document; returns false if it was already listed
    pub fn insert(&mut self, doc_id: DocId) -> bool {
        self.docs.insert(doc_id)
    }

    /// Check whether a document is listed
    pub fn contains(&self, doc_id: &str) -> bool {
        self.docs.contains(doc_id)
    }

    /// Number of documents containing this term
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if posting list is empty
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate documents in order
    pub fn iter(&self) -> btree_set::Iter<'_, DocId> {
        self.docs.iter()
    }

    /// Borrow the underlying set
    pub fn as_set(&self) -> &BTreeSet<DocId> {
        &self.docs
    }
}

impl From<BTreeSet<DocId>> for PostingList {
    fn from(docs: BTreeSet<DocId>) -> Self {
        Self { docs }
    }
}

impl FromIterator<DocId> for PostingList {
    fn from_iter<I: IntoIterator<Item = DocId>>(iter: I) -> Self {
        Self {
            docs: iter.into_iter().collect(),
        }
    }
}

impl Extend<DocId> for PostingList {
    fn extend<I: IntoIterator<Item = DocId>>(&mut self, iter: I) {
        self.docs.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = &'a DocId;
    type IntoIter = btree_set::Iter<'a, DocId>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

impl IntoIterator for PostingList {
    type Item = DocId;
    type IntoIter = btree_set::IntoIter<DocId>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.into_iter()
    }
}
