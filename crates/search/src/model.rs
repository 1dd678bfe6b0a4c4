//! Boolean retrieval model
//!
//! Coordinates the term tree, the permuterm index and the raw document
//! store:
//!
//! - `add_document` tokenizes, normalizes and feeds both indices
//! - `resolve_term` turns a literal or wildcard term into a document set
//! - `boolean_query` parses a single-operator query and applies set algebra
//!
//! Retrieval never fails. Unknown terms, unsupported wildcards and malformed
//! queries all yield an empty set; `try_boolean_query` exposes the parse error
//! for shells that want to report it.

use crate::ops::{self, DocSet};
use crate::query::{parse_query, Query};
use crate::tokenizer::Analyzer;
use permudex_core::{DocId, IndexConfig, PostingList, QueryError};
use permudex_engine::{PermutermIndex, TermTree};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Size counters for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelStats {
    /// Known documents
    pub documents: usize,
    /// Distinct terms in the tree
    pub terms: usize,
    /// `(rotation, term)` pairs in the permuterm index
    pub rotations: usize,
    /// Tree levels
    pub tree_height: usize,
    /// Tree nodes allocated
    pub tree_nodes: usize,
}

/// In-memory Boolean retrieval engine
///
/// # Example
///
/// ```
/// use permudex_search::BooleanModel;
///
/// let mut model = BooleanModel::new();
/// model.add_document("Doc1", "a spinning magnet can be held in a levitated position");
/// model.add_document("Doc2", "a small magnet is brought near a superconductor");
///
/// let hits = model.boolean_query("magnet AND NOT superconductor");
/// assert_eq!(hits.len(), 1);
/// assert!(hits.contains("Doc1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BooleanModel {
    tree: TermTree,
    permuterm: PermutermIndex,
    analyzer: Analyzer,
    documents: BTreeMap<DocId, String>,
    doc_ids: DocSet,
}

impl BooleanModel {
    /// Create an empty model with the default analyzer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty model using the configured analyzer
    pub fn with_config(config: &IndexConfig) -> Self {
        Self::with_analyzer(Analyzer::new(&config.analyzer))
    }

    /// Create an empty model using a prepared analyzer
    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        BooleanModel {
            analyzer,
            ..Self::default()
        }
    }

    // ========================================================================
    // Indexing
    // ========================================================================

    /// Index a document
    ///
    /// Stores the raw text (replacing any earlier text for the same id), adds
    /// the id to the universe, inserts every surviving term into the tree and
    /// registers each distinct term in the permuterm index. Re-adding an id
    /// extends its postings; nothing is ever removed.
    pub fn add_document(&mut self, doc_id: impl Into<DocId>, text: &str) {
        let doc_id = doc_id.into();
        let terms = self.analyzer.analyze(text);

        let mut new_terms = 0usize;
        for term in &terms {
            if self.tree.insert(term, doc_id.clone()) {
                new_terms += 1;
            }
        }

        let distinct: BTreeSet<&str> = terms.iter().map(String::as_str).collect();
        for term in &distinct {
            self.permuterm.add_term(term);
        }

        tracing::debug!(
            target: "permudex::search",
            doc_id = %doc_id,
            tokens = terms.len(),
            distinct = distinct.len(),
            new_terms = new_terms,
            "Indexed document"
        );

        self.documents.insert(doc_id.clone(), text.to_string());
        self.doc_ids.insert(doc_id);
    }

    // ========================================================================
    // Retrieval
    // ========================================================================

    /// Documents containing `term`
    ///
    /// A term containing `*` is expanded through the permuterm index and the
    /// postings of every matching term are unioned. Absent terms resolve to
    /// the empty set.
    pub fn resolve_term(&self, term: &str) -> DocSet {
        if term.contains(permudex_engine::permuterm::WILDCARD) {
            let mut docs = DocSet::new();
            for matched in self.permuterm.wildcard_search(term) {
                if let Some(postings) = self.tree.search(&matched) {
                    docs.extend(postings.iter().cloned());
                }
            }
            docs
        } else {
            self.tree
                .search(term)
                .map(|postings| postings.as_set().clone())
                .unwrap_or_default()
        }
    }

    /// Terms a pattern expands to (a literal term expands to itself if indexed)
    pub fn expand_term(&self, pattern: &str) -> BTreeSet<String> {
        self.permuterm.wildcard_search(pattern)
    }

    /// Evaluate a query string
    ///
    /// Malformed and empty queries yield the empty set.
    pub fn boolean_query(&self, query: &str) -> DocSet {
        match self.try_boolean_query(query) {
            Ok(docs) => docs,
            Err(e) => {
                tracing::debug!(
                    target: "permudex::search",
                    query = query,
                    error = %e,
                    "Rejected query"
                );
                DocSet::new()
            }
        }
    }

    /// Evaluate a query string, reporting why a malformed query was rejected
    pub fn try_boolean_query(&self, query: &str) -> Result<DocSet, QueryError> {
        let parsed = parse_query(query)?;
        let docs = self.evaluate(&parsed);
        tracing::debug!(
            target: "permudex::search",
            query = %parsed,
            hits = docs.len(),
            "Evaluated query"
        );
        Ok(docs)
    }

    /// Evaluate a parsed query
    pub fn evaluate(&self, query: &Query) -> DocSet {
        match query {
            Query::Term(term) => self.resolve_term(term),
            Query::Not(term) => ops::complement(&self.doc_ids, &self.resolve_term(term)),
            Query::Binary { op, left, right } => ops::apply(
                *op,
                &self.resolve_term(left),
                &self.resolve_term(right),
                &self.doc_ids,
            ),
        }
    }

    // ========================================================================
    // Accessors and diagnostics
    // ========================================================================

    /// Every known document id (the complement universe)
    pub fn doc_ids(&self) -> &DocSet {
        &self.doc_ids
    }

    /// Raw text last stored for a document
    pub fn document(&self, doc_id: &str) -> Option<&str> {
        self.documents.get(doc_id).map(String::as_str)
    }

    /// Number of known documents
    pub fn document_count(&self) -> usize {
        self.doc_ids.len()
    }

    /// The analyzer used for documents
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// The term tree
    pub fn tree(&self) -> &TermTree {
        &self.tree
    }

    /// The permuterm index
    pub fn permuterm(&self) -> &PermutermIndex {
        &self.permuterm
    }

    /// Every term with its postings, sorted by term
    pub fn dump_index(&self) -> Vec<(&str, &PostingList)> {
        self.tree.enumerate_all()
    }

    /// Every `(rotation, term)` pair, sorted by rotation
    pub fn dump_permuterm_index(&self) -> Vec<(&str, &str)> {
        self.permuterm.entries().collect()
    }

    /// Size counters
    pub fn stats(&self) -> ModelStats {
        ModelStats {
            documents: self.doc_ids.len(),
            terms: self.tree.len(),
            rotations: self.permuterm.len(),
            tree_height: self.tree.height(),
            tree_nodes: self.tree.node_count(),
        }
    }
}
