//! Thread-shareable handle around a [`BooleanModel`]
//!
//! The model itself has no interior locking. This wrapper serializes writers
//! behind a `parking_lot::RwLock`: `add_document` holds the write lock for the
//! whole insertion (splits included), so readers never observe a tree
//! mid-split. Queries share the read lock.

use crate::model::{BooleanModel, ModelStats};
use crate::ops::DocSet;
use parking_lot::{RwLock, RwLockReadGuard};
use permudex_core::{DocId, QueryError};
use std::sync::Arc;

/// Cloneable, lock-guarded model handle
#[derive(Debug, Clone, Default)]
pub struct SharedBooleanModel {
    inner: Arc<RwLock<BooleanModel>>,
}

impl SharedBooleanModel {
    /// Wrap an existing model
    pub fn new(model: BooleanModel) -> Self {
        SharedBooleanModel {
            inner: Arc::new(RwLock::new(model)),
        }
    }

    /// Index a document under the write lock
    pub fn add_document(&self, doc_id: impl Into<DocId>, text: &str) {
        self.inner.write().add_document(doc_id, text);
    }

    /// Evaluate a query under the read lock
    pub fn boolean_query(&self, query: &str) -> DocSet {
        self.inner.read().boolean_query(query)
    }

    /// Evaluate a query under the read lock, reporting parse errors
    pub fn try_boolean_query(&self, query: &str) -> Result<DocSet, QueryError> {
        self.inner.read().try_boolean_query(query)
    }

    /// Resolve a term under the read lock
    pub fn resolve_term(&self, term: &str) -> DocSet {
        self.inner.read().resolve_term(term)
    }

    /// Size counters
    pub fn stats(&self) -> ModelStats {
        self.inner.read().stats()
    }

    /// Hold the read lock for several operations
    pub fn read(&self) -> RwLockReadGuard<'_, BooleanModel> {
        self.inner.read()
    }
}

impl From<BooleanModel> for SharedBooleanModel {
    fn from(model: BooleanModel) -> Self {
        Self::new(model)
    }
}
