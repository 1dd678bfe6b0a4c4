//! Set algebra over document sets
//!
//! All operations return fresh sets in DocId order. `universe` is the set of
//! every known document and bounds the complement.

use crate::query::BinaryOp;
use permudex_core::DocId;
use std::collections::BTreeSet;

/// Result of resolving a term or evaluating a query
pub type DocSet = BTreeSet<DocId>;

/// `a ∩ b`
pub fn intersect(a: &DocSet, b: &DocSet) -> DocSet {
    a.intersection(b).cloned().collect()
}

/// `a ∪ b`
pub fn union(a: &DocSet, b: &DocSet) -> DocSet {
    a.union(b).cloned().collect()
}

/// `a \ b`
pub fn difference(a: &DocSet, b: &DocSet) -> DocSet {
    a.difference(b).cloned().collect()
}

/// `(a \ b) ∪ (b \ a)`
pub fn symmetric_difference(a: &DocSet, b: &DocSet) -> DocSet {
    a.symmetric_difference(b).cloned().collect()
}

/// `universe \ a`
pub fn complement(universe: &DocSet, a: &DocSet) -> DocSet {
    difference(universe, a)
}

/// Apply a binary operator to two resolved operands
pub fn apply(op: BinaryOp, left: &DocSet, right: &DocSet, universe: &DocSet) -> DocSet {
    match op {
        BinaryOp::And => intersect(left, right),
        BinaryOp::Or => union(left, right),
        BinaryOp::Xor => symmetric_difference(left, right),
        BinaryOp::AndNot => difference(left, right),
        BinaryOp::OrNot => union(left, &complement(universe, right)),
    }
}
