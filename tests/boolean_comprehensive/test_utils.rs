//! Test utilities for the Boolean retrieval comprehensive tests

use permudex::{BooleanModel, DocId, DocSet, TermTree};
use proptest::prelude::*;

/// First scenario document
pub const DOC1: &str = "At very low temperatures, superconductors have zero resistance, \
    but they can also repel an external magnetic field, in such a way \
    that a spinning magnet can be held in a levitated position.";

/// Second scenario document
pub const DOC2: &str = "If a small magnet is brought near a superconductor, \
    it will be repelled.";

/// Model holding the two scenario documents
pub fn scenario_model() -> BooleanModel {
    let mut model = BooleanModel::new();
    model.add_document("Doc1", DOC1);
    model.add_document("Doc2", DOC2);
    model
}

/// Build a DocSet from ids
pub fn docs(ids: &[&str]) -> DocSet {
    ids.iter().map(|id| DocId::from(*id)).collect()
}

/// Simple LCG for deterministic pseudo-random sequences
pub fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    *state
}

/// Deterministic pseudo-random lowercase word of 1..=8 letters
pub fn random_word(state: &mut u64) -> String {
    let len = 1 + (lcg_next(state) >> 33) as usize % 8;
    (0..len)
        .map(|_| (b'a' + ((lcg_next(state) >> 33) % 26) as u8) as char)
        .collect()
}

/// Leaf depths found by walking the tree through its public node accessors
pub fn leaf_depths(tree: &TermTree) -> Vec<usize> {
    let mut depths = Vec::new();
    let mut stack = vec![(tree.root(), 1usize)];
    while let Some((id, depth)) = stack.pop() {
        let children = tree.children(id);
        if children.is_empty() {
            depths.push(depth);
        } else {
            for &child in children {
                stack.push((child, depth + 1));
            }
        }
    }
    depths
}

/// Random corpus: documents of space-separated words over a small alphabet
///
/// A small alphabet keeps term overlap between documents high.
pub fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec("[a-f]{1,5}", 0..12).prop_map(|words| words.join(" ")),
        1..12,
    )
}

/// Model built from a generated corpus, ids `d0`, `d1`, ...
pub fn model_from(corpus: &[String]) -> BooleanModel {
    let mut model = BooleanModel::new();
    for (i, text) in corpus.iter().enumerate() {
        model.add_document(format!("d{}", i), text);
    }
    model
}
