//! Tier 1: Tree Invariants
//!
//! After any insertion sequence the term tree stays a valid 2-3 tree:
//! every leaf at the same depth, every internal node with one more child
//! than keys, and an in-order walk that is strictly ascending.

use super::test_utils::*;
use permudex::{DocId, TermTree};
use proptest::prelude::*;

fn assert_structure(tree: &TermTree) {
    let stats = tree.validate().expect("tree invariants hold");
    assert_eq!(stats.terms, tree.len());
    assert_eq!(stats.height, tree.height());

    let depths = leaf_depths(tree);
    assert!(
        depths.iter().all(|&d| d == tree.height()),
        "leaves at uneven depths: {:?}",
        depths
    );

    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        let keys: Vec<&str> = tree.keys(id).collect();
        let children = tree.children(id);
        assert!((1..=2).contains(&keys.len()) || tree.is_empty());
        assert!(children.is_empty() || children.len() == keys.len() + 1);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        stack.extend_from_slice(children);
    }

    let terms: Vec<&str> = tree.iter().map(|(t, _)| t).collect();
    assert!(terms.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(terms.len(), tree.len());
}

// ============================================================================
// Deterministic sequences
// ============================================================================

#[test]
fn tier1_ascending_insertions() {
    let mut tree = TermTree::new();
    for i in 0..500 {
        tree.insert(&format!("term{:04}", i), DocId::from("d"));
        if i % 50 == 0 {
            assert_structure(&tree);
        }
    }
    assert_structure(&tree);
    assert_eq!(tree.len(), 500);
}

#[test]
fn tier1_descending_insertions() {
    let mut tree = TermTree::new();
    for i in (0..500).rev() {
        tree.insert(&format!("term{:04}", i), DocId::from("d"));
    }
    assert_structure(&tree);
    assert_eq!(tree.len(), 500);
}

#[test]
fn tier1_pseudo_random_insertions() {
    let mut tree = TermTree::new();
    let mut state = 42u64;
    let mut distinct = std::collections::BTreeSet::new();
    for i in 0..2000 {
        let word = random_word(&mut state);
        tree.insert(&word, DocId::from(format!("d{}", i % 17)));
        distinct.insert(word);
    }
    assert_structure(&tree);
    assert_eq!(tree.len(), distinct.len());
}

#[test]
fn tier1_height_is_logarithmic() {
    let mut tree = TermTree::new();
    for i in 0..4096 {
        tree.insert(&format!("k{:05}", i), DocId::from("d"));
    }
    // A 2-3 tree of n keys has height at most log2(n + 1)
    assert!(tree.height() <= 13, "height {} too large", tree.height());
    assert!(tree.height() >= 8, "height {} too small", tree.height());
}

#[test]
fn tier1_model_tree_is_valid() {
    let model = scenario_model();
    assert_structure(model.tree());
    assert_eq!(model.stats().terms, model.tree().len());
}

#[test]
fn tier1_empty_tree() {
    let tree = TermTree::new();
    assert!(tree.is_empty());
    assert!(tree.validate().is_ok());
    assert_eq!(tree.iter().count(), 0);
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #[test]
    fn tier1_any_corpus_keeps_tree_valid(corpus in corpus_strategy()) {
        let model = model_from(&corpus);
        let tree = model.tree();
        prop_assert!(tree.validate().is_ok());
        let depths = leaf_depths(tree);
        prop_assert!(depths.iter().all(|&d| d == tree.height()));
    }

    #[test]
    fn tier1_repeated_term_keeps_single_key(term in "[a-z]{1,8}", copies in 1usize..20) {
        let mut tree = TermTree::new();
        for i in 0..copies {
            tree.insert(&term, DocId::from(format!("d{}", i % 3)));
        }
        prop_assert_eq!(tree.len(), 1);
        prop_assert_eq!(tree.search(&term).map(|p| p.len()), Some(copies.min(3)));
    }
}
