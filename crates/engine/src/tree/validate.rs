//! Structural invariant checks
//!
//! Used by tests and diagnostics; the tree never calls this on its own.

use super::{NodeId, TermTree, MAX_KEYS};
use thiserror::Error;

/// A broken structural invariant, with the offending node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// Node holds no keys, or more than two
    #[error("node {node} holds {keys} keys")]
    KeyCount {
        /// Arena index of the node
        node: usize,
        /// Keys found
        keys: usize,
    },

    /// Keys within a node are not strictly increasing
    #[error("node {node} keys are not strictly increasing")]
    UnsortedKeys {
        /// Arena index of the node
        node: usize,
    },

    /// Internal node whose child count is not `keys + 1`
    #[error("node {node} has {children} children for {keys} keys")]
    ChildCount {
        /// Arena index of the node
        node: usize,
        /// Keys found
        keys: usize,
        /// Children found
        children: usize,
    },

    /// Key outside the range its position in the tree allows
    #[error("node {node} key '{key}' escapes its parent's bounds")]
    OutOfBounds {
        /// Arena index of the node
        node: usize,
        /// Offending key
        key: String,
    },

    /// Leaves at different depths
    #[error("leaf {node} at depth {depth}, expected {expected}")]
    UnevenLeaves {
        /// Arena index of the leaf
        node: usize,
        /// Depth of this leaf
        depth: usize,
        /// Depth of the first leaf seen
        expected: usize,
    },

    /// Cached counters disagree with the structure
    #[error("tree reports {reported} {what}, found {found}")]
    CounterMismatch {
        /// Which counter
        what: &'static str,
        /// Value cached on the tree
        reported: usize,
        /// Value found by walking the tree
        found: usize,
    },
}

/// Shape of a tree that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Distinct terms
    pub terms: usize,
    /// Reachable nodes
    pub nodes: usize,
    /// Leaf nodes
    pub leaves: usize,
    /// Levels from root to leaves
    pub height: usize,
}

struct Pending<'a> {
    node: NodeId,
    depth: usize,
    lower: Option<&'a str>,
    upper: Option<&'a str>,
}

impl TermTree {
    /// Walk the whole tree and check every structural invariant
    ///
    /// Checks that each node holds 1–2 strictly increasing keys (an empty
    /// root leaf is allowed only for an empty tree), that internal nodes have
    /// exactly `keys + 1` children, that every key lies between the separator
    /// keys above it, and that all leaves share one depth.
    pub fn validate(&self) -> Result<TreeStats, InvariantViolation> {
        let mut stats = TreeStats::default();
        let mut leaf_depth: Option<usize> = None;
        let mut stack = vec![Pending {
            node: self.root(),
            depth: 1,
            lower: None,
            upper: None,
        }];

        while let Some(item) = stack.pop() {
            let node = self.node(item.node);
            let index = item.node.index();
            let keys = node.entries.len();
            stats.nodes += 1;
            stats.terms += keys;

            let empty_root = keys == 0 && item.node == self.root() && node.is_leaf();
            if !empty_root && !(1..=MAX_KEYS).contains(&keys) {
                return Err(InvariantViolation::KeyCount { node: index, keys });
            }

            if node.entries.windows(2).any(|w| w[0].term >= w[1].term) {
                return Err(InvariantViolation::UnsortedKeys { node: index });
            }

            for entry in &node.entries {
                let term = entry.term.as_str();
                let above_lower = item.lower.map_or(true, |lo| term > lo);
                let below_upper = item.upper.map_or(true, |hi| term < hi);
                if !above_lower || !below_upper {
                    return Err(InvariantViolation::OutOfBounds {
                        node: index,
                        key: entry.term.clone(),
                    });
                }
            }

            if node.is_leaf() {
                stats.leaves += 1;
                match leaf_depth {
                    None => leaf_depth = Some(item.depth),
                    Some(expected) if expected != item.depth => {
                        return Err(InvariantViolation::UnevenLeaves {
                            node: index,
                            depth: item.depth,
                            expected,
                        });
                    }
                    Some(_) => {}
                }
                continue;
            }

            if node.children.len() != keys + 1 {
                return Err(InvariantViolation::ChildCount {
                    node: index,
                    keys,
                    children: node.children.len(),
                });
            }

            for (slot, &child) in node.children.iter().enumerate() {
                let lower = if slot == 0 {
                    item.lower
                } else {
                    Some(node.entries[slot - 1].term.as_str())
                };
                let upper = if slot == keys {
                    item.upper
                } else {
                    Some(node.entries[slot].term.as_str())
                };
                stack.push(Pending {
                    node: child,
                    depth: item.depth + 1,
                    lower,
                    upper,
                });
            }
        }

        stats.height = leaf_depth.unwrap_or(1);

        if stats.terms != self.len() {
            return Err(InvariantViolation::CounterMismatch {
                what: "terms",
                reported: self.len(),
                found: stats.terms,
            });
        }
        if stats.height != self.height() {
            return Err(InvariantViolation::CounterMismatch {
                what: "levels",
                reported: self.height(),
                found: stats.height,
            });
        }

        Ok(stats)
    }
}
