//! In-order traversal with an explicit stack

use super::{NodeId, TermTree};
use permudex_core::PostingList;
use smallvec::SmallVec;

/// Position inside one node: the next entry to yield.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    next: usize,
}

/// In-order iterator over `(term, postings)` pairs
///
/// The stack holds one frame per level, so memory is bounded by the tree
/// height.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    tree: &'a TermTree,
    stack: SmallVec<[Frame; 16]>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(tree: &'a TermTree) -> Self {
        let mut iter = Iter {
            tree,
            stack: SmallVec::new(),
        };
        iter.push_left_spine(tree.root());
        iter
    }

    /// Position the iterator on the first term `>= lower`.
    ///
    /// At every level, entries smaller than `lower` are skipped together with
    /// the children to their left.
    pub(super) fn seek(tree: &'a TermTree, lower: &str) -> Self {
        let mut iter = Iter {
            tree,
            stack: SmallVec::new(),
        };
        let mut current = tree.root();
        loop {
            let node = tree.node(current);
            let pos = node.entries.partition_point(|e| e.term.as_str() < lower);
            iter.stack.push(Frame {
                node: current,
                next: pos,
            });
            if node.is_leaf() {
                break;
            }
            current = node.children[pos];
        }
        iter
    }

    fn push_left_spine(&mut self, mut id: NodeId) {
        loop {
            self.stack.push(Frame { node: id, next: 0 });
            let node = self.tree.node(id);
            if node.is_leaf() {
                break;
            }
            id = node.children[0];
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a PostingList);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(frame) = self.stack.last_mut() {
            let node = tree.node(frame.node);
            if frame.next < node.entries.len() {
                let slot = frame.next;
                frame.next += 1;
                if !node.is_leaf() {
                    self.push_left_spine(node.children[slot + 1]);
                }
                let entry = &node.entries[slot];
                return Some((entry.term.as_str(), &entry.postings));
            }
            self.stack.pop();
        }
        None
    }
}
