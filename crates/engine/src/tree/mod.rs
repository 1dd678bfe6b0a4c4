//! 2-3 tree term index
//!
//! Maps each term to its posting list. Every node holds one or two keys and
//! is either a leaf or has exactly `keys + 1` children; all leaves sit at the
//! same depth.
//!
//! ## Storage
//!
//! Nodes live in an append-only arena (`Vec<Node>`) and refer to their
//! children by `NodeId`. Nothing is ever removed, so ids stay valid for the
//! lifetime of the tree. Search, insertion and iteration walk the tree with
//! explicit stacks instead of recursion.
//!
//! ## Insertion
//!
//! Standard order-3 B-tree discipline:
//! 1. Descend to the leaf that should hold the term, remembering the path
//! 2. Insert the entry in sorted position
//! 3. If the node now holds three entries, keep the smallest in place,
//!    move the largest (and, for internal nodes, the upper two children) to a
//!    new right sibling and promote the median
//! 4. The median lands in the parent at its sorted position `p`; the new
//!    sibling becomes child `p + 1`. Repeat upward while parents overflow
//! 5. A root overflow allocates a new root: the only place height grows

mod iter;
mod validate;

pub use iter::Iter;
pub use validate::{InvariantViolation, TreeStats};

use permudex_core::{DocId, PostingList, Term};
use smallvec::{smallvec, SmallVec};

/// Maximum keys a node holds between insertions.
pub const MAX_KEYS: usize = 2;

/// Handle of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Key and payload stored in a node.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) term: Term,
    pub(crate) postings: PostingList,
}

impl Entry {
    fn new(term: &str, doc_id: DocId) -> Self {
        Entry {
            term: term.to_string(),
            postings: PostingList::single(doc_id),
        }
    }
}

/// One node of the tree.
///
/// Holds up to three entries transiently (just before a split) and up to four
/// children, so both fit inline.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub(crate) entries: SmallVec<[Entry; 3]>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// `Ok(i)` if `term` is key `i`, otherwise `Err(i)` with the child slot
    /// whose key range covers `term`.
    fn locate(&self, term: &str) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| entry.term.as_str().cmp(term))
    }
}

/// Balanced term index
///
/// # Example
///
/// ```
/// use permudex_core::DocId;
/// use permudex_engine::TermTree;
///
/// let mut tree = TermTree::new();
/// tree.insert("magnet", DocId::from("Doc1"));
/// tree.insert("magnet", DocId::from("Doc2"));
///
/// let postings = tree.search("magnet").unwrap();
/// assert_eq!(postings.len(), 2);
/// assert!(tree.search("field").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TermTree {
    nodes: Vec<Node>,
    root: NodeId,
    /// Number of levels (a lone leaf root is height 1)
    height: usize,
    /// Number of distinct terms
    len: usize,
}

impl Default for TermTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TermTree {
    /// Create an empty tree: a single leaf root with no keys
    pub fn new() -> Self {
        TermTree {
            nodes: vec![Node::default()],
            root: NodeId(0),
            height: 1,
            len: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of distinct terms stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no term has been stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels from root to leaves
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of nodes allocated in the arena
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Current root handle
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Keys stored in a node, in order
    pub fn keys(&self, id: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.node(id).entries.iter().map(|e| e.term.as_str())
    }

    /// Child handles of a node (empty for leaves)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Look up the posting list of `term`
    ///
    /// Returns `None` when the term has never been inserted. Never rebalances.
    pub fn search(&self, term: &str) -> Option<&PostingList> {
        let mut current = self.node(self.root);
        loop {
            match current.locate(term) {
                Ok(slot) => return Some(&current.entries[slot].postings),
                Err(_) if current.is_leaf() => return None,
                Err(slot) => current = self.node(current.children[slot]),
            }
        }
    }

    /// Check whether `term` is stored
    pub fn contains(&self, term: &str) -> bool {
        self.search(term).is_some()
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Record that `doc_id` contains `term`
    ///
    /// Appends to the existing posting list when the term is already stored
    /// (idempotently); otherwise inserts a new key, splitting full nodes on the
    /// way back up. Returns true if the term was new to the tree.
    pub fn insert(&mut self, term: &str, doc_id: DocId) -> bool {
        let mut path: SmallVec<[NodeId; 16]> = SmallVec::new();
        let mut current = self.root;

        loop {
            let node = &mut self.nodes[current.index()];
            match node.locate(term) {
                Ok(slot) => {
                    node.entries[slot].postings.insert(doc_id);
                    return false;
                }
                Err(_) if node.is_leaf() => break,
                Err(slot) => {
                    path.push(current);
                    current = node.children[slot];
                }
            }
        }

        self.len += 1;
        let mut carry = Entry::new(term, doc_id);
        let mut carry_right: Option<NodeId> = None;
        let mut target = current;

        loop {
            let overflow = {
                let node = &mut self.nodes[target.index()];
                let pos = node.entries.partition_point(|e| e.term < carry.term);
                node.entries.insert(pos, carry);
                if let Some(right) = carry_right {
                    node.children.insert(pos + 1, right);
                }
                node.entries.len() > MAX_KEYS
            };
            if !overflow {
                return true;
            }

            let (median, right) = self.split(target);
            match path.pop() {
                Some(parent) => {
                    carry = median;
                    carry_right = Some(right);
                    target = parent;
                }
                None => {
                    self.grow_root(median, target, right);
                    return true;
                }
            }
        }
    }

    /// Split an overflowing node in place.
    ///
    /// The node keeps its smallest entry (and first two children); the largest
    /// entry (and last two children) move to a newly allocated right sibling.
    /// Returns the median entry and the sibling's handle.
    fn split(&mut self, id: NodeId) -> (Entry, NodeId) {
        let node = &mut self.nodes[id.index()];
        debug_assert_eq!(node.entries.len(), MAX_KEYS + 1);
        debug_assert!(node.is_leaf() || node.children.len() == MAX_KEYS + 2);

        let right_entry = node.entries.remove(2);
        let median = node.entries.remove(1);
        let right_children: SmallVec<[NodeId; 4]> = if node.is_leaf() {
            SmallVec::new()
        } else {
            node.children.drain(2..).collect()
        };

        let right = self.alloc(Node {
            entries: smallvec![right_entry],
            children: right_children,
        });

        tracing::trace!(
            target: "permudex::tree",
            left = id.index(),
            right = right.index(),
            median = %median.term,
            "Split full node"
        );

        (median, right)
    }

    /// Replace the root with a new node holding only `median`.
    fn grow_root(&mut self, median: Entry, left: NodeId, right: NodeId) {
        let root = self.alloc(Node {
            entries: smallvec![median],
            children: smallvec![left, right],
        });
        self.root = root;
        self.height += 1;

        tracing::trace!(
            target: "permudex::tree",
            root = root.index(),
            height = self.height,
            "Grew new root"
        );
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // ========================================================================
    // Enumeration
    // ========================================================================

    /// In-order iterator over `(term, postings)`
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// In-order iterator starting at the first term `>= lower`
    pub fn iter_from<'a>(&'a self, lower: &str) -> Iter<'a> {
        Iter::seek(self, lower)
    }

    /// Every stored term starting with `prefix`, sorted by term
    ///
    /// Seeks to `prefix` and stops at the first non-matching key, so only the
    /// matching range and its ancestors are visited.
    pub fn prefix_enumerate<'a>(&'a self, prefix: &'a str) -> Vec<(&'a str, &'a PostingList)> {
        self.iter_from(prefix)
            .take_while(|(term, _)| term.starts_with(prefix))
            .collect()
    }

    /// Every stored term, sorted by term
    pub fn enumerate_all(&self) -> Vec<(&str, &PostingList)> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a TermTree {
    type Item = (&'a str, &'a PostingList);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
