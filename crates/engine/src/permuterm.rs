//! Permuterm index for wildcard term lookup
//!
//! Every term `t` is stored under all cyclic rotations of `t$`. A pattern with
//! one `*` is rotated so the wildcard lands at the end, which turns the lookup
//! into a prefix scan over the ordered rotation table:
//!
//! | Pattern | Rotated query | Matches |
//! |---------|---------------|---------|
//! | `X*`    | `$X`          | terms starting with `X` |
//! | `*X`    | `X$`          | terms ending with `X` |
//! | `A*B`   | `B$A`         | terms starting with `A` and ending with `B` |
//! | `*`     | `$`           | every term |
//!
//! Patterns with more than one `*` are outside this grammar and match nothing.

use permudex_core::Term;
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

/// Sentinel appended to a term before rotating.
pub const END_MARKER: char = '$';

/// Wildcard character accepted in patterns.
pub const WILDCARD: char = '*';

/// Shape of a term pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardPattern<'a> {
    /// No wildcard: the pattern is a literal term
    Exact(&'a str),
    /// `X*`
    Prefix(&'a str),
    /// `*X`
    Suffix(&'a str),
    /// `A*B` with both parts non-empty
    Infix {
        /// Text before the wildcard
        head: &'a str,
        /// Text after the wildcard
        tail: &'a str,
    },
    /// More than one wildcard
    Unsupported,
}

impl<'a> WildcardPattern<'a> {
    /// Classify a pattern
    pub fn parse(pattern: &'a str) -> Self {
        match pattern.matches(WILDCARD).count() {
            0 => WildcardPattern::Exact(pattern),
            1 => {
                if let Some(prefix) = pattern.strip_suffix(WILDCARD) {
                    WildcardPattern::Prefix(prefix)
                } else if let Some(suffix) = pattern.strip_prefix(WILDCARD) {
                    WildcardPattern::Suffix(suffix)
                } else {
                    match pattern.split_once(WILDCARD) {
                        Some((head, tail)) => WildcardPattern::Infix { head, tail },
                        None => WildcardPattern::Unsupported,
                    }
                }
            }
            _ => WildcardPattern::Unsupported,
        }
    }

    /// Rotation prefix to scan for, if the pattern contains a wildcard
    pub fn rotated_query(&self) -> Option<String> {
        match *self {
            WildcardPattern::Prefix(prefix) => Some(format!("{}{}", END_MARKER, prefix)),
            WildcardPattern::Suffix(suffix) => Some(format!("{}{}", suffix, END_MARKER)),
            WildcardPattern::Infix { head, tail } => Some(format!("{}{}{}", tail, END_MARKER, head)),
            WildcardPattern::Exact(_) | WildcardPattern::Unsupported => None,
        }
    }
}

/// All cyclic rotations of `term$`, starting with `term$` itself
pub fn rotations(term: &str) -> Vec<String> {
    let mut marked = String::with_capacity(term.len() + 1);
    marked.push_str(term);
    marked.push(END_MARKER);
    marked
        .char_indices()
        .map(|(i, _)| format!("{}{}", &marked[i..], &marked[..i]))
        .collect()
}

/// Rotation table mapping each rotation to the terms that produce it
///
/// Collisions keep every originating term, so the result of a lookup does
/// not depend on insertion order.
#[derive(Debug, Clone, Default)]
pub struct PermutermIndex {
    rotations: BTreeMap<String, BTreeSet<Term>>,
    terms: FxHashSet<Term>,
}

impl PermutermIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Register all rotations of `term`
    ///
    /// Returns false if the term was already registered.
    pub fn add_term(&mut self, term: &str) -> bool {
        if !self.terms.insert(term.to_string()) {
            return false;
        }
        for rotation in rotations(term) {
            self.rotations
                .entry(rotation)
                .or_default()
                .insert(term.to_string());
        }
        true
    }

    /// Check whether `term` has been registered
    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Number of distinct registered terms
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of `(rotation, term)` pairs stored
    pub fn len(&self) -> usize {
        self.rotations.values().map(BTreeSet::len).sum()
    }

    /// Check if no term has been registered
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Resolve a pattern to the set of registered terms it matches
    ///
    /// A pattern without `*` matches itself if registered. Unsupported shapes
    /// match nothing.
    pub fn wildcard_search(&self, pattern: &str) -> BTreeSet<Term> {
        let parsed = WildcardPattern::parse(pattern);
        match parsed {
            WildcardPattern::Exact(term) => {
                if self.contains_term(term) {
                    BTreeSet::from([term.to_string()])
                } else {
                    BTreeSet::new()
                }
            }
            WildcardPattern::Unsupported => {
                tracing::debug!(
                    target: "permudex::permuterm",
                    pattern = pattern,
                    "Unsupported wildcard pattern"
                );
                BTreeSet::new()
            }
            _ => match parsed.rotated_query() {
                Some(query) => self.scan(&query),
                None => BTreeSet::new(),
            },
        }
    }

    /// Terms owning a rotation that starts with `query`
    fn scan(&self, query: &str) -> BTreeSet<Term> {
        self.rotations
            .range::<str, _>((Bound::Included(query), Bound::Unbounded))
            .take_while(|(rotation, _)| rotation.starts_with(query))
            .flat_map(|(_, terms)| terms.iter().cloned())
            .collect()
    }

    /// Every `(rotation, term)` pair, sorted by rotation then term
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.rotations.iter().flat_map(|(rotation, terms)| {
            terms
                .iter()
                .map(move |term| (rotation.as_str(), term.as_str()))
        })
    }
}
