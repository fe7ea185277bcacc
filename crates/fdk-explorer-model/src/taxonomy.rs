// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! FDK classification taxonomy
//!
//! A 4-level categorical grouping of elements derived from their property
//! sets, independent of spatial containment. The levels are fixed:
//! Fachbereich → Objektgruppe → Untergruppe → Objekttyp. A leaf carries no
//! payload; its existence is the only information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The four property names a set must carry to classify an element,
/// in taxonomy level order
pub const CLASSIFICATION_KEYS: [&str; 4] =
    ["Fachbereich", "Objektgruppe", "Untergruppe", "Objekttyp"];

/// Number of taxonomy levels
pub const TAXONOMY_DEPTH: usize = CLASSIFICATION_KEYS.len();

/// A node in the classification taxonomy
///
/// Children are keyed by the strings sourced from property values.
/// Key uniqueness per level comes from the map; insertion order is
/// irrelevant and iteration is sorted. Built fresh per model load,
/// immutable once built, discarded on unload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonomyNode {
    children: BTreeMap<String, TaxonomyNode>,
}

impl TaxonomyNode {
    /// Create an empty taxonomy root
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this node has no children (a leaf, or an empty root)
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Iterate direct children in sorted key order
    pub fn children(&self) -> impl Iterator<Item = (&str, &TaxonomyNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get a direct child by key
    pub fn get(&self, key: &str) -> Option<&TaxonomyNode> {
        self.children.get(key)
    }

    /// Insert a path of keys, creating intermediate levels on demand
    ///
    /// Inserting the same path twice is a no-op, so rebuilding from the
    /// same source yields a structurally identical taxonomy.
    pub fn insert_path<I, S>(&mut self, path: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut node = self;
        for key in path {
            node = node.children.entry(key.into()).or_default();
        }
    }

    /// Whether the exact path of keys exists
    pub fn contains_path<'a, I>(&self, path: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut node = self;
        for key in path {
            match node.children.get(key) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// Collect every leaf key at the terminal level
    ///
    /// Walks with an explicit stack; leaves are nodes without children.
    /// The root's own emptiness does not count as a leaf.
    pub fn leaf_values(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        let mut stack: Vec<(&str, &TaxonomyNode)> = self
            .children
            .iter()
            .rev()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        while let Some((key, node)) = stack.pop() {
            if node.is_empty() {
                leaves.push(key);
            } else {
                for (k, v) in node.children.iter().rev() {
                    stack.push((k.as_str(), v));
                }
            }
        }
        leaves
    }
}
