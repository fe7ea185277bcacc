// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolving a taxonomy leaf back to its elements

use crate::PropertyIndex;
use fdk_explorer_model::{ElementId, ElementNode, CLASSIFICATION_KEYS, TAXONOMY_DEPTH};

/// The terminal classification level a leaf activation matches on
const LEAF_KEY: &str = CLASSIFICATION_KEYS[TAXONOMY_DEPTH - 1];

/// Finds the elements a taxonomy leaf value stands for
///
/// Re-walks the full spatial tree but reads the [`PropertyIndex`]
/// captured during indexing instead of re-fetching every property set.
/// An element matches when any of its flattened property-set maps carries
/// an Objekttyp equal to the leaf value - exact string equality, no
/// normalization. Elements absent from the index (their fetch failed
/// during indexing) are skipped.
pub struct Matcher<'a> {
    index: &'a PropertyIndex,
}

impl<'a> Matcher<'a> {
    /// Create a matcher over an index
    pub fn new(index: &'a PropertyIndex) -> Self {
        Self { index }
    }

    /// Collect matching element ids in depth-first tree order
    ///
    /// An empty result is not an error; the caller simply has nothing to
    /// mark. Each element appears at most once, even when several of its
    /// property sets match.
    pub fn find_matches(&self, root: &ElementNode, leaf_value: &str) -> Vec<ElementId> {
        root.iter()
            .filter(|node| self.matches(node.express_id, leaf_value))
            .map(|node| node.express_id)
            .collect()
    }

    fn matches(&self, element: ElementId, leaf_value: &str) -> bool {
        self.index
            .get(element)
            .map(|flats| {
                flats.iter().any(|flat| {
                    flat.get(LEAF_KEY)
                        .map(|v| v.display_string() == leaf_value)
                        .unwrap_or(false)
                })
            })
            .unwrap_or(false)
    }
}
