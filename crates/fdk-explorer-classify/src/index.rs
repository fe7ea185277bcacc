// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Memoized element property maps

use fdk_explorer_model::{ElementId, FlatProperties};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Flattened per-set property maps of every element visited during
/// taxonomy indexing, keyed by element id
///
/// One entry per visited element, one map per property set (sets are
/// never merged: each set qualifies or matches on its own). Elements
/// whose property fetch failed get an empty entry, which callers treat
/// the same as "no properties".
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyIndex {
    entries: FxHashMap<ElementId, Vec<FlatProperties>>,
}

impl PropertyIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an element's flattened property maps
    pub fn insert(&mut self, element: ElementId, flats: Vec<FlatProperties>) {
        self.entries.insert(element, flats);
    }

    /// Get the flattened maps recorded for an element
    pub fn get(&self, element: ElementId) -> Option<&[FlatProperties]> {
        self.entries.get(&element).map(Vec::as_slice)
    }

    /// Whether the element was visited during indexing
    pub fn contains(&self, element: ElementId) -> bool {
        self.entries.contains_key(&element)
    }

    /// Number of indexed elements
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no element has been indexed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
