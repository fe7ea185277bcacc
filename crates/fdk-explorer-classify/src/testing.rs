// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Test fixtures shared by the indexer and matcher tests

use fdk_explorer_model::{
    ElementId, ElementProperties, ExplorerError, ModelId, PropertyProvider, PropertySet, Result,
};
use rustc_hash::{FxHashMap, FxHashSet};

/// Property provider backed by a plain map, with per-element failure
/// injection
#[derive(Default)]
pub struct MapProvider {
    entries: FxHashMap<ElementId, ElementProperties>,
    failing: FxHashSet<ElementId>,
}

impl MapProvider {
    pub fn set(&mut self, element: u32, props: ElementProperties) {
        self.entries.insert(ElementId(element), props);
    }

    pub fn fail(&mut self, element: u32) {
        self.failing.insert(ElementId(element));
    }
}

impl PropertyProvider for MapProvider {
    fn element_properties(
        &self,
        model: ModelId,
        element: ElementId,
    ) -> Result<ElementProperties> {
        if self.failing.contains(&element) {
            return Err(ExplorerError::property_fetch(model, element, "injected"));
        }
        Ok(self.entries.get(&element).cloned().unwrap_or_default())
    }
}

/// A property set carrying all four classification keys
pub fn classified_pset(
    fachbereich: &str,
    objektgruppe: &str,
    untergruppe: &str,
    objekttyp: &str,
) -> PropertySet {
    PropertySet::new("Pset_FDK")
        .with("Fachbereich", fachbereich)
        .with("Objektgruppe", objektgruppe)
        .with("Untergruppe", untergruppe)
        .with("Objekttyp", objekttyp)
}
