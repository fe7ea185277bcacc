// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Taxonomy builder walking the spatial tree

use crate::PropertyIndex;
use fdk_explorer_model::{
    ElementNode, FlatProperties, ModelId, PropertyProvider, TaxonomyNode, CLASSIFICATION_KEYS,
};

/// Result of one indexing pass
pub struct TaxonomyBuild {
    /// The derived classification tree
    pub taxonomy: TaxonomyNode,
    /// Flattened property maps of every visited element
    pub index: PropertyIndex,
}

/// Builds the FDK taxonomy from a spatial tree
///
/// Walks the tree depth-first in pre-order and fetches every element's
/// property sets from the provider. Each property set is flattened on its
/// own; a set that carries all four classification keys contributes one
/// 4-level path. Every descendant is visited - a qualifying ancestor does
/// not exempt its subtree, and one element may contribute several paths.
///
/// A provider failure for one element is logged and costs only that
/// element's entries; the walk continues.
pub struct TaxonomyIndexer<'a> {
    provider: &'a dyn PropertyProvider,
    model: ModelId,
    taxonomy: TaxonomyNode,
    index: PropertyIndex,
}

impl<'a> TaxonomyIndexer<'a> {
    /// Create an indexer for one model
    pub fn new(provider: &'a dyn PropertyProvider, model: ModelId) -> Self {
        Self {
            provider,
            model,
            taxonomy: TaxonomyNode::new(),
            index: PropertyIndex::new(),
        }
    }

    /// Walk the tree and build taxonomy plus property index
    pub fn build(mut self, root: &ElementNode) -> TaxonomyBuild {
        for node in root.iter() {
            self.visit(node);
        }
        log::debug!(
            "taxonomy for {} built: {} top-level entries, {} elements indexed",
            self.model,
            self.taxonomy.len(),
            self.index.len()
        );
        TaxonomyBuild {
            taxonomy: self.taxonomy,
            index: self.index,
        }
    }

    fn visit(&mut self, node: &ElementNode) {
        let props = match self.provider.element_properties(self.model, node.express_id) {
            Ok(props) => props,
            Err(err) => {
                log::warn!(
                    "property fetch for {} in {} failed, element skipped: {}",
                    node.express_id,
                    self.model,
                    err
                );
                self.index.insert(node.express_id, Vec::new());
                return;
            }
        };

        let flats: Vec<FlatProperties> = props.psets.iter().map(|pset| pset.flatten()).collect();
        for flat in &flats {
            if let Some(path) = classification_path(flat) {
                self.taxonomy.insert_path(path);
            }
        }
        self.index.insert(node.express_id, flats);
    }
}

/// Extract the 4-level key path from one flattened property set
///
/// Returns `None` unless all four classification keys are present.
fn classification_path(flat: &FlatProperties) -> Option<[String; 4]> {
    let mut path: [String; 4] = Default::default();
    for (slot, key) in path.iter_mut().zip(CLASSIFICATION_KEYS) {
        *slot = flat.get(key)?.display_string();
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{classified_pset, MapProvider};
    use fdk_explorer_model::{ElementProperties, PropertySet, PropertyValue};

    fn model() -> ModelId {
        ModelId(1)
    }

    /// Scenario A: three leaves, one fully classified, two partial.
    #[test]
    fn only_fully_keyed_sets_contribute() {
        let tree = ElementNode::new(1u32, "IfcProject")
            .with_child(ElementNode::new(2u32, "IfcWall"))
            .with_child(ElementNode::new(3u32, "IfcWall"))
            .with_child(ElementNode::new(4u32, "IfcWall"));

        let mut provider = MapProvider::default();
        provider.set(2, ElementProperties::new("IfcWall").with_pset(classified_pset("A", "B", "C", "D")));
        provider.set(
            3,
            ElementProperties::new("IfcWall").with_pset(
                PropertySet::new("Pset_Partial")
                    .with("Fachbereich", "A")
                    .with("Objektgruppe", "B"),
            ),
        );
        provider.set(
            4,
            ElementProperties::new("IfcWall").with_pset(
                PropertySet::new("Pset_Partial")
                    .with("Objekttyp", "D"),
            ),
        );

        let build = TaxonomyIndexer::new(&provider, model()).build(&tree);
        assert_eq!(build.taxonomy.len(), 1);
        assert!(build.taxonomy.contains_path(["A", "B", "C", "D"]));
        assert_eq!(build.taxonomy.leaf_values(), vec!["D"]);
        assert_eq!(
            serde_json::to_value(&build.taxonomy).unwrap(),
            serde_json::json!({"A": {"B": {"C": {"D": {}}}}})
        );
    }

    #[test]
    fn multiple_qualifying_sets_contribute_multiple_paths() {
        let tree = ElementNode::new(1u32, "IfcProject")
            .with_child(ElementNode::new(2u32, "IfcWall"));

        let mut provider = MapProvider::default();
        provider.set(
            2,
            ElementProperties::new("IfcWall")
                .with_pset(classified_pset("A", "B", "C", "D"))
                .with_pset(classified_pset("A2", "B2", "C2", "D2")),
        );

        let build = TaxonomyIndexer::new(&provider, model()).build(&tree);
        assert!(build.taxonomy.contains_path(["A", "B", "C", "D"]));
        assert!(build.taxonomy.contains_path(["A2", "B2", "C2", "D2"]));
    }

    #[test]
    fn provider_failure_skips_element_and_continues() {
        let tree = ElementNode::new(1u32, "IfcProject")
            .with_child(ElementNode::new(2u32, "IfcWall"))
            .with_child(ElementNode::new(3u32, "IfcWall"));

        let mut provider = MapProvider::default();
        provider.fail(2);
        provider.set(3, ElementProperties::new("IfcWall").with_pset(classified_pset("A", "B", "C", "D")));

        let build = TaxonomyIndexer::new(&provider, model()).build(&tree);
        // The failed element is present in the index but empty, and the
        // rest of the tree still classified.
        assert_eq!(build.index.get(fdk_explorer_model::ElementId(2)), Some(&[][..]));
        assert!(build.taxonomy.contains_path(["A", "B", "C", "D"]));
    }

    #[test]
    fn rebuild_yields_identical_taxonomy() {
        let tree = ElementNode::new(1u32, "IfcProject").with_child(
            ElementNode::new(2u32, "IfcWall").with_child(ElementNode::new(3u32, "IfcSlab")),
        );

        let mut provider = MapProvider::default();
        provider.set(2, ElementProperties::new("IfcWall").with_pset(classified_pset("A", "B", "C", "D")));
        provider.set(3, ElementProperties::new("IfcSlab").with_pset(classified_pset("A", "B", "X", "Y")));

        let first = TaxonomyIndexer::new(&provider, model()).build(&tree);
        let second = TaxonomyIndexer::new(&provider, model()).build(&tree);
        assert_eq!(first.taxonomy, second.taxonomy);
    }

    #[test]
    fn numeric_values_key_by_display_string() {
        let tree = ElementNode::new(1u32, "IfcProject")
            .with_child(ElementNode::new(2u32, "IfcWall"));

        let mut provider = MapProvider::default();
        provider.set(
            2,
            ElementProperties::new("IfcWall").with_pset(
                PropertySet::new("Pset_FDK")
                    .with("Fachbereich", "A")
                    .with("Objektgruppe", PropertyValue::Number(12.0))
                    .with("Untergruppe", "C")
                    .with("Objekttyp", "D"),
            ),
        );

        let build = TaxonomyIndexer::new(&provider, model()).build(&tree);
        assert!(build.taxonomy.contains_path(["A", "12", "C", "D"]));
    }

    #[test]
    fn null_valued_key_disqualifies_the_set() {
        let tree = ElementNode::new(1u32, "IfcProject")
            .with_child(ElementNode::new(2u32, "IfcWall"));

        let mut provider = MapProvider::default();
        provider.set(
            2,
            ElementProperties::new("IfcWall").with_pset(
                PropertySet::new("Pset_FDK")
                    .with("Fachbereich", PropertyValue::Null)
                    .with("Objektgruppe", "B")
                    .with("Untergruppe", "C")
                    .with("Objekttyp", "D"),
            ),
        );

        let build = TaxonomyIndexer::new(&provider, model()).build(&tree);
        assert!(build.taxonomy.is_empty());
    }
}
