// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial containment tree

use crate::ElementId;
use serde::{Deserialize, Serialize};

/// Node in the spatial containment tree
///
/// Mirrors the source model's physical/organizational structure
/// (project, site, storeys, elements). The tree is owned by the loaded
/// session, is immutable for the session's lifetime and is dropped on
/// model unload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    /// Stable integer id, unique within the model
    pub express_id: ElementId,
    /// Element category label (e.g. "IfcWall")
    pub element_type: String,
    /// Child nodes, in source order
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    /// Create a new node with no children
    pub fn new(express_id: impl Into<ElementId>, element_type: impl Into<String>) -> Self {
        Self {
            express_id: express_id.into(),
            element_type: element_type.into(),
            children: Vec::new(),
        }
    }

    /// Add a child node
    pub fn add_child(&mut self, child: ElementNode) {
        self.children.push(child);
    }

    /// Add a child node, builder style
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    /// Whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Label shown for this node in a tree view, `"<type> - <id>"`
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.element_type, self.express_id.0)
    }

    /// Find a node by id
    pub fn find(&self, id: ElementId) -> Option<&ElementNode> {
        self.iter().find(|n| n.express_id == id)
    }

    /// Iterate all nodes depth-first in pre-order
    ///
    /// Backed by an explicit stack, so arbitrarily deep containment
    /// hierarchies do not grow the call stack.
    pub fn iter(&self) -> ElementNodeIter<'_> {
        ElementNodeIter { stack: vec![self] }
    }

    /// Get all ids in this subtree, depth-first order
    pub fn element_ids(&self) -> Vec<ElementId> {
        self.iter().map(|n| n.express_id).collect()
    }

    /// Get the ids of all nodes with the given category label
    pub fn elements_of_type(&self, element_type: &str) -> Vec<ElementId> {
        self.iter()
            .filter(|n| n.element_type == element_type)
            .map(|n| n.express_id)
            .collect()
    }

    /// Total node count of this subtree
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }
}

/// Iterator over spatial nodes (depth-first pre-order)
pub struct ElementNodeIter<'a> {
    stack: Vec<&'a ElementNode>,
}

impl<'a> Iterator for ElementNodeIter<'a> {
    type Item = &'a ElementNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse so the first child is visited next
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
