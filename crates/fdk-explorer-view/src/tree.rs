//! Collapsible tree view model
//!
//! Renders either tree shape - the spatial containment tree or the FDK
//! taxonomy - into one isomorphic nested-list structure a host UI can
//! display. Nodes live in a flat arena addressed by [`NodeId`]; expansion
//! and hover are display state kept next to the arena, so toggling never
//! re-walks the source trees.

use fdk_explorer_model::{ElementId, ElementNode, TaxonomyNode};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Index of a node within its tree view
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// What a tree node stands for
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TreeNodeKind {
    /// Internal node with an expand/collapse control
    Branch,
    /// Spatial leaf: an element without children
    SpatialLeaf(ElementId),
    /// Taxonomy leaf: a terminal Objekttyp entry
    TaxonomyLeaf(String),
}

/// One node of a rendered tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub label: String,
    pub kind: TreeNodeKind,
    pub children: Vec<NodeId>,
}

impl TreeNode {
    /// Whether this node renders as a non-expandable entry
    pub fn is_leaf(&self) -> bool {
        !matches!(self.kind, TreeNodeKind::Branch)
    }
}

/// Pointer interaction on a tree node, delivered by the host UI
#[derive(Clone, Debug, PartialEq)]
pub enum TreeEvent {
    /// Expand/collapse control toggled
    ToggleExpand(NodeId),
    /// Pointer entered the row
    HoverEnter(NodeId),
    /// Pointer left the row
    HoverLeave(NodeId),
    /// Row activated (click)
    Activate(NodeId),
}

/// A visible row produced by [`TreeView::visible_rows`]
#[derive(Clone, Debug)]
pub struct TreeRow<'a> {
    pub node: &'a TreeNode,
    /// Indentation level, 0 for roots
    pub depth: usize,
    pub expanded: bool,
    pub hovered: bool,
}

/// A collapsible hierarchy over one of the two tree shapes
#[derive(Clone, Debug)]
pub struct TreeView {
    /// Heading shown above the tree
    pub title: String,
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
    expanded: FxHashSet<NodeId>,
    hovered: Option<NodeId>,
}

impl TreeView {
    fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: Vec::new(),
            roots: Vec::new(),
            expanded: FxHashSet::default(),
            hovered: None,
        }
    }

    /// Build a view of the spatial containment tree
    ///
    /// Row order mirrors the containment hierarchy exactly: root first,
    /// then each child in source order. The root and its direct children
    /// start expanded.
    pub fn from_spatial(title: impl Into<String>, root: &ElementNode) -> Self {
        let mut view = Self::empty(title);
        let mut stack: Vec<(&ElementNode, Option<NodeId>)> = vec![(root, None)];
        while let Some((src, parent)) = stack.pop() {
            let kind = if src.is_leaf() {
                TreeNodeKind::SpatialLeaf(src.express_id)
            } else {
                TreeNodeKind::Branch
            };
            let id = view.push_node(src.display_label(), kind, parent);
            for child in src.children.iter().rev() {
                stack.push((child, Some(id)));
            }
        }

        // Root and first level start open
        let first_level: Vec<NodeId> = view
            .roots
            .iter()
            .flat_map(|&r| std::iter::once(r).chain(view.nodes[r.0 as usize].children.iter().copied()))
            .collect();
        view.expanded.extend(first_level);
        view
    }

    /// Build a view of the classification taxonomy
    ///
    /// Level-1 keys become roots; a keyed entry without children is the
    /// terminal Objekttyp leaf. Everything starts collapsed.
    pub fn from_taxonomy(title: impl Into<String>, taxonomy: &TaxonomyNode) -> Self {
        let mut view = Self::empty(title);
        let mut stack: Vec<(&str, &TaxonomyNode, Option<NodeId>)> = taxonomy
            .children()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .map(|(k, n)| (k, n, None))
            .collect();
        while let Some((key, src, parent)) = stack.pop() {
            let kind = if src.is_empty() {
                TreeNodeKind::TaxonomyLeaf(key.to_string())
            } else {
                TreeNodeKind::Branch
            };
            let id = view.push_node(key, kind, parent);
            let children: Vec<_> = src.children().collect();
            for (k, n) in children.into_iter().rev() {
                stack.push((k, n, Some(id)));
            }
        }
        view
    }

    fn push_node(
        &mut self,
        label: impl Into<String>,
        kind: TreeNodeKind,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TreeNode {
            id,
            label: label.into(),
            kind,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.nodes[p.0 as usize].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0 as usize)
    }

    /// Total node count
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the view has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flip one node's expansion flag
    ///
    /// Scopes strictly to the given node's own child container; sibling
    /// subtrees keep their state. A no-op for leaves.
    pub fn toggle_expanded(&mut self, id: NodeId) {
        match self.node(id) {
            Some(node) if !node.is_leaf() => {
                if !self.expanded.remove(&id) {
                    self.expanded.insert(id);
                }
            }
            _ => {}
        }
    }

    /// Whether a node's children are currently shown
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    /// Set or clear the transient hover mark
    pub fn set_hovered(&mut self, id: Option<NodeId>) {
        self.hovered = id;
    }

    /// The currently hovered node, if any
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// The rows a host UI renders right now, depth-first
    ///
    /// Children of collapsed nodes are withheld; everything else appears
    /// in containment order.
    pub fn visible_rows(&self) -> Vec<TreeRow<'_>> {
        let mut rows = Vec::new();
        let mut stack: Vec<(NodeId, usize)> =
            self.roots.iter().rev().map(|&id| (id, 0)).collect();
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.0 as usize];
            let expanded = self.expanded.contains(&id);
            rows.push(TreeRow {
                node,
                depth,
                expanded,
                hovered: self.hovered == Some(id),
            });
            if expanded {
                for &child in node.children.iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }
        rows
    }
}
