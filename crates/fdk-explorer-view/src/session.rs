//! Per-model session coordination
//!
//! [`ModelSession`] owns everything a loaded model contributes: the
//! spatial tree, the derived taxonomy and property index, both tree
//! views, the selection state machine and the property panel. A new load
//! tears the previous session state down synchronously before the load
//! is issued, so no pointer event can reference stale identifiers, and a
//! second load request cannot interleave with a first (`&mut self`
//! serializes them).

use crate::{NodeId, PropertyPanel, SelectionState, TreeEvent, TreeNodeKind, TreeView};
use fdk_explorer_classify::{Matcher, PropertyIndex, TaxonomyIndexer};
use fdk_explorer_model::{
    ElementId, ElementNode, ModelId, ModelLoader, PropertyProvider, Result, SceneHit,
    SceneSelector, TaxonomyNode,
};
use std::sync::Arc;

/// Heading of the spatial containment view
pub const SPATIAL_TREE_TITLE: &str = "IFC-Struktur";
/// Heading of the classification view
pub const TAXONOMY_TREE_TITLE: &str = "FDK-Struktur";

/// Which of the two synchronized trees an event came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeKind {
    Spatial,
    Taxonomy,
}

/// The explorer's per-model state and its collaborators
pub struct ModelSession {
    loader: Arc<dyn ModelLoader>,
    provider: Arc<dyn PropertyProvider>,
    selector: Arc<dyn SceneSelector>,

    model_id: Option<ModelId>,
    /// Models whose objects are currently in the scene
    loaded_models: Vec<ModelId>,
    spatial_root: Option<ElementNode>,
    taxonomy: TaxonomyNode,
    property_index: PropertyIndex,

    selection: SelectionState,
    spatial_view: Option<TreeView>,
    taxonomy_view: Option<TreeView>,
    panel: Option<PropertyPanel>,
    /// Scene hover prepick is suppressed while the pointer is on a tree row
    pointer_over_tree: bool,
}

impl ModelSession {
    /// Create a session with no model loaded
    pub fn new(
        loader: Arc<dyn ModelLoader>,
        provider: Arc<dyn PropertyProvider>,
        selector: Arc<dyn SceneSelector>,
    ) -> Self {
        Self {
            loader,
            provider,
            selector,
            model_id: None,
            loaded_models: Vec::new(),
            spatial_root: None,
            taxonomy: TaxonomyNode::new(),
            property_index: PropertyIndex::new(),
            selection: SelectionState::new(),
            spatial_view: None,
            taxonomy_view: None,
            panel: None,
            pointer_over_tree: false,
        }
    }

    /// Load a model, replacing whatever was loaded before
    ///
    /// Teardown of the previous session state completes before the load
    /// is issued. Load and spatial-structure failures propagate to the
    /// caller; a failed shadow render only logs.
    pub fn load_model(&mut self, url: &str) -> Result<ModelId> {
        self.teardown();

        let loaded = self.loader.load_model(url)?;
        let model = loaded.model_id;
        self.model_id = Some(model);
        self.loaded_models.push(model);

        if let Err(err) = self.loader.render_shadow(model) {
            log::warn!("shadow render for {} failed: {}", model, err);
        }

        let root = self.loader.spatial_structure(model)?;
        let build = TaxonomyIndexer::new(self.provider.as_ref(), model).build(&root);

        self.spatial_view = Some(TreeView::from_spatial(SPATIAL_TREE_TITLE, &root));
        self.taxonomy_view = Some(TreeView::from_taxonomy(TAXONOMY_TREE_TITLE, &build.taxonomy));
        self.spatial_root = Some(root);
        self.taxonomy = build.taxonomy;
        self.property_index = build.index;

        log::debug!("model {} loaded from {}", model, url);
        Ok(model)
    }

    /// Remove every trace of the previous model
    ///
    /// Scene objects are unloaded, marks cleared, and the selection state
    /// machine reconstructed; unload failures only log.
    fn teardown(&mut self) {
        for model in self.loaded_models.drain(..) {
            if let Err(err) = self.loader.unload_model(model) {
                log::warn!("unload of {} failed: {}", model, err);
            }
            log::debug!("model {} torn down", model);
        }
        self.selector.unpick_all();
        self.selector.unhighlight_all();
        self.selection = SelectionState::new();
        self.model_id = None;
        self.spatial_root = None;
        self.taxonomy = TaxonomyNode::new();
        self.property_index = PropertyIndex::new();
        self.spatial_view = None;
        self.taxonomy_view = None;
        self.panel = None;
        self.pointer_over_tree = false;
    }

    /// React to a pointer interaction on one of the tree views
    pub fn handle_tree_event(&mut self, kind: TreeKind, event: TreeEvent) -> Result<()> {
        let Some(model) = self.model_id else {
            return Ok(());
        };

        match event {
            TreeEvent::ToggleExpand(id) => {
                if let Some(view) = self.view_mut(kind) {
                    view.toggle_expanded(id);
                }
            }
            TreeEvent::HoverEnter(id) => {
                self.pointer_over_tree = true;
                let node_kind = self.node_kind(kind, id);
                if let Some(view) = self.view_mut(kind) {
                    view.set_hovered(Some(id));
                }
                match node_kind {
                    Some(TreeNodeKind::SpatialLeaf(element)) => {
                        self.selection
                            .prepick(self.selector.as_ref(), model, &[element]);
                    }
                    Some(TreeNodeKind::TaxonomyLeaf(value)) => {
                        let matches = self.matches_for(&value);
                        self.selection
                            .prepick(self.selector.as_ref(), model, &matches);
                    }
                    _ => {}
                }
            }
            TreeEvent::HoverLeave(_) => {
                self.pointer_over_tree = false;
                if let Some(view) = self.view_mut(kind) {
                    view.set_hovered(None);
                }
                self.selection.clear_prepick(self.selector.as_ref(), model);
            }
            TreeEvent::Activate(id) => {
                let node_kind = self.node_kind(kind, id);
                match node_kind {
                    Some(TreeNodeKind::Branch) => {
                        if let Some(view) = self.view_mut(kind) {
                            view.toggle_expanded(id);
                        }
                    }
                    Some(TreeNodeKind::SpatialLeaf(element)) => {
                        self.selection
                            .pick_exclusive(self.selector.as_ref(), model, element);
                        let props = self.provider.element_properties(model, element)?;
                        self.panel = Some(PropertyPanel::from_properties(&props));
                    }
                    Some(TreeNodeKind::TaxonomyLeaf(value)) => {
                        self.selection.clear_all(self.selector.as_ref());
                        for element in self.matches_for(&value) {
                            self.selection
                                .highlight_and_pick(self.selector.as_ref(), model, element);
                        }
                    }
                    None => {}
                }
            }
        }
        Ok(())
    }

    /// Pointer moved over the 3D scene
    ///
    /// Ray-casts a transient prepick, unless the pointer is currently on
    /// a tree row.
    pub fn on_scene_hover(&mut self) -> Option<SceneHit> {
        if self.pointer_over_tree {
            return None;
        }
        self.model_id?;
        let hit = self.selector.hit_test_and_prepick();
        self.selection.record_scene_prepick(hit);
        hit
    }

    /// Double-click on the 3D scene
    ///
    /// The scene's own hit test determines the highlight target, a second
    /// call commits the pick. No hit means "deselect everything": all
    /// marks drop and the panel clears.
    pub fn on_scene_double_click(&mut self) -> Result<Option<SceneHit>> {
        if self.model_id.is_none() {
            return Ok(None);
        }
        let hit = self.selector.hit_test_and_highlight();
        self.selector.hit_test_and_pick();

        match hit {
            None => {
                self.selection.clear_all(self.selector.as_ref());
                self.panel = None;
                log::debug!("double-click on empty space, selection cleared");
                Ok(None)
            }
            Some(hit) => {
                self.selection.record_scene_pick(hit);
                let props = self.provider.element_properties(hit.model, hit.element)?;
                self.panel = Some(PropertyPanel::from_properties(&props));
                Ok(Some(hit))
            }
        }
    }

    fn matches_for(&self, leaf_value: &str) -> Vec<ElementId> {
        match &self.spatial_root {
            Some(root) => Matcher::new(&self.property_index).find_matches(root, leaf_value),
            None => Vec::new(),
        }
    }

    fn node_kind(&self, kind: TreeKind, id: NodeId) -> Option<TreeNodeKind> {
        self.view(kind)?.node(id).map(|n| n.kind.clone())
    }

    fn view(&self, kind: TreeKind) -> Option<&TreeView> {
        match kind {
            TreeKind::Spatial => self.spatial_view.as_ref(),
            TreeKind::Taxonomy => self.taxonomy_view.as_ref(),
        }
    }

    fn view_mut(&mut self, kind: TreeKind) -> Option<&mut TreeView> {
        match kind {
            TreeKind::Spatial => self.spatial_view.as_mut(),
            TreeKind::Taxonomy => self.taxonomy_view.as_mut(),
        }
    }

    /// The current model, if one is loaded
    pub fn model_id(&self) -> Option<ModelId> {
        self.model_id
    }

    /// The spatial containment view
    pub fn spatial_view(&self) -> Option<&TreeView> {
        self.spatial_view.as_ref()
    }

    /// The classification view
    pub fn taxonomy_view(&self) -> Option<&TreeView> {
        self.taxonomy_view.as_ref()
    }

    /// The derived classification taxonomy
    pub fn taxonomy(&self) -> &TaxonomyNode {
        &self.taxonomy
    }

    /// The property panel of the active pick, if any
    pub fn panel(&self) -> Option<&PropertyPanel> {
        self.panel.as_ref()
    }

    /// The selection state machine
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }
}
