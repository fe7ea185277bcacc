//! Hover/pick/highlight state machine
//!
//! Tracks the three escalating selection marks for the current model and
//! mirrors every transition into the 3D scene through the
//! [`SceneSelector`]. Per element the states are
//! `Idle → Prepicked → Picked → (Highlighted)`; highlighted always
//! implies picked, and at most one exclusive pick group is active for
//! property-panel purposes.

use fdk_explorer_model::{ElementId, ModelId, SceneHit, SceneSelector};
use rustc_hash::FxHashSet;

/// Selection marks of the current model session
#[derive(Default)]
pub struct SelectionState {
    /// Transient hover group; empty when nothing is prepicked
    prepicked: Vec<ElementId>,
    /// Persistently picked elements
    picked: FxHashSet<ElementId>,
    /// Emphasized elements, always a subset of `picked`
    highlighted: FxHashSet<ElementId>,
    /// The exclusive pick group shown in the property panel
    active: Option<SceneHit>,
}

impl SelectionState {
    /// Fresh state with every element idle
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the transient hover mark, replacing any previous one
    pub fn prepick(&mut self, selector: &dyn SceneSelector, model: ModelId, ids: &[ElementId]) {
        selector.prepick(model, ids);
        self.prepicked = ids.to_vec();
    }

    /// Clear the transient hover mark
    ///
    /// Issued on pointer-leave so a hover-then-leave sequence cannot
    /// leave a stale prepick in the scene.
    pub fn clear_prepick(&mut self, selector: &dyn SceneSelector, model: ModelId) {
        if !self.prepicked.is_empty() {
            selector.prepick(model, &[]);
            self.prepicked.clear();
        }
    }

    /// Pick exactly one element, discarding every previous mark
    ///
    /// The unpick/unhighlight calls go out before the new pick is
    /// established, so the scene never shows both selections at once.
    pub fn pick_exclusive(&mut self, selector: &dyn SceneSelector, model: ModelId, id: ElementId) {
        selector.unhighlight_all();
        selector.unpick_all();
        self.reset_marks();
        selector.pick(model, &[id], false);
        self.picked.insert(id);
        self.active = Some(SceneHit::new(model, id));
    }

    /// Highlight and pick one element additively
    ///
    /// The taxonomy-match path: each match accumulates on top of the
    /// previous ones. Highlight implies pick, applied together.
    pub fn highlight_and_pick(
        &mut self,
        selector: &dyn SceneSelector,
        model: ModelId,
        id: ElementId,
    ) {
        selector.highlight(model, &[id], true);
        selector.pick(model, &[id], true);
        self.prepicked.clear();
        self.picked.insert(id);
        self.highlighted.insert(id);
    }

    /// Record the outcome of a scene-side hover hit test
    ///
    /// The scene applied (or cleared) the transient mark during its own
    /// ray-cast; only the bookkeeping is updated here.
    pub fn record_scene_prepick(&mut self, hit: Option<SceneHit>) {
        self.prepicked = hit.map(|h| vec![h.element]).unwrap_or_default();
    }

    /// Record a pick+highlight the scene established itself
    ///
    /// The double-click protocol lets the scene's own hit test apply the
    /// marks; the state machine only records the outcome as the new
    /// exclusive group.
    pub fn record_scene_pick(&mut self, hit: SceneHit) {
        self.reset_marks();
        self.picked.insert(hit.element);
        self.highlighted.insert(hit.element);
        self.active = Some(hit);
    }

    /// Transition every element back to idle
    pub fn clear_all(&mut self, selector: &dyn SceneSelector) {
        selector.unhighlight_all();
        selector.unpick_all();
        self.reset_marks();
    }

    fn reset_marks(&mut self) {
        self.prepicked.clear();
        self.picked.clear();
        self.highlighted.clear();
        self.active = None;
    }

    /// Currently prepicked elements
    pub fn prepicked(&self) -> &[ElementId] {
        &self.prepicked
    }

    /// Whether an element carries the pick mark
    pub fn is_picked(&self, id: ElementId) -> bool {
        self.picked.contains(&id)
    }

    /// Whether an element carries the emphasis overlay
    pub fn is_highlighted(&self, id: ElementId) -> bool {
        self.highlighted.contains(&id)
    }

    /// The picked set
    pub fn picked(&self) -> &FxHashSet<ElementId> {
        &self.picked
    }

    /// The highlighted set
    pub fn highlighted(&self) -> &FxHashSet<ElementId> {
        &self.highlighted
    }

    /// The exclusive pick group, if one is active
    pub fn active(&self) -> Option<SceneHit> {
        self.active
    }
}
