//! Mock collaborators shared by the selection and session tests

use fdk_explorer_model::{
    ElementId, ElementNode, ElementProperties, ExplorerError, LoadedModel, ModelId, ModelLoader,
    PropertyProvider, PropertySet, Result, SceneHit, SceneSelector,
};
use rustc_hash::FxHashMap;
use std::sync::Mutex;

/// Property provider backed by a plain map
#[derive(Default)]
pub struct MapProvider {
    entries: FxHashMap<ElementId, ElementProperties>,
}

impl MapProvider {
    pub fn set(&mut self, element: u32, props: ElementProperties) {
        self.entries.insert(ElementId(element), props);
    }
}

impl PropertyProvider for MapProvider {
    fn element_properties(
        &self,
        _model: ModelId,
        element: ElementId,
    ) -> Result<ElementProperties> {
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

/// Every call a scene selector can receive
#[derive(Clone, Debug, PartialEq)]
pub enum SelectorCall {
    Prepick(ModelId, Vec<ElementId>),
    Pick(ModelId, Vec<ElementId>, bool),
    Highlight(ModelId, Vec<ElementId>, bool),
    UnpickAll,
    UnhighlightAll,
    HitTestAndPrepick,
    HitTestAndHighlight,
    HitTestAndPick,
}

/// Scene selector that records every call and serves a scripted hit
#[derive(Default)]
pub struct RecordingSelector {
    calls: Mutex<Vec<SelectorCall>>,
    hit: Mutex<Option<SceneHit>>,
}

impl RecordingSelector {
    pub fn calls(&self) -> Vec<SelectorCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Script what the next hit tests resolve to
    pub fn set_hit(&self, hit: Option<SceneHit>) {
        *self.hit.lock().unwrap() = hit;
    }

    fn record(&self, call: SelectorCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SceneSelector for RecordingSelector {
    fn prepick(&self, model: ModelId, ids: &[ElementId]) {
        self.record(SelectorCall::Prepick(model, ids.to_vec()));
    }

    fn pick(&self, model: ModelId, ids: &[ElementId], additive: bool) {
        self.record(SelectorCall::Pick(model, ids.to_vec(), additive));
    }

    fn highlight(&self, model: ModelId, ids: &[ElementId], additive: bool) {
        self.record(SelectorCall::Highlight(model, ids.to_vec(), additive));
    }

    fn unpick_all(&self) {
        self.record(SelectorCall::UnpickAll);
    }

    fn unhighlight_all(&self) {
        self.record(SelectorCall::UnhighlightAll);
    }

    fn hit_test_and_prepick(&self) -> Option<SceneHit> {
        self.record(SelectorCall::HitTestAndPrepick);
        *self.hit.lock().unwrap()
    }

    fn hit_test_and_highlight(&self) -> Option<SceneHit> {
        self.record(SelectorCall::HitTestAndHighlight);
        *self.hit.lock().unwrap()
    }

    fn hit_test_and_pick(&self) -> Option<SceneHit> {
        self.record(SelectorCall::HitTestAndPick);
        *self.hit.lock().unwrap()
    }
}

/// Loader serving a configurable spatial tree, with unloads recorded
pub struct ScriptedLoader {
    tree: Mutex<ElementNode>,
    next_id: Mutex<u32>,
    unloaded: Mutex<Vec<ModelId>>,
    fail_load: Mutex<bool>,
}

impl ScriptedLoader {
    pub fn new(tree: ElementNode) -> Self {
        Self {
            tree: Mutex::new(tree),
            next_id: Mutex::new(0),
            unloaded: Mutex::new(Vec::new()),
            fail_load: Mutex::new(false),
        }
    }

    /// Swap the tree served for the next load
    pub fn set_tree(&self, tree: ElementNode) {
        *self.tree.lock().unwrap() = tree;
    }

    pub fn set_fail_load(&self, fail: bool) {
        *self.fail_load.lock().unwrap() = fail;
    }

    pub fn unloaded(&self) -> Vec<ModelId> {
        self.unloaded.lock().unwrap().clone()
    }
}

impl ModelLoader for ScriptedLoader {
    fn load_model(&self, url: &str) -> Result<LoadedModel> {
        if *self.fail_load.lock().unwrap() {
            return Err(ExplorerError::model_load(url));
        }
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        Ok(LoadedModel {
            model_id: ModelId(*next),
        })
    }

    fn spatial_structure(&self, _model: ModelId) -> Result<ElementNode> {
        Ok(self.tree.lock().unwrap().clone())
    }

    fn render_shadow(&self, _model: ModelId) -> Result<()> {
        Ok(())
    }

    fn unload_model(&self, model: ModelId) -> Result<()> {
        self.unloaded.lock().unwrap().push(model);
        Ok(())
    }
}
