// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collaborator traits
//!
//! These traits are the seams to the external collaborators: the model
//! file loader, the per-element property provider, and the 3D scene
//! selector. The exploration core only ever talks to `Arc<dyn _>` handles,
//! so hosts can back them with a file parser, an IPC bridge or test mocks.
//!
//! All methods are synchronous. Where the host's backend is asynchronous
//! (a wasm bridge, a network fetch), the host blocks or adapts at this
//! boundary; the core's traversals are then free to batch calls without
//! affecting taxonomy results, which are insertion-order independent.

use crate::{ElementNode, ElementProperties, ElementId, ModelId, Result, SceneHit};

/// Handle to a model the loader has placed into the scene
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadedModel {
    /// Identifier the scene knows the model's objects by
    pub model_id: ModelId,
}

/// Model file loading and scene object lifecycle
///
/// # Example
///
/// ```ignore
/// use fdk_explorer_model::ModelLoader;
///
/// fn open(loader: &dyn ModelLoader, url: &str) -> fdk_explorer_model::Result<()> {
///     let loaded = loader.load_model(url)?;
///     let root = loader.spatial_structure(loaded.model_id)?;
///     println!("loaded {} nodes", root.node_count());
///     Ok(())
/// }
/// ```
pub trait ModelLoader: Send + Sync {
    /// Load a model file into the scene
    ///
    /// # Arguments
    /// * `url` - Location of the model file
    ///
    /// # Returns
    /// A handle carrying the new model id, or an error if loading failed.
    /// Load failures are the caller's problem; the core does not catch them.
    fn load_model(&self, url: &str) -> Result<LoadedModel>;

    /// Fetch the spatial containment tree of a loaded model
    ///
    /// # Arguments
    /// * `model` - The model to fetch the tree for
    ///
    /// # Returns
    /// The root node (typically the project)
    fn spatial_structure(&self, model: ModelId) -> Result<ElementNode>;

    /// Render the drop shadow for a loaded model
    ///
    /// Purely cosmetic; callers treat failure as recoverable.
    fn render_shadow(&self, model: ModelId) -> Result<()>;

    /// Remove a model's objects from the scene
    ///
    /// Called for every tracked model during session teardown, before
    /// the next load is issued.
    fn unload_model(&self, model: ModelId) -> Result<()>;
}

/// On-demand access to an element's property data
pub trait PropertyProvider: Send + Sync {
    /// Fetch everything known about one element
    ///
    /// # Arguments
    /// * `model` - The model the element belongs to
    /// * `element` - The element to fetch
    ///
    /// # Returns
    /// The element's type, attributes, property sets and materials.
    /// A failure here is local to the element: traversals log and move on.
    fn element_properties(&self, model: ModelId, element: ElementId)
        -> Result<ElementProperties>;
}

/// Selection marks in the 3D scene
///
/// Three escalating marks: prepick (transient hover), pick (persistent
/// selection), highlight (emphasis overlay). Id-based calls address known
/// elements; the `hit_test_*` calls resolve the current pointer position
/// against the scene geometry first.
pub trait SceneSelector: Send + Sync {
    /// Apply the transient hover mark to the given elements
    ///
    /// Replaces the previous prepick; an empty `ids` slice clears the
    /// mark entirely.
    fn prepick(&self, model: ModelId, ids: &[ElementId]);

    /// Apply the persistent pick mark
    ///
    /// # Arguments
    /// * `additive` - keep existing picks instead of replacing them
    fn pick(&self, model: ModelId, ids: &[ElementId], additive: bool);

    /// Apply the emphasis overlay
    ///
    /// # Arguments
    /// * `additive` - keep existing highlights instead of replacing them
    fn highlight(&self, model: ModelId, ids: &[ElementId], additive: bool);

    /// Remove the pick mark from every element
    fn unpick_all(&self);

    /// Remove the emphasis overlay from every element
    fn unhighlight_all(&self);

    /// Ray-cast the pointer and prepick the hit element
    fn hit_test_and_prepick(&self) -> Option<SceneHit>;

    /// Ray-cast the pointer and highlight the hit element
    fn hit_test_and_highlight(&self) -> Option<SceneHit>;

    /// Ray-cast the pointer and pick the hit element
    fn hit_test_and_pick(&self) -> Option<SceneHit>;
}
