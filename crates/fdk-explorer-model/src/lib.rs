// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! FDK-Explorer Model - Shared types and collaborator traits
//!
//! This crate provides the core abstractions for exploring a loaded building
//! model through its spatial containment tree and the FDK classification
//! derived from element property sets. It defines the data model plus the
//! traits implemented by the external collaborators (model loader, property
//! provider, 3D scene selector), allowing the exploration core to stay
//! backend-agnostic.
//!
//! # Architecture
//!
//! The crate is organized around a few key pieces:
//!
//! - [`ElementNode`] - the immutable spatial containment tree of a session
//! - [`TaxonomyNode`] - the 4-level FDK classification mapping
//! - [`PropertyProvider`] - on-demand access to an element's property sets
//! - [`SceneSelector`] - prepick/pick/highlight marks in the 3D scene
//! - [`ModelLoader`] - model file loading and scene object lifecycle
//!
//! # Example
//!
//! ```ignore
//! use fdk_explorer_model::{ModelLoader, PropertyProvider, ModelId};
//!
//! let loader: Arc<dyn ModelLoader> = host_loader();
//! let loaded = loader.load_model("models/depot.ifc")?;
//! let root = loader.spatial_structure(loaded.model_id)?;
//! println!("{} elements", root.element_ids().len());
//! ```

pub mod error;
pub mod properties;
pub mod spatial;
pub mod taxonomy;
pub mod traits;
pub mod types;

// Re-export all public types
pub use error::*;
pub use properties::*;
pub use spatial::*;
pub use taxonomy::*;
pub use traits::*;
pub use types::*;
