// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core identifier types
//!
//! This module defines the type-safe identifiers used throughout the explorer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe element identifier
///
/// Wraps the stable integer id an element carries within its model
/// (the source file's express id).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ElementId {
    fn from(id: u32) -> Self {
        ElementId(id)
    }
}

impl From<ElementId> for u32 {
    fn from(id: ElementId) -> Self {
        id.0
    }
}

/// Type-safe model identifier
///
/// Assigned by the model loader when a file is loaded into the scene.
/// Element ids are only unique within one model, so every selection mark
/// is keyed by the `(ModelId, ElementId)` pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct ModelId(pub u32);

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model:{}", self.0)
    }
}

impl From<u32> for ModelId {
    fn from(id: u32) -> Self {
        ModelId(id)
    }
}

impl From<ModelId> for u32 {
    fn from(id: ModelId) -> Self {
        id.0
    }
}

/// A resolved pointer hit in the 3D scene
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SceneHit {
    /// Model the hit geometry belongs to
    pub model: ModelId,
    /// Element the hit geometry belongs to
    pub element: ElementId,
}

impl SceneHit {
    /// Create a new scene hit
    pub fn new(model: ModelId, element: ElementId) -> Self {
        Self { model, element }
    }
}
