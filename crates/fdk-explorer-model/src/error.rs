// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for explorer operations

use crate::{ElementId, ModelId};
use thiserror::Error;

/// Result type alias for explorer operations
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Errors that can occur while exploring a model
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Model file could not be loaded into the scene
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    /// Spatial containment tree could not be fetched
    #[error("Failed to fetch spatial structure of {model}: {message}")]
    SpatialStructure { model: ModelId, message: String },

    /// Property sets could not be fetched for one element
    #[error("Failed to fetch properties of {element} in {model}: {message}")]
    PropertyFetch {
        model: ModelId,
        element: ElementId,
        message: String,
    },

    /// Scene-level operation failed (shadow render, object removal)
    #[error("Scene error: {0}")]
    Scene(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl ExplorerError {
    /// Create a new model load error
    pub fn model_load(msg: impl Into<String>) -> Self {
        ExplorerError::ModelLoad(msg.into())
    }

    /// Create a new spatial structure error
    pub fn spatial(model: ModelId, msg: impl Into<String>) -> Self {
        ExplorerError::SpatialStructure {
            model,
            message: msg.into(),
        }
    }

    /// Create a new property fetch error
    pub fn property_fetch(model: ModelId, element: ElementId, msg: impl Into<String>) -> Self {
        ExplorerError::PropertyFetch {
            model,
            element,
            message: msg.into(),
        }
    }

    /// Create a new scene error
    pub fn scene(msg: impl Into<String>) -> Self {
        ExplorerError::Scene(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        ExplorerError::Other(msg.into())
    }
}
