//! Tree views, selection state and session lifecycle for the FDK explorer
//!
//! This crate turns the data model into what a host UI actually renders:
//! two collapsible tree views (spatial containment and FDK classification)
//! over one 3D scene, a hover/pick/highlight state machine that keeps the
//! trees and the scene consistent, and the [`ModelSession`] that owns all
//! per-model state and rebuilds it on every load.
//!
//! The crate produces plain serializable view models; widget construction
//! and rendering stay with the host.

pub mod panel;
pub mod selection;
pub mod session;
pub mod tree;

pub use panel::PropertyPanel;
pub use selection::SelectionState;
pub use session::{ModelSession, TreeKind};
pub use tree::{NodeId, TreeEvent, TreeNode, TreeNodeKind, TreeRow, TreeView};

#[cfg(test)]
pub(crate) mod testing;
