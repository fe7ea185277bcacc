// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! FDK classification over the spatial element tree
//!
//! This crate derives the 4-level FDK taxonomy (Fachbereich → Objektgruppe
//! → Untergruppe → Objekttyp) from the ad-hoc property sets scattered over
//! a model's elements, and resolves a chosen taxonomy leaf back to the set
//! of elements it stands for.
//!
//! Building the taxonomy visits every element once and memoizes each
//! element's flattened property maps in a [`PropertyIndex`]; the
//! [`Matcher`] reads that index instead of re-fetching property sets on
//! every leaf activation.

pub mod index;
pub mod indexer;
pub mod matcher;

pub use index::PropertyIndex;
pub use indexer::{TaxonomyBuild, TaxonomyIndexer};
pub use matcher::Matcher;

#[cfg(test)]
pub(crate) mod testing;
