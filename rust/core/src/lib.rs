// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # FloorGeo Core
//!
//! Scene model for floor-plan GeoJSON export.
//!
//! This crate owns the input side of the pipeline:
//!
//! - **Scene arena**: the producing application's node tree flattened
//!   into an indexed vector with parent/child links
//! - **Vector networks**: unordered segment sets describing closed
//!   shapes, with optional regions for holes
//! - **Scene documents**: serde-based loading of a serialized tree dump
//! - **Template registry**: the external marker-category lookup,
//!   abstracted behind [`TemplateLibrary`]
//!
//! All entities are read-only projections for the duration of one
//! export; nothing persists between invocations.

pub mod document;
pub mod error;
pub mod network;
pub mod scene;
pub mod template;

pub use document::{DocumentKind, DocumentNode, SceneDocument};
pub use error::{Error, Result};
pub use network::{NetworkRegion, Segment, VectorNetwork, Vertex};
pub use scene::{NodeId, NodeKind, Scene, SceneBuilder, SceneNode};
pub use template::{StaticTemplateLibrary, TemplateId, TemplateLibrary};
