// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # FloorGeo Processing
//!
//! Shared export pipeline: assembles per-floor marker and shape
//! feature collections from a scene and serializes them as GeoJSON.
//!
//! The pipeline is synchronous and side-effect-free over in-memory
//! data; the only concurrent phase is the marker category fan-out,
//! which joins before a floor is finalized.

pub mod assembler;
pub mod error;
pub mod export;
pub mod geojson;

pub use assembler::{FloorAssembler, FloorExport};
pub use error::{Error, Result};
pub use export::{export_floors, to_json, to_json_pretty};
pub use geojson::{Feature, FeatureCollection, Geometry, Properties};
