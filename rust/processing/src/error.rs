// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can surface from the export pipeline
///
/// Geometry-construction failures never appear here; they are handled
/// locally as "produce nothing for this unit". Only structurally
/// impossible preconditions and serialization failures surface.
#[derive(Error, Debug)]
pub enum Error {
    #[error("No floor frames found under the root container")]
    NoFloors,

    #[error("Core error: {0}")]
    CoreError(#[from] floorgeo_core::Error),

    #[error("Geometry error: {0}")]
    GeometryError(#[from] floorgeo_geometry::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
