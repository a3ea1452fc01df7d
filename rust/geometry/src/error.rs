// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use floorgeo_core::NodeId;
use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during geometry derivation
#[derive(Error, Debug)]
pub enum Error {
    #[error("Node {0} lies outside the reference frame")]
    OutsideFrame(NodeId),

    #[error("Core error: {0}")]
    CoreError(#[from] floorgeo_core::Error),
}
