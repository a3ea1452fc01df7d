// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinate resolution
//!
//! Node positions arrive relative to their immediate parent, in a
//! top-left-origin, Y-down screen space. Resolution accumulates offsets
//! up the containment chain into a chosen reference frame; the vertical
//! flip then converts into the bottom-left-origin, Y-up convention of
//! the output format.

use floorgeo_core::{NodeId, Scene};
use nalgebra::Point2;

use crate::error::{Error, Result};

/// Compute `node`'s position expressed in `frame`'s local space.
///
/// Walks the containment chain from `node` upward, summing each
/// intermediate node's local offset, until `frame` is reached. Exiting
/// the hierarchy at the root without meeting `frame` is an error, so
/// callers cannot silently use wrong coordinates for nodes outside the
/// reference subtree.
pub fn resolve_in_frame(scene: &Scene, node: NodeId, frame: NodeId) -> Result<Point2<f64>> {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut current = node;

    while current != frame {
        let n = scene.node(current);
        x += n.x;
        y += n.y;
        match n.parent {
            Some(parent) => current = parent,
            None => return Err(Error::OutsideFrame(node)),
        }
    }

    Ok(Point2::new(x, y))
}

/// Convert a Y-down coordinate into Y-up within a frame of the given
/// height. Applied exactly once per coordinate, after all offset
/// accumulation.
#[inline]
pub fn flip_y(frame_height: f64, y: f64) -> f64 {
    frame_height - y
}
