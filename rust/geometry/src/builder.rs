// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-node shape geometry derivation
//!
//! Dispatches on node kind to produce at most one geometry per node:
//! vector shapes become polygons (exterior ring plus hole rings traced
//! from region loops), rectangular containers become their bounding-box
//! ring, and ellipse-like nodes collapse to a center point with a
//! radius. Marker instances are handled by the floor assembler, not
//! here.
//!
//! A geometry is either fully valid or entirely absent: rings that
//! trace to fewer than 3 distinct vertices are dropped (the whole
//! polygon when the exterior fails, just the hole otherwise), and no
//! partial coordinates are ever emitted.

use floorgeo_core::{NodeId, NodeKind, Scene, SceneNode, Segment, VectorNetwork};
use nalgebra::Point2;

use crate::error::Result;
use crate::resolve::{flip_y, resolve_in_frame};
use crate::ring::{distinct_count, trace_ring};

/// An ordered, closed coordinate sequence (first point repeated last)
pub type Ring = Vec<Point2<f64>>;

/// Geometry derived for one node, in the floor's output space
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    /// Exterior ring first, hole rings after
    Polygon { rings: Vec<Ring> },
    /// Ellipse approximation: bounding-box center plus half-width
    Point { center: Point2<f64>, radius: f64 },
}

/// Derives geometry for nodes of one floor
pub struct ShapeGeometryBuilder<'a> {
    scene: &'a Scene,
    floor: NodeId,
    floor_height: f64,
}

impl<'a> ShapeGeometryBuilder<'a> {
    /// Create a builder whose output space is `floor`'s local frame,
    /// flipped to Y-up using the floor's own height
    pub fn new(scene: &'a Scene, floor: NodeId) -> Self {
        let floor_height = scene.node(floor).height;
        Self {
            scene,
            floor,
            floor_height,
        }
    }

    /// Produce zero or one geometry for `node`.
    ///
    /// Returns `Ok(None)` for kinds that contribute nothing and for
    /// shapes whose boundary cannot be reconstructed. A node that
    /// cannot be resolved within the floor frame is an error the
    /// caller is expected to handle by skipping the node.
    pub fn build(&self, node: NodeId) -> Result<Option<ShapeGeometry>> {
        let n = self.scene.node(node);
        match &n.kind {
            NodeKind::VectorShape(network) => self.vector_polygon(n, network),
            NodeKind::Frame => self.bounding_rectangle(n),
            NodeKind::Ellipse => self.ellipse_point(n),
            NodeKind::Instance { .. } | NodeKind::Other => Ok(None),
        }
    }

    fn vector_polygon(
        &self,
        node: &SceneNode,
        network: &VectorNetwork,
    ) -> Result<Option<ShapeGeometry>> {
        let origin = resolve_in_frame(self.scene, node.id, self.floor)?;

        // Exterior boundary: the full segment set traces the cycle the
        // first segment belongs to. Hole segments form disjoint
        // components and stall the walk, so they never leak in.
        let exterior_indices = trace_ring(&network.segments);
        if distinct_count(&exterior_indices) < 3 {
            return Ok(None);
        }
        let Some(exterior) = self.closed_ring(&exterior_indices, network, origin) else {
            return Ok(None);
        };

        let mut rings = vec![exterior];

        // Hole rings come from the loops after the first of the first
        // declared region. Each loop is traced independently over its
        // own segment subset; a loop that fails stays out without
        // dropping the polygon.
        if let Some(region) = network.regions.first() {
            for loop_edges in region.loops.iter().skip(1) {
                let Some(loop_segments) = loop_segment_subset(network, loop_edges) else {
                    continue;
                };
                let hole_indices = trace_ring(&loop_segments);
                if distinct_count(&hole_indices) < 3 {
                    continue;
                }
                if let Some(hole) = self.closed_ring(&hole_indices, network, origin) {
                    rings.push(hole);
                }
            }
        }

        Ok(Some(ShapeGeometry::Polygon { rings }))
    }

    fn bounding_rectangle(&self, node: &SceneNode) -> Result<Option<ShapeGeometry>> {
        let origin = resolve_in_frame(self.scene, node.id, self.floor)?;
        let (w, h) = (node.width, node.height);

        // Top-left, top-right, bottom-right, bottom-left, closed
        let corners = [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h), (0.0, 0.0)];
        let ring = corners
            .iter()
            .map(|&(cx, cy)| self.to_output(origin, cx, cy))
            .collect();

        Ok(Some(ShapeGeometry::Polygon { rings: vec![ring] }))
    }

    fn ellipse_point(&self, node: &SceneNode) -> Result<Option<ShapeGeometry>> {
        let origin = resolve_in_frame(self.scene, node.id, self.floor)?;
        let center = self.to_output(origin, node.width / 2.0, node.height / 2.0);

        Ok(Some(ShapeGeometry::Point {
            center,
            radius: node.width / 2.0,
        }))
    }

    /// Map traced vertex indices to output coordinates and close the
    /// ring by repeating the first point. Returns `None` when an index
    /// has no backing vertex (malformed network).
    fn closed_ring(
        &self,
        indices: &[usize],
        network: &VectorNetwork,
        origin: Point2<f64>,
    ) -> Option<Ring> {
        let mut ring = Vec::with_capacity(indices.len() + 1);
        for &idx in indices {
            let vertex = network.vertices.get(idx)?;
            ring.push(self.to_output(origin, vertex.x, vertex.y));
        }
        let first = *ring.first()?;
        ring.push(first);
        Some(ring)
    }

    /// Offset a node-local coordinate into the floor frame and flip
    /// the vertical axis. The flip happens exactly once, here.
    #[inline]
    fn to_output(&self, origin: Point2<f64>, local_x: f64, local_y: f64) -> Point2<f64> {
        Point2::new(
            origin.x + local_x,
            flip_y(self.floor_height, origin.y + local_y),
        )
    }
}

/// Restrict a network's segment set to one region loop.
///
/// Returns `None` when the loop references a segment index out of
/// bounds, which marks the loop malformed and skippable.
fn loop_segment_subset(network: &VectorNetwork, loop_edges: &[usize]) -> Option<Vec<Segment>> {
    loop_edges
        .iter()
        .map(|&e| network.segments.get(e).copied())
        .collect()
}
