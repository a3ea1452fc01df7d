// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vector network data for closed shapes
//!
//! A vector shape's boundary arrives as an unordered set of straight
//! segments between indexed vertices, optionally grouped into named
//! regions for shapes with holes. Ordering the segments into rings is
//! the geometry crate's job; this module only owns the data.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// A 2D point in the owning shape's local coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An unordered pair of vertex indices within one shape's vertex list
///
/// Segments carry no direction; `{a: 0, b: 1}` and `{a: 1, b: 0}`
/// describe the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub a: usize,
    pub b: usize,
}

impl Segment {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Whether the segment touches the given vertex index
    #[inline]
    pub fn is_incident_to(&self, vertex: usize) -> bool {
        self.a == vertex || self.b == vertex
    }

    /// The endpoint opposite to `vertex` (callers must check incidence first)
    #[inline]
    pub fn other_end(&self, vertex: usize) -> usize {
        if self.a == vertex {
            self.b
        } else {
            self.a
        }
    }
}

/// A named grouping of segment indices into one or more loops
///
/// The first loop of the first declared region is conventionally the
/// exterior boundary; subsequent loops denote holes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRegion {
    pub name: String,
    /// Each loop is a list of indices into the owning network's segment list
    pub loops: SmallVec<[Vec<usize>; 2]>,
}

impl NetworkRegion {
    pub fn new(name: impl Into<String>, loops: impl IntoIterator<Item = Vec<usize>>) -> Self {
        Self {
            name: name.into(),
            loops: loops.into_iter().collect(),
        }
    }
}

/// A vector shape's geometry: vertices, segments and optional regions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorNetwork {
    pub vertices: Vec<Vertex>,
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub regions: Vec<NetworkRegion>,
}

impl VectorNetwork {
    /// Create a network with no regions
    pub fn new(vertices: Vec<Vertex>, segments: Vec<Segment>) -> Self {
        Self {
            vertices,
            segments,
            regions: Vec::new(),
        }
    }

    /// Check index consistency: every segment endpoint must name an
    /// existing vertex and every region loop entry an existing segment.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (i, seg) in self.segments.iter().enumerate() {
            if seg.a >= vertex_count || seg.b >= vertex_count {
                return Err(Error::MalformedDocument(format!(
                    "segment {} references vertex out of bounds ({}..{} of {})",
                    i, seg.a, seg.b, vertex_count
                )));
            }
        }
        let segment_count = self.segments.len();
        for region in &self.regions {
            for loop_edges in &region.loops {
                if let Some(&bad) = loop_edges.iter().find(|&&e| e >= segment_count) {
                    return Err(Error::MalformedDocument(format!(
                        "region '{}' references segment {} out of bounds (of {})",
                        region.name, bad, segment_count
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn square_network() -> VectorNetwork {
        VectorNetwork::new(
            vec![
                Vertex::new(0.0, 0.0),
                Vertex::new(10.0, 0.0),
                Vertex::new(10.0, 10.0),
                Vertex::new(0.0, 10.0),
            ],
            vec![
                Segment::new(0, 1),
                Segment::new(1, 2),
                Segment::new(2, 3),
                Segment::new(3, 0),
            ],
        )
    }

    #[test]
    fn test_segment_endpoints() {
        let seg = Segment::new(3, 7);
        assert!(seg.is_incident_to(3));
        assert!(seg.is_incident_to(7));
        assert!(!seg.is_incident_to(5));
        assert_eq!(seg.other_end(3), 7);
        assert_eq!(seg.other_end(7), 3);
    }

    #[test]
    fn test_validate_ok() {
        assert!(square_network().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_segment() {
        let mut network = square_network();
        network.segments.push(Segment::new(0, 9));
        assert!(network.validate().is_err());
    }

    #[test]
    fn test_validate_bad_region_loop() {
        let mut network = square_network();
        network.regions.push(NetworkRegion {
            name: "outer".to_string(),
            loops: smallvec![vec![0, 1, 2, 12]],
        });
        assert!(network.validate().is_err());
    }
}
