// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry derivation across a whole floor's children.

use approx::assert_relative_eq;
use floorgeo_core::{NetworkRegion, NodeKind, Scene, Segment, VectorNetwork, Vertex};
use floorgeo_geometry::{ShapeGeometry, ShapeGeometryBuilder};

/// A floor mixing every node kind; each child must come out with the
/// right geometry (or none) in one pass over the children.
#[test]
fn mixed_floor_children() {
    let mut network = VectorNetwork::new(
        vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(30.0, 0.0),
            Vertex::new(30.0, 30.0),
            Vertex::new(0.0, 30.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(20.0, 10.0),
            Vertex::new(20.0, 20.0),
            Vertex::new(10.0, 20.0),
        ],
        vec![
            Segment::new(0, 1),
            Segment::new(1, 2),
            Segment::new(2, 3),
            Segment::new(3, 0),
            Segment::new(4, 5),
            Segment::new(5, 6),
            Segment::new(6, 7),
            Segment::new(7, 4),
        ],
    );
    network.regions.push(NetworkRegion::new(
        "hall",
        [vec![0, 1, 2, 3], vec![4, 5, 6, 7]],
    ));

    let mut builder = Scene::builder("Building", 400.0, 300.0);
    let root = builder.root();
    let floor = builder.add_child(root, "1F", NodeKind::Frame, 0.0, 0.0, 200.0, 100.0);
    let hall = builder.add_child(
        floor,
        "hall",
        NodeKind::VectorShape(network),
        40.0,
        10.0,
        30.0,
        30.0,
    );
    let zone = builder.add_child(floor, "zone", NodeKind::Frame, 100.0, 20.0, 40.0, 30.0);
    let pillar = builder.add_child(floor, "pillar", NodeKind::Ellipse, 150.0, 60.0, 10.0, 10.0);
    let marker = builder.add_child(
        floor,
        "exit",
        NodeKind::Instance { template: None },
        5.0,
        5.0,
        4.0,
        4.0,
    );
    let scene = builder.finish();

    let shape_builder = ShapeGeometryBuilder::new(&scene, floor);

    // Vector shape: polygon with one hole, both rings closed
    let ShapeGeometry::Polygon { rings } = shape_builder.build(hall).unwrap().unwrap() else {
        panic!("expected polygon for hall");
    };
    assert_eq!(rings.len(), 2);
    for ring in &rings {
        assert_eq!(ring.first(), ring.last());
    }
    // First exterior vertex: (40+0, 100-(10+0))
    assert_relative_eq!(rings[0][0].x, 40.0);
    assert_relative_eq!(rings[0][0].y, 90.0);
    // First hole vertex: (40+10, 100-(10+10))
    assert_relative_eq!(rings[1][0].x, 50.0);
    assert_relative_eq!(rings[1][0].y, 80.0);

    // Rectangular container: one closed 5-point ring
    let ShapeGeometry::Polygon { rings } = shape_builder.build(zone).unwrap().unwrap() else {
        panic!("expected polygon for zone");
    };
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0].len(), 5);
    assert_relative_eq!(rings[0][0].x, 100.0);
    assert_relative_eq!(rings[0][0].y, 80.0);
    assert_relative_eq!(rings[0][2].x, 140.0);
    assert_relative_eq!(rings[0][2].y, 50.0);

    // Ellipse: point + radius
    let ShapeGeometry::Point { center, radius } = shape_builder.build(pillar).unwrap().unwrap()
    else {
        panic!("expected point for pillar");
    };
    assert_relative_eq!(center.x, 155.0);
    assert_relative_eq!(center.y, 35.0);
    assert_relative_eq!(radius, 5.0);

    // Marker instances are not the shape builder's business
    assert!(shape_builder.build(marker).unwrap().is_none());
}
