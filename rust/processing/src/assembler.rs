// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor assembly
//!
//! Groups one floor container's contents into two feature collections:
//! markers (points, found by depth-first search over the whole subtree)
//! and shapes (polygons and ellipse points, direct children only).
//! Category lookups fan out concurrently across the floor's unique
//! templates and are joined before the marker collection is finalized;
//! a failed lookup degrades that marker's category to an empty string.

use floorgeo_core::{NodeId, NodeKind, Scene, SceneNode, TemplateId, TemplateLibrary};
use floorgeo_geometry::{flip_y, resolve_in_frame, ShapeGeometry, ShapeGeometryBuilder};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::geojson::{Feature, FeatureCollection, Geometry, Properties};

/// One floor's worth of output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorExport {
    pub floor_id: String,
    pub markers: FeatureCollection,
    pub shapes: FeatureCollection,
}

/// Assembles per-floor feature collections
pub struct FloorAssembler<'a> {
    scene: &'a Scene,
    library: &'a dyn TemplateLibrary,
}

impl<'a> FloorAssembler<'a> {
    pub fn new(scene: &'a Scene, library: &'a dyn TemplateLibrary) -> Self {
        Self { scene, library }
    }

    /// Assemble one floor; `None` when the floor contributed nothing
    pub fn assemble(&self, floor: NodeId) -> Option<FloorExport> {
        let node = self.scene.node(floor);
        let markers = self.collect_markers(floor);
        let shapes = self.collect_shapes(floor);

        if markers.is_empty() && shapes.is_empty() {
            tracing::debug!(floor = %node.name, "Floor contributed nothing, dropped");
            return None;
        }

        tracing::debug!(
            floor = %node.name,
            markers = markers.len(),
            shapes = shapes.len(),
            "Assembled floor"
        );
        Some(FloorExport {
            floor_id: node.name.clone(),
            markers: FeatureCollection::new(markers),
            shapes: FeatureCollection::new(shapes),
        })
    }

    /// One point feature per top-level marker instance in the subtree.
    ///
    /// An instance whose immediate parent is itself an instance is one
    /// of a composite icon's internal parts and is excluded to avoid
    /// double-counting.
    fn collect_markers(&self, floor: NodeId) -> Vec<Feature> {
        let floor_height = self.scene.node(floor).height;

        let mut candidates: Vec<(&SceneNode, Option<TemplateId>)> = Vec::new();
        for node in self.scene.descendants(floor) {
            let NodeKind::Instance { template } = &node.kind else {
                continue;
            };
            let parent_is_instance = node
                .parent
                .is_some_and(|p| self.scene.node(p).kind.is_instance());
            if parent_is_instance {
                continue;
            }
            candidates.push((node, template.clone()));
        }

        let categories = self.resolve_categories(&candidates);

        let mut features = Vec::with_capacity(candidates.len());
        for (node, template) in candidates {
            let origin = match resolve_in_frame(self.scene, node.id, floor) {
                Ok(p) => p,
                Err(err) => {
                    tracing::warn!(marker = %node.name, %err, "Skipping marker outside floor frame");
                    continue;
                }
            };
            let center_x = origin.x + node.width / 2.0;
            let center_y = origin.y + node.height / 2.0;

            let parent_name = node
                .parent
                .map(|p| self.scene.node(p).name.as_str())
                .unwrap_or_default();
            let id = format!("{}-{}", parent_name, node.name);
            let category = template
                .as_ref()
                .and_then(|t| categories.get(t).cloned())
                .unwrap_or_default();

            features.push(Feature::new(
                Geometry::Point {
                    coordinates: [center_x, flip_y(floor_height, center_y)],
                },
                Properties::marker(id, category),
            ));
        }
        features
    }

    /// Resolve the floor's unique templates concurrently, joining into
    /// a map before any marker feature is built. One lookup failing
    /// never blocks or fails its siblings.
    fn resolve_categories(
        &self,
        candidates: &[(&SceneNode, Option<TemplateId>)],
    ) -> FxHashMap<TemplateId, String> {
        let unique: FxHashSet<TemplateId> = candidates
            .iter()
            .filter_map(|(_, template)| template.clone())
            .collect();
        let unique: Vec<TemplateId> = unique.into_iter().collect();

        unique
            .into_par_iter()
            .map(|id| {
                let category = match self.library.category(&id) {
                    Ok(category) => category,
                    Err(err) => {
                        tracing::warn!(template = %id, %err, "Category lookup failed");
                        String::new()
                    }
                };
                (id, category)
            })
            .collect()
    }

    /// One feature per direct child of the floor; not recursive
    fn collect_shapes(&self, floor: NodeId) -> Vec<Feature> {
        let builder = ShapeGeometryBuilder::new(self.scene, floor);
        let mut features = Vec::new();

        for &child in &self.scene.node(floor).children {
            let node = self.scene.node(child);
            match builder.build(child) {
                Ok(Some(ShapeGeometry::Polygon { rings })) => {
                    let coordinates = rings
                        .into_iter()
                        .map(|ring| ring.into_iter().map(|p| [p.x, p.y]).collect())
                        .collect();
                    features.push(Feature::new(
                        Geometry::Polygon { coordinates },
                        Properties::shape(node.name.clone()),
                    ));
                }
                Ok(Some(ShapeGeometry::Point { center, radius })) => {
                    features.push(Feature::new(
                        Geometry::Point {
                            coordinates: [center.x, center.y],
                        },
                        Properties::ellipse(node.name.clone(), radius),
                    ));
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(node = %node.name, %err, "Skipping shape");
                }
            }
        }
        features
    }
}
