// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GeoJSON output types
//!
//! Minimal serde mirror of the GeoJSON feature encodings the consumer
//! expects. Rings arrive already closed from the geometry crate; this
//! module only shapes the JSON.

use serde::{Deserialize, Serialize};

/// A GeoJSON geometry: point or polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: [f64; 2],
    },
    Polygon {
        /// Exterior ring first, holes after; every ring has its first
        /// pair repeated as the last
        coordinates: Vec<Vec<[f64; 2]>>,
    },
}

/// Flat feature properties
///
/// Every feature carries an identifier; markers add a category and
/// ellipse points add a radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl Properties {
    /// Properties of a shape feature (identifier only)
    pub fn shape(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: None,
            radius: None,
        }
    }

    /// Properties of a marker feature
    pub fn marker(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: Some(category.into()),
            radius: None,
        }
    }

    /// Properties of an ellipse point feature
    pub fn ellipse(id: impl Into<String>, radius: f64) -> Self {
        Self {
            id: id.into(),
            category: None,
            radius: Some(radius),
        }
    }
}

/// A GeoJSON feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Properties) -> Self {
        Self {
            geometry,
            properties,
        }
    }
}

/// A GeoJSON feature collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_point_feature_encoding() {
        let feature = Feature::new(
            Geometry::Point {
                coordinates: [50.0, 20.0],
            },
            Properties::marker("1F-exit", "exit"),
        );
        let value = serde_json::to_value(&feature).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [50.0, 20.0]},
                "properties": {"id": "1F-exit", "category": "exit"}
            })
        );
    }

    #[test]
    fn test_polygon_feature_encoding() {
        let ring = vec![
            [0.0, 50.0],
            [100.0, 50.0],
            [100.0, 0.0],
            [0.0, 0.0],
            [0.0, 50.0],
        ];
        let feature = Feature::new(
            Geometry::Polygon {
                coordinates: vec![ring.clone()],
            },
            Properties::shape("zone"),
        );
        let value = serde_json::to_value(&feature).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Feature",
                "geometry": {"type": "Polygon", "coordinates": [ring]},
                "properties": {"id": "zone"}
            })
        );
    }

    #[test]
    fn test_collection_round_trip() {
        let collection = FeatureCollection::new(vec![Feature::new(
            Geometry::Point {
                coordinates: [1.0, 2.0],
            },
            Properties::ellipse("pillar", 4.5),
        )]);
        let text = serde_json::to_string(&collection).unwrap();
        let back: FeatureCollection = serde_json::from_str(&text).unwrap();
        assert_eq!(back, collection);
        assert_eq!(back.features[0].properties.radius, Some(4.5));
    }
}
