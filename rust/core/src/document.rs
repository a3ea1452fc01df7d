// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene document deserialization
//!
//! The producing application dumps its node tree as nested JSON; this
//! module flattens that document into the [`Scene`] arena, validating
//! vector networks on the way in so downstream geometry code can rely
//! on index consistency.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::VectorNetwork;
use crate::scene::{NodeId, NodeKind, Scene, SceneBuilder};
use crate::template::TemplateId;

/// Root of a serialized scene dump
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Name of the selected root container
    pub name: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

/// One node of the serialized tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentNode {
    pub name: String,
    #[serde(flatten)]
    pub kind: DocumentKind,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

/// Node kind tag as it appears in the document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DocumentKind {
    VectorShape { network: VectorNetwork },
    RectangularContainer,
    Ellipse,
    MarkerInstance {
        #[serde(default)]
        template: Option<TemplateId>,
    },
    Other,
}

impl SceneDocument {
    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Flatten the document into a scene arena
    ///
    /// Vector networks are validated here; a segment or region loop
    /// referencing an out-of-bounds index rejects the whole document.
    pub fn into_scene(self) -> Result<Scene> {
        let mut builder = Scene::builder(self.name, self.width, self.height);
        let root = builder.root();
        for child in self.children {
            append_node(&mut builder, root, child)?;
        }
        Ok(builder.finish())
    }
}

fn append_node(builder: &mut SceneBuilder, parent: NodeId, node: DocumentNode) -> Result<()> {
    let kind = match node.kind {
        DocumentKind::VectorShape { network } => {
            network.validate()?;
            NodeKind::VectorShape(network)
        }
        DocumentKind::RectangularContainer => NodeKind::Frame,
        DocumentKind::Ellipse => NodeKind::Ellipse,
        DocumentKind::MarkerInstance { template } => NodeKind::Instance { template },
        DocumentKind::Other => NodeKind::Other,
    };
    let id = builder.add_child(parent, node.name, kind, node.x, node.y, node.width, node.height);
    for child in node.children {
        append_node(builder, id, child)?;
    }
    Ok(())
}
