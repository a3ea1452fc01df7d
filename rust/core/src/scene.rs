// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flat scene arena
//!
//! Nodes live in a single indexed vector with parent/child links, so
//! walking the containment chain is pointer-free index arithmetic. The
//! scene is a read-only projection for the duration of one export;
//! nothing is mutated after construction.

use crate::network::VectorNetwork;
use crate::template::TemplateId;

/// Index of a node within a [`Scene`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Runtime kind of a scene node
///
/// Closed set: the geometry builder matches exhaustively, so "any other
/// kind contributes nothing" is enforced by construction.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Closed shape described by an unordered segment set
    VectorShape(VectorNetwork),
    /// Rectangular container (floors and plain rectangular regions)
    Frame,
    /// Ellipse-like node, exported as center + radius
    Ellipse,
    /// Marker instance stamped from a shared template
    Instance { template: Option<TemplateId> },
    /// Anything else (groups, text, ...); contributes no feature but
    /// still participates in coordinate accumulation
    Other,
}

impl NodeKind {
    #[inline]
    pub fn is_frame(&self) -> bool {
        matches!(self, NodeKind::Frame)
    }

    #[inline]
    pub fn is_instance(&self) -> bool {
        matches!(self, NodeKind::Instance { .. })
    }
}

/// One node of the scene tree
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    /// Local offset relative to the parent container
    pub x: f64,
    pub y: f64,
    /// Bounding size
    pub width: f64,
    pub height: f64,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Scene tree flattened into an arena
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    /// Start building a scene from a root container of the given size
    pub fn builder(root_name: impl Into<String>, width: f64, height: f64) -> SceneBuilder {
        SceneBuilder::new(root_name, width, height)
    }

    /// The root container (always index 0)
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up a node by id
    #[inline]
    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct children of a node
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SceneNode> {
        self.node(id).children.iter().map(move |&c| self.node(c))
    }

    /// All nodes beneath `id` in depth-first pre-order, excluding `id`
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.node(id).children.clone();
        stack.reverse();
        Descendants { scene: self, stack }
    }
}

/// Depth-first pre-order traversal over a subtree
pub struct Descendants<'a> {
    scene: &'a Scene,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SceneNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.scene.node(id);
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Incremental scene construction
///
/// Ids handed out by [`SceneBuilder::add_child`] stay valid in the
/// finished [`Scene`]. Passing an id that did not come from this
/// builder panics.
pub struct SceneBuilder {
    nodes: Vec<SceneNode>,
}

impl SceneBuilder {
    fn new(root_name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            nodes: vec![SceneNode {
                id: NodeId(0),
                name: root_name.into(),
                kind: NodeKind::Frame,
                x: 0.0,
                y: 0.0,
                width,
                height,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root container's id
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child node under `parent` and return its id
    #[allow(clippy::too_many_arguments)]
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        kind: NodeKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SceneNode {
            id,
            name: name.into(),
            kind,
            x,
            y,
            width,
            height,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0 as usize].children.push(id);
        id
    }

    /// Finish construction
    pub fn finish(self) -> Scene {
        Scene { nodes: self.nodes }
    }
}
