//! Scene graph: hierarchical placement of bodies and their decorations.
//!
//! Nodes live in an arena owned by the graph; each node stores the index of
//! its parent, so ancestor queries are O(depth) with no back-pointers. Node 0
//! is the scene root, which carries the global drag rotation.

use bevy::math::Affine3A;
use bevy::prelude::*;

use crate::body::{CelestialBody, DecorationKind, DecorationShape};
use crate::types::BodyId;

/// Index of a node in the scene arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The scene root.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
    Root,
    /// The node carrying a body's identity.
    Body(BodyId),
    /// A decorative child; carries no identity.
    Decoration(DecorationKind),
}

/// Hit-testable geometry of a node, in its local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeShape {
    None,
    Sphere { radius: f32 },
    /// Annulus in the local XY plane.
    Ring { inner: f32, outer: f32 },
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Transform relative to the parent.
    pub transform: Transform,
    pub shape: NodeShape,
    /// Whether ray tests consider this node at all.
    pub pickable: bool,
    pub role: NodeRole,
    /// Accumulated self-rotation about the local Y axis (radians).
    pub spin: f32,
}

impl SceneNode {
    /// Identity carried by this node, if it is a body node.
    pub fn body(&self) -> Option<BodyId> {
        match self.role {
            NodeRole::Body(id) => Some(id),
            _ => None,
        }
    }
}

/// Arena of scene nodes.
///
/// Kept 1:1 with [`crate::registry::BodyRegistry`]: body nodes are only
/// created through [`SceneGraph::insert_body`], which the registry calls on append.
#[derive(Resource, Clone, Debug)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    /// Body node for each registered body, indexed by `BodyId`.
    body_nodes: Vec<NodeId>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    pub fn new() -> Self {
        let root = SceneNode {
            parent: None,
            children: Vec::new(),
            transform: Transform::IDENTITY,
            shape: NodeShape::None,
            pickable: false,
            role: NodeRole::Root,
            spin: 0.0,
        };
        Self {
            nodes: vec![root],
            body_nodes: Vec::new(),
        }
    }

    fn push(&mut self, parent: NodeId, node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Add a body node under the root plus one child per decoration.
    ///
    /// Bodies must be inserted in registry order.
    pub(crate) fn insert_body(&mut self, body: &CelestialBody) -> NodeId {
        debug_assert_eq!(body.id.index(), self.body_nodes.len());

        let node = self.push(
            NodeId::ROOT,
            SceneNode {
                parent: Some(NodeId::ROOT),
                children: Vec::new(),
                transform: Transform::from_translation(body.position_at(0.0)),
                shape: NodeShape::Sphere {
                    radius: body.radius,
                },
                pickable: true,
                role: NodeRole::Body(body.id),
                spin: 0.0,
            },
        );

        for decoration in &body.decorations {
            let (shape, transform) = match decoration.shape {
                DecorationShape::Shell { radius } => {
                    (NodeShape::Sphere { radius }, Transform::IDENTITY)
                }
                // Annulus geometry is in XY; tilt it into the equatorial plane.
                DecorationShape::Ring { inner, outer } => (
                    NodeShape::Ring { inner, outer },
                    Transform::from_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                ),
            };
            self.push(
                node,
                SceneNode {
                    parent: Some(node),
                    children: Vec::new(),
                    transform,
                    shape,
                    pickable: decoration.pickable,
                    role: NodeRole::Decoration(decoration.kind),
                    spin: 0.0,
                },
            );
        }

        self.body_nodes.push(node);
        node
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Number of body nodes.
    pub fn body_count(&self) -> usize {
        self.body_nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    pub fn root(&self) -> &SceneNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    /// All nodes in arena order, root first.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    pub fn body_node(&self, body: BodyId) -> Option<NodeId> {
        self.body_nodes.get(body.index()).copied()
    }

    /// Set the global rotation of the scene root.
    pub fn set_root_rotation(&mut self, rotation: Quat) {
        self.nodes[NodeId::ROOT.index()].transform.rotation = rotation;
    }

    /// The node itself followed by each ancestor up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.node(id).map(|_| id), move |current| {
            self.nodes[current.index()].parent
        })
    }

    /// Walk up from `id` to the first node carrying a body identity.
    pub fn owning_body(&self, id: NodeId) -> Option<BodyId> {
        self.ancestors(id)
            .find_map(|node| self.nodes[node.index()].body())
    }

    /// World transform of a node (root rotation included).
    pub fn world_affine(&self, id: NodeId) -> Affine3A {
        self.ancestors(id).fold(Affine3A::IDENTITY, |acc, node| {
            self.nodes[node.index()].transform.compute_affine() * acc
        })
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_affine(id).translation.into()
    }

    /// World position of a body, if registered.
    pub fn body_world_position(&self, body: BodyId) -> Option<Vec3> {
        self.body_node(body).map(|node| self.world_position(node))
    }
}
