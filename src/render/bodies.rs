//! Render entities for scene nodes.
//!
//! Every scene node gets one entity, parented the same way as in the scene
//! graph, so the scene root's drag rotation carries the whole system. Nodes
//! appended by the feed are spawned on the frame they appear.

use bevy::prelude::*;

use crate::body::{BodyDetails, BodyKind, CelestialBody, DecorationKind};
use crate::catalog::FixedBody;
use crate::registry::BodyRegistry;
use crate::scene::{NodeId, NodeRole, NodeShape, SceneGraph, SceneNode};
use crate::types::FrameSet;

/// Marks the render entity mirroring a scene node.
#[derive(Component, Clone, Copy, Debug)]
pub struct SceneNodeEntity(pub NodeId);

/// Entities spawned so far, indexed by node.
#[derive(Resource, Default, Debug)]
pub struct SceneEntities {
    by_node: Vec<Entity>,
}

impl SceneEntities {
    pub fn get(&self, node: NodeId) -> Option<Entity> {
        self.by_node.get(node.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node.is_empty()
    }
}

/// Plugin spawning render entities for new scene nodes.
pub struct BodyVisualsPlugin;

impl Plugin for BodyVisualsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneEntities>()
            .add_systems(Update, spawn_new_nodes.in_set(FrameSet::Present));
    }
}

/// How a node is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub color: Color,
    pub emissive: Option<LinearRgba>,
    pub alpha_mode: AlphaMode,
    pub unlit: bool,
    pub double_sided: bool,
}

impl Appearance {
    fn solid(color: Color) -> Self {
        Self {
            color,
            emissive: None,
            alpha_mode: AlphaMode::Opaque,
            unlit: false,
            double_sided: false,
        }
    }

    fn material(&self) -> StandardMaterial {
        let mut material = StandardMaterial {
            base_color: self.color,
            emissive: self.emissive.unwrap_or(LinearRgba::BLACK),
            alpha_mode: self.alpha_mode,
            unlit: self.unlit,
            double_sided: self.double_sided,
            ..default()
        };
        if self.double_sided {
            material.cull_mode = None;
        }
        material
    }
}

/// Surface color of a fixed body.
fn fixed_color(body: FixedBody) -> Color {
    match body {
        FixedBody::Sun => Color::srgb(1.0, 0.9, 0.3),
        FixedBody::Mercury => Color::srgb_u8(0x8c, 0x78, 0x53),
        FixedBody::Venus => Color::srgb_u8(0xfd, 0xbc, 0xb4),
        FixedBody::Earth => Color::srgb_u8(0x00, 0x66, 0xcc),
        FixedBody::Mars => Color::srgb_u8(0xcd, 0x5c, 0x5c),
        FixedBody::Jupiter => Color::srgb_u8(0xd4, 0xa5, 0x74),
        FixedBody::Saturn => Color::srgb_u8(0xf4, 0xe7, 0xd1),
    }
}

/// Appearance of a registered body.
pub fn body_appearance(body: &CelestialBody) -> Appearance {
    match &body.details {
        BodyDetails::NearEarthObject(neo) => {
            let color = if neo.hazardous {
                Color::srgb(1.0, 0.0, 0.0)
            } else {
                Color::srgb(0.0, 1.0, 0.0)
            };
            Appearance {
                emissive: Some(color.to_linear() * 0.5),
                ..Appearance::solid(color)
            }
        }
        _ => {
            let color = FixedBody::from_name(&body.name)
                .map(fixed_color)
                .unwrap_or(Color::srgb(0.7, 0.7, 0.7));
            if body.kind == BodyKind::Star {
                Appearance {
                    emissive: Some(color.to_linear() * 4.0),
                    unlit: true,
                    ..Appearance::solid(color)
                }
            } else {
                Appearance::solid(color)
            }
        }
    }
}

/// Appearance of a decoration.
pub fn decoration_appearance(kind: DecorationKind) -> Appearance {
    match kind {
        DecorationKind::Glow { layer } => {
            let layer = f32::from(layer.max(1));
            Appearance {
                color: Color::srgba(1.0, 1.0 - layer * 0.1, 0.3, 0.3 / layer),
                emissive: None,
                alpha_mode: AlphaMode::Add,
                unlit: true,
                double_sided: false,
            }
        }
        DecorationKind::Atmosphere => Appearance {
            color: Color::srgba_u8(0x44, 0x44, 0xff, 26),
            emissive: None,
            alpha_mode: AlphaMode::Add,
            unlit: true,
            double_sided: false,
        },
        DecorationKind::Rings => Appearance {
            color: Color::srgba_u8(0xff, 0xcc, 0x99, 153),
            emissive: None,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            double_sided: true,
        },
    }
}

/// Appearance for any node; `None` for nodes without geometry.
pub fn node_appearance(node: &SceneNode, registry: &BodyRegistry) -> Option<Appearance> {
    if node.shape == NodeShape::None {
        return None;
    }
    match node.role {
        NodeRole::Root => None,
        NodeRole::Body(id) => registry.get(id).map(body_appearance),
        NodeRole::Decoration(kind) => Some(decoration_appearance(kind)),
    }
}

fn node_mesh(shape: NodeShape) -> Option<Mesh> {
    match shape {
        NodeShape::None => None,
        NodeShape::Sphere { radius } => Some(Sphere::new(radius).mesh().uv(64, 32)),
        NodeShape::Ring { inner, outer } => Some(Mesh::from(Annulus::new(inner, outer))),
    }
}

/// Spawn entities for nodes added since the last frame.
pub fn spawn_new_nodes(
    mut commands: Commands,
    scene: Res<SceneGraph>,
    registry: Res<BodyRegistry>,
    mut entities: ResMut<SceneEntities>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if entities.len() >= scene.len() {
        return;
    }

    let first_new = entities.len();
    for (id, node) in scene.iter().skip(first_new) {
        let mut entity = commands.spawn((
            SceneNodeEntity(id),
            node.transform,
            Visibility::default(),
        ));

        if let Some(parent) = node.parent.and_then(|p| entities.get(p)) {
            entity.insert(ChildOf(parent));
        }

        if let (Some(mesh), Some(look)) = (node_mesh(node.shape), node_appearance(node, &registry)) {
            entity.insert((
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(materials.add(look.material())),
            ));
        }

        if let NodeRole::Body(body) = node.role {
            if let Some(body) = registry.get(body) {
                entity.insert(Name::new(body.name.clone()));
            }
        }

        entities.by_node.push(entity.id());
    }

    debug!("Spawned {} scene entities", scene.len() - first_new);
}
