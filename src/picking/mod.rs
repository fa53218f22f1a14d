//! Ray-based object picking.
//!
//! A pick casts a ray from the camera through the pointer, tests it against
//! every pickable node of the scene graph (decorations included), takes the
//! nearest hit and walks up the parent chain to the node carrying a body
//! identity. Nodes flagged non-pickable never take part in the ray test, so a
//! glow shell in front of its own body cannot steal the pick.

mod intersect;
#[cfg(test)]
mod proptest_picking;

use bevy::math::{Dir3, Ray3d};
use bevy::prelude::*;

use crate::camera::{CameraPose, Lens};
use crate::scene::{NodeId, SceneGraph};
use crate::types::BodyId;

pub use intersect::{ray_ring, ray_sphere};

/// Result of a successful pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    /// Body the hit resolved to.
    pub body: BodyId,
    /// Node the ray actually hit (may be a decoration).
    pub node: NodeId,
    /// Distance along the ray in world units.
    pub distance: f32,
}

/// Convert a cursor position in logical pixels to normalized device coordinates.
///
/// NDC x grows right and y grows up, both in [-1, 1] across the viewport.
pub fn cursor_to_ndc(cursor: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / viewport.x * 2.0 - 1.0,
        -(cursor.y / viewport.y * 2.0 - 1.0),
    ))
}

/// World-space ray from the camera through a point in NDC.
pub fn ray_from_ndc(pose: &CameraPose, lens: &Lens, aspect: f32, ndc: Vec2) -> Ray3d {
    let transform = pose.transform();
    let half_height = (lens.fov_y * 0.5).tan();
    let half_width = half_height * aspect;

    let direction = transform.forward().as_vec3()
        + transform.right().as_vec3() * (ndc.x * half_width)
        + transform.up().as_vec3() * (ndc.y * half_height);

    Ray3d::new(
        pose.position,
        Dir3::new(direction).unwrap_or(transform.forward()),
    )
}

/// Nearest pickable node hit by the ray, with its distance.
///
/// Ties in distance keep the earlier node in arena order.
pub fn nearest_hit(scene: &SceneGraph, ray: Ray3d) -> Option<(NodeId, f32)> {
    let mut best: Option<(NodeId, f32)> = None;

    for (id, node) in scene.iter() {
        if !node.pickable {
            continue;
        }
        let world = scene.world_affine(id);
        let Some(distance) = intersect::ray_node(node.shape, world, ray) else {
            continue;
        };
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((id, distance));
        }
    }

    best
}

/// Resolve a ray to a body: nearest hit, then the first identified ancestor.
///
/// Returns `None` when the ray misses or the hit node has no identified
/// ancestor; callers treat that as a no-op.
pub fn pick(scene: &SceneGraph, ray: Ray3d) -> Option<PickHit> {
    let (node, distance) = nearest_hit(scene, ray)?;
    let body = scene.owning_body(node)?;
    Some(PickHit {
        body,
        node,
        distance,
    })
}

/// Pick from normalized pointer coordinates and the current camera.
pub fn pick_at(
    scene: &SceneGraph,
    pose: &CameraPose,
    lens: &Lens,
    aspect: f32,
    ndc: Vec2,
) -> Option<PickHit> {
    pick(scene, ray_from_ndc(pose, lens, aspect, ndc))
}
