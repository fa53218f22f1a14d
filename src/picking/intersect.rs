//! Ray/shape intersection in a node's local frame.

use bevy::math::{Affine3A, Ray3d};
use bevy::prelude::*;

use crate::scene::NodeShape;

/// Parallel-ray tolerance for the ring plane test.
const PLANE_EPSILON: f32 = 1e-8;

/// Smallest non-negative `t` with `|origin + t * dir - center| = radius`.
///
/// `dir` need not be normalized; `t` is in units of `dir`. A ray starting
/// inside the sphere hits the far side.
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let a = dir.length_squared();
    if a == 0.0 {
        return None;
    }
    let half_b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = (-half_b - sqrt_d) / a;
    if near >= 0.0 {
        return Some(near);
    }
    let far = (-half_b + sqrt_d) / a;
    (far >= 0.0).then_some(far)
}

/// Intersection with an annulus centered at the origin of the XY plane.
pub fn ray_ring(origin: Vec3, dir: Vec3, inner: f32, outer: f32) -> Option<f32> {
    if dir.z.abs() < PLANE_EPSILON {
        return None;
    }
    let t = -origin.z / dir.z;
    if t < 0.0 {
        return None;
    }
    let r = (origin + dir * t).truncate().length();
    (inner..=outer).contains(&r).then_some(t)
}

/// Distance along a world-space ray to a node with the given world transform.
///
/// The ray is taken into the node's local frame, where the shape is defined.
/// Affine maps keep the ray parameter, so the local `t` is the world distance.
pub(crate) fn ray_node(shape: NodeShape, world: Affine3A, ray: Ray3d) -> Option<f32> {
    if matches!(shape, NodeShape::None) {
        return None;
    }
    let inverse = world.inverse();
    let origin = inverse.transform_point3(ray.origin);
    let dir = inverse.transform_vector3(ray.direction.as_vec3());
    if !origin.is_finite() || !dir.is_finite() {
        return None;
    }

    match shape {
        NodeShape::None => None,
        NodeShape::Sphere { radius } => ray_sphere(origin, dir, Vec3::ZERO, radius),
        NodeShape::Ring { inner, outer } => ray_ring(origin, dir, inner, outer),
    }
}
