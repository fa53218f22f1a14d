//! Per-frame orbital motion.
//!
//! Orbital position is a closed-form function of simulated time, so it does
//! not drift with frame rate. Self-rotation is a fixed increment per frame and
//! therefore does depend on frame rate.

#[cfg(test)]
mod proptest_orbit;

use bevy::prelude::*;

use crate::body::CelestialBody;
use crate::scene::SceneGraph;

/// Advance every body to simulated time `elapsed`.
///
/// Bodies with an orbit get their closed-form position; every body gets one
/// self-rotation increment. Returns the number of bodies visited.
pub fn advance(bodies: &[CelestialBody], scene: &mut SceneGraph, elapsed: f64) -> usize {
    let mut visited = 0;
    for body in bodies {
        let Some(node_id) = scene.body_node(body.id) else {
            continue;
        };
        let Some(node) = scene.node_mut(node_id) else {
            continue;
        };

        if let Some(orbit) = &body.orbit {
            node.transform.translation = orbit.position_at(elapsed);
        }
        node.spin += body.self_rotation_rate;
        node.transform.rotation = Quat::from_rotation_y(node.spin);
        visited += 1;
    }
    visited
}
