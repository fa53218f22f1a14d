//! Orbit path rendering using Bevy Gizmos.
//!
//! Each orbiting body gets a faint circle in the orbital plane, turned with
//! the scene root so paths stay under their bodies while dragging.

use bevy::prelude::*;

use crate::registry::BodyRegistry;
use crate::scene::SceneGraph;
use crate::types::FrameSet;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Update, draw_orbit_paths.in_set(FrameSet::Present));
    }
}

/// Settings for orbit path rendering.
#[derive(Resource, Clone, Debug)]
pub struct OrbitPathSettings {
    pub visible: bool,
    pub segments: u32,
    pub color: Color,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 100,
            color: Color::srgba_u8(0x44, 0x44, 0x44, 77),
        }
    }
}

/// Isometry placing a gizmo circle (drawn in local XY) in the rotated orbital plane.
pub fn orbit_plane(root_rotation: Quat) -> Isometry3d {
    Isometry3d::new(
        Vec3::ZERO,
        root_rotation * Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
    )
}

fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    registry: Res<BodyRegistry>,
    scene: Res<SceneGraph>,
) {
    if !settings.visible {
        return;
    }

    let plane = orbit_plane(scene.root().transform.rotation);
    for orbit in registry.iter().filter_map(|body| body.orbit.as_ref()) {
        gizmos
            .circle(plane, orbit.center_distance, settings.color)
            .resolution(settings.segments);
    }
}
