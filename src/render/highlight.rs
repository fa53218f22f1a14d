//! Selection highlighting.
//!
//! Draws a camera-facing ring around the selected body.

use bevy::prelude::*;

use crate::camera::CameraController;
use crate::registry::BodyRegistry;
use crate::scene::SceneGraph;
use crate::selection::SelectedBody;
use crate::types::FrameSet;

/// Ring radius relative to the body radius.
const HIGHLIGHT_SCALE: f32 = 1.5;

/// Plugin providing selection highlighting.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_highlight.in_set(FrameSet::Present));
    }
}

fn draw_highlight(
    mut gizmos: Gizmos,
    selected: Res<SelectedBody>,
    registry: Res<BodyRegistry>,
    scene: Res<SceneGraph>,
    camera: Res<CameraController>,
) {
    let Some(id) = selected.body else {
        return;
    };
    let (Some(body), Some(center)) = (registry.get(id), scene.body_world_position(id)) else {
        return;
    };

    let facing = Transform::from_translation(center)
        .looking_at(camera.pose.position, Vec3::Y)
        .rotation;
    let color = Color::srgba(0.0, 1.0, 1.0, 0.8);

    gizmos
        .circle(Isometry3d::new(center, facing), body.radius * HIGHLIGHT_SCALE, color)
        .resolution(48);
}
