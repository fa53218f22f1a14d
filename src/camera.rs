//! Camera system for the star map.
//!
//! The [`CameraController`] owns the camera pose, the global scene rotation
//! accumulated by dragging, and the drag state machine. Zoom scales the camera
//! position radially; navigation relocates the camera to a standoff from a body.

use bevy::prelude::*;

use crate::types::{
    CAMERA_FAR, CAMERA_FOV_Y, CAMERA_NEAR, FrameSet, INITIAL_CAMERA_POSITION,
    INITIAL_CAMERA_TARGET,
};

/// Rotation gain per pixel of drag.
pub const DRAG_GAIN: f32 = 0.005;

/// Movement on either axis beyond which a press becomes a drag (pixels).
pub const DRAG_THRESHOLD_PX: f32 = 2.0;

/// Radial zoom step per wheel tick.
pub const ZOOM_STEP: f32 = 0.1;

/// Camera distance from the Sun after navigating to it.
pub const STAR_STANDOFF: f32 = 200.0;

/// Camera distance from any other body after navigating to it.
pub const BODY_STANDOFF: f32 = 100.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Tunables for the camera controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTuning {
    pub drag_gain: f32,
    pub drag_threshold_px: f32,
    pub zoom_step: f32,
    pub star_standoff: f32,
    pub body_standoff: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            drag_gain: DRAG_GAIN,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            zoom_step: ZOOM_STEP,
            star_standoff: STAR_STANDOFF,
            body_standoff: BODY_STANDOFF,
        }
    }
}

/// Camera position and look-at target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: INITIAL_CAMERA_POSITION,
            target: INITIAL_CAMERA_TARGET,
        }
    }
}

impl CameraPose {
    /// Transform for a camera at this pose, +Y up.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.target, Vec3::Y)
    }
}

/// Perspective projection parameters shared by the camera and picking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lens {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fov_y: CAMERA_FOV_Y,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

/// Accumulated drag rotation applied to the scene root.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneRotation {
    /// Rotation about X, driven by vertical drag.
    pub rx: f32,
    /// Rotation about Y, driven by horizontal drag.
    pub ry: f32,
}

impl SceneRotation {
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rx, self.ry, 0.0)
    }
}

/// Drag state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        /// Previous pointer sample.
        last: Vec2,
        /// Cumulative movement since pointer-down, per axis.
        travel: Vec2,
        /// Whether movement has crossed the drag threshold.
        dragged: bool,
    },
}

/// Outcome of releasing the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRelease {
    /// The press never became a drag: dispatch a pick.
    Click,
    /// A drag ended; no pick.
    DragEnd,
    /// Release without a matching press.
    Ignored,
}

/// Resource owning camera pose, scene rotation and drag state.
#[derive(Resource, Clone, Debug, Default)]
pub struct CameraController {
    pub pose: CameraPose,
    pub rotation: SceneRotation,
    pub phase: DragPhase,
    pub lens: Lens,
    pub tuning: CameraTuning,
}

impl CameraController {
    pub fn new(tuning: CameraTuning) -> Self {
        Self {
            tuning,
            ..default()
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Idle → Dragging, recording the pointer position.
    pub fn pointer_down(&mut self, cursor: Vec2) {
        self.phase = DragPhase::Dragging {
            last: cursor,
            travel: Vec2::ZERO,
            dragged: false,
        };
    }

    /// Accumulate rotation from the pointer delta while dragging.
    pub fn pointer_move(&mut self, cursor: Vec2) {
        let DragPhase::Dragging {
            last,
            travel,
            dragged,
        } = &mut self.phase
        else {
            return;
        };

        let delta = cursor - *last;
        *travel += delta.abs();
        if travel.x > self.tuning.drag_threshold_px || travel.y > self.tuning.drag_threshold_px {
            *dragged = true;
        }

        self.rotation.ry += delta.x * self.tuning.drag_gain;
        self.rotation.rx += delta.y * self.tuning.drag_gain;
        *last = cursor;
    }

    /// Dragging → Idle; reports whether the press was a click.
    pub fn pointer_up(&mut self) -> PointerRelease {
        let phase = std::mem::take(&mut self.phase);
        match phase {
            DragPhase::Idle => PointerRelease::Ignored,
            DragPhase::Dragging { dragged: false, .. } => PointerRelease::Click,
            DragPhase::Dragging { dragged: true, .. } => PointerRelease::DragEnd,
        }
    }

    /// Pointer left the surface: abandon any drag without a click.
    pub fn pointer_leave(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Scale the camera position radially by one wheel tick.
    ///
    /// Positive `scroll` moves toward the target origin, negative away. No clamping.
    pub fn zoom(&mut self, scroll: f32) {
        if scroll == 0.0 {
            return;
        }
        let factor = if scroll > 0.0 {
            1.0 - self.tuning.zoom_step
        } else {
            1.0 + self.tuning.zoom_step
        };
        self.pose.position *= factor;
    }

    /// Move to the standoff position for a body at `body_position` and look at it.
    ///
    /// The camera sits between the body and the origin. A body at the origin
    /// has no direction of its own, so the current viewing direction is kept.
    pub fn navigate_to(&mut self, body_position: Vec3, is_star: bool) {
        let standoff = if is_star {
            self.tuning.star_standoff
        } else {
            self.tuning.body_standoff
        };

        let direction = body_position
            .try_normalize()
            .or_else(|| (body_position - self.pose.position).try_normalize())
            .unwrap_or(Vec3::NEG_Z);

        self.pose.position = body_position - direction * standoff;
        self.pose.target = body_position;
    }

    /// Restore the initial pose and zero the scene rotation.
    pub fn reset(&mut self) {
        self.pose = CameraPose::default();
        self.rotation = SceneRotation::default();
        self.phase = DragPhase::Idle;
    }
}

/// Plugin spawning the render camera and keeping it in sync with the controller.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, apply_camera_pose.in_set(FrameSet::Present));
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, controller: Res<CameraController>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: controller.lens.fov_y,
            near: controller.lens.near,
            far: controller.lens.far,
            ..default()
        }),
        controller.pose.transform(),
        MainCamera,
    ));
}

/// Copy the controller pose onto the camera transform.
fn apply_camera_pose(
    controller: Res<CameraController>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !controller.is_changed() {
        return;
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = controller.pose.transform();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_small_move_is_click() {
        let mut controller = CameraController::default();
        controller.pointer_down(Vec2::new(100.0, 100.0));
        controller.pointer_move(Vec2::new(101.0, 100.0));
        assert_eq!(controller.pointer_up(), PointerRelease::Click);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_large_move_is_drag() {
        let mut controller = CameraController::default();
        controller.pointer_down(Vec2::new(100.0, 100.0));
        controller.pointer_move(Vec2::new(110.0, 100.0));
        assert_eq!(controller.pointer_up(), PointerRelease::DragEnd);
    }

    #[test]
    fn test_jitter_accumulates_into_drag() {
        let mut controller = CameraController::default();
        controller.pointer_down(Vec2::ZERO);
        controller.pointer_move(Vec2::new(1.0, 0.0));
        controller.pointer_move(Vec2::new(2.0, 0.0));
        controller.pointer_move(Vec2::new(3.0, 0.0));
        assert_eq!(controller.pointer_up(), PointerRelease::DragEnd);
    }

    #[test]
    fn test_drag_accumulates_rotation() {
        let mut controller = CameraController::default();
        controller.pointer_down(Vec2::new(0.0, 0.0));
        controller.pointer_move(Vec2::new(20.0, -10.0));
        controller.pointer_move(Vec2::new(30.0, -10.0));

        assert_relative_eq!(controller.rotation.ry, 30.0 * DRAG_GAIN);
        assert_relative_eq!(controller.rotation.rx, -10.0 * DRAG_GAIN);
    }

    #[test]
    fn test_move_without_press_does_nothing() {
        let mut controller = CameraController::default();
        controller.pointer_move(Vec2::new(50.0, 50.0));
        assert_eq!(controller.rotation, SceneRotation::default());
        assert_eq!(controller.pointer_up(), PointerRelease::Ignored);
    }

    #[test]
    fn test_pointer_leave_cancels_drag() {
        let mut controller = CameraController::default();
        controller.pointer_down(Vec2::ZERO);
        controller.pointer_leave();
        assert_eq!(controller.pointer_up(), PointerRelease::Ignored);
    }

    #[test]
    fn test_zoom_scales_radially_without_clamp() {
        let mut controller = CameraController::default();
        controller.zoom(1.0);
        assert_relative_eq!(controller.pose.position.z, 450.0, epsilon = 1e-3);
        controller.zoom(-1.0);
        assert_relative_eq!(controller.pose.position.z, 495.0, epsilon = 1e-3);

        for _ in 0..200 {
            controller.zoom(-1.0);
        }
        assert!(controller.pose.position.length() > 1e8);
    }

    #[test]
    fn test_navigate_to_planet_uses_body_standoff() {
        let mut controller = CameraController::default();
        let target = Vec3::new(300.0, 0.0, 400.0);
        controller.navigate_to(target, false);

        assert_relative_eq!(controller.pose.position.distance(target), BODY_STANDOFF, epsilon = 1e-3);
        assert_relative_eq!(controller.pose.position.x, 240.0, epsilon = 1e-3);
        assert_relative_eq!(controller.pose.position.z, 320.0, epsilon = 1e-3);
        assert_eq!(controller.pose.target, target);
    }

    #[test]
    fn test_navigate_to_star_uses_star_standoff() {
        let mut controller = CameraController::default();
        let target = Vec3::new(0.0, 0.0, 500.0);
        controller.navigate_to(target, true);
        assert_relative_eq!(controller.pose.position.z, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_navigate_to_origin_keeps_view_direction() {
        let mut controller = CameraController::default();
        controller.navigate_to(Vec3::ZERO, true);
        assert_relative_eq!(controller.pose.position.length(), STAR_STANDOFF, epsilon = 1e-3);
        // Still on the same side of the origin as the initial camera.
        assert!(controller.pose.position.z > 0.0);
        assert_eq!(controller.pose.target, Vec3::ZERO);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut controller = CameraController::default();
        controller.pointer_down(Vec2::ZERO);
        controller.pointer_move(Vec2::new(40.0, 40.0));
        controller.zoom(1.0);

        controller.reset();
        let once = controller.clone();
        controller.reset();

        assert_eq!(controller.pose, CameraPose::default());
        assert_eq!(controller.rotation, SceneRotation::default());
        assert_eq!(controller.pose, once.pose);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_scene_rotation_quat_identity_at_zero() {
        let q = SceneRotation::default().quat();
        assert_relative_eq!(q.angle_between(Quat::IDENTITY), 0.0, epsilon = 1e-6);
    }
}
