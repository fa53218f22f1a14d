//! Pointer, wheel and keyboard input.
//!
//! Pointer presses drive the camera's drag state machine; a release that
//! never became a drag is forwarded as a [`PickRequest`]. Input that egui
//! wants is left to the UI.

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::{CursorLeft, PrimaryWindow};
use bevy_egui::EguiContexts;

use crate::camera::{CameraController, PointerRelease};
use crate::picking::cursor_to_ndc;
use crate::search::SearchState;
use crate::selection::{PickRequest, ResetView};
use crate::types::FrameSet;

/// Plugin feeding window input into the camera controller and selection.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_pointer, handle_wheel, keyboard_shortcuts)
                .chain()
                .before(FrameSet::Input),
        );
    }
}

fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}

/// Press, move, release and leave for the primary mouse button.
fn handle_pointer(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut cursor_left: MessageReader<CursorLeft>,
    mut controller: ResMut<CameraController>,
    mut picks: MessageWriter<PickRequest>,
    mut contexts: EguiContexts,
) {
    if cursor_left.read().count() > 0 && controller.is_dragging() {
        controller.pointer_leave();
        return;
    }

    // While a drag is active, keep tracking it even over egui areas.
    if !controller.is_dragging() && egui_wants_pointer(&mut contexts) {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let cursor = window.cursor_position();

    if mouse.just_pressed(MouseButton::Left) {
        if let Some(cursor) = cursor {
            controller.pointer_down(cursor);
        }
    }

    if controller.is_dragging() {
        if let Some(cursor) = cursor {
            controller.pointer_move(cursor);
        }
    }

    if mouse.just_released(MouseButton::Left) {
        let viewport = Vec2::new(window.width(), window.height());
        if let Some(request) = click_request(controller.pointer_up(), cursor, viewport) {
            picks.write(request);
        }
    }
}

/// Pick request for a pointer release, if the release was a click with the
/// cursor over a non-empty viewport.
pub fn click_request(
    release: PointerRelease,
    cursor: Option<Vec2>,
    viewport: Vec2,
) -> Option<PickRequest> {
    if release != PointerRelease::Click {
        return None;
    }
    let ndc = cursor_to_ndc(cursor?, viewport)?;
    Some(PickRequest {
        ndc,
        aspect: viewport.x / viewport.y,
    })
}

/// One zoom step per wheel event; scrolling up moves the camera in.
fn handle_wheel(
    mut wheel: MessageReader<MouseWheel>,
    mut controller: ResMut<CameraController>,
    mut contexts: EguiContexts,
) {
    if egui_wants_pointer(&mut contexts) {
        wheel.clear();
        return;
    }
    for event in wheel.read() {
        controller.zoom(event.y);
    }
}

/// R resets the view, slash opens search.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut search: ResMut<SearchState>,
    mut resets: MessageWriter<ResetView>,
    mut contexts: EguiContexts,
) {
    if contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.wants_keyboard_input())
    {
        return;
    }

    if keys.just_pressed(KeyCode::KeyR) {
        resets.write(ResetView);
    }

    if keys.just_pressed(KeyCode::Slash) && !search.open {
        search.open = true;
    }
}
