//! Selection state and the requests that change it.
//!
//! Clicks become [`PickRequest`]s and search confirmations become
//! [`NavigateRequest`]s; both resolve to at most one selected body.

use bevy::prelude::*;

use crate::camera::CameraController;
use crate::picking;
use crate::registry::BodyRegistry;
use crate::scene::SceneGraph;
use crate::search::SearchState;
use crate::types::{BodyId, FrameSet};

/// Currently selected body, if any.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectedBody {
    pub body: Option<BodyId>,
}

impl SelectedBody {
    pub fn select(&mut self, body: BodyId) {
        self.body = Some(body);
    }

    pub fn clear(&mut self) {
        self.body = None;
    }
}

/// A click at a pointer position, in normalized device coordinates.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct PickRequest {
    pub ndc: Vec2,
    /// Viewport width / height.
    pub aspect: f32,
}

/// Jump the camera to the body with this exact name.
#[derive(Message, Clone, Debug)]
pub struct NavigateRequest(pub String);

/// Restore the initial view and clear the selection.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ResetView;

/// Clear the selection without moving the camera.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ClearSelection;

/// Plugin handling pick, navigation and reset requests.
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedBody>()
            .add_message::<PickRequest>()
            .add_message::<NavigateRequest>()
            .add_message::<ResetView>()
            .add_message::<ClearSelection>()
            .add_systems(
                Update,
                (
                    handle_pick_requests,
                    handle_navigate_requests,
                    handle_clear_selection,
                    handle_reset_view,
                )
                    .chain()
                    .in_set(FrameSet::Input),
            );
    }
}

/// Move the camera to `name` and select it.
///
/// Unknown names are a no-op and return `None`. On success the search state is cleared.
pub fn navigate_to(
    name: &str,
    registry: &BodyRegistry,
    scene: &SceneGraph,
    camera: &mut CameraController,
    selected: &mut SelectedBody,
    search: &mut SearchState,
) -> Option<BodyId> {
    let body = registry.find_by_name(name)?;
    let position = scene.body_world_position(body.id)?;

    camera.navigate_to(position, body.is_star());
    selected.select(body.id);
    search.clear();
    Some(body.id)
}

/// Restore the initial view and drop the selection.
pub fn reset_view(camera: &mut CameraController, selected: &mut SelectedBody) {
    camera.reset();
    selected.clear();
}

fn handle_pick_requests(
    mut requests: MessageReader<PickRequest>,
    scene: Res<SceneGraph>,
    registry: Res<BodyRegistry>,
    camera: Res<CameraController>,
    mut selected: ResMut<SelectedBody>,
) {
    for request in requests.read() {
        let hit = picking::pick_at(&scene, &camera.pose, &camera.lens, request.aspect, request.ndc);
        match hit {
            Some(hit) => {
                selected.select(hit.body);
                if let Some(body) = registry.get(hit.body) {
                    info!("Selected {} at distance {:.1}", body.name, hit.distance);
                }
            }
            None => debug!("Pick at {:?} hit nothing", request.ndc),
        }
    }
}

fn handle_navigate_requests(
    mut requests: MessageReader<NavigateRequest>,
    registry: Res<BodyRegistry>,
    scene: Res<SceneGraph>,
    mut camera: ResMut<CameraController>,
    mut selected: ResMut<SelectedBody>,
    mut search: ResMut<SearchState>,
) {
    for NavigateRequest(name) in requests.read() {
        match navigate_to(name, &registry, &scene, &mut camera, &mut selected, &mut search) {
            Some(_) => info!("Navigated to {}", name),
            None => debug!("No body named {:?}", name),
        }
    }
}

fn handle_clear_selection(
    mut requests: MessageReader<ClearSelection>,
    mut selected: ResMut<SelectedBody>,
) {
    if requests.read().count() > 0 {
        selected.clear();
    }
}

fn handle_reset_view(
    mut requests: MessageReader<ResetView>,
    mut camera: ResMut<CameraController>,
    mut selected: ResMut<SelectedBody>,
) {
    if requests.read().count() > 0 {
        reset_view(&mut camera, &mut selected);
        info!("View reset");
    }
}
