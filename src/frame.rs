//! The per-frame simulation pass.
//!
//! Owns the registry, scene graph and camera controller resources, orders the
//! frame sets, seeds the fixed bodies at startup and advances every body each
//! frame.

use bevy::prelude::*;

use crate::camera::CameraController;
use crate::catalog;
use crate::orbit;
use crate::registry::BodyRegistry;
use crate::scene::SceneGraph;
use crate::search::SearchState;
use crate::settings::StarMapSettings;
use crate::types::{FrameSet, SimulationClock};

/// Counters from the most recent simulation pass.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Simulation passes run so far.
    pub passes: u64,
    /// Bodies visited by the last pass.
    pub last_visited: usize,
}

/// Plugin for the core frame loop, independent of windowing and rendering.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let tuning = app
            .world()
            .get_resource::<StarMapSettings>()
            .map(|settings| settings.camera)
            .unwrap_or_default();

        app.init_resource::<StarMapSettings>()
            .init_resource::<BodyRegistry>()
            .init_resource::<SceneGraph>()
            .init_resource::<SimulationClock>()
            .init_resource::<SearchState>()
            .init_resource::<FrameStats>()
            .insert_resource(CameraController::new(tuning))
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Ingest,
                    FrameSet::Clock,
                    FrameSet::Orbit,
                    FrameSet::Rotate,
                    FrameSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, populate_fixed_bodies)
            .add_systems(Update, simulate_orbits.in_set(FrameSet::Orbit))
            .add_systems(Update, apply_scene_rotation.in_set(FrameSet::Rotate));
    }
}

fn populate_fixed_bodies(mut registry: ResMut<BodyRegistry>, mut scene: ResMut<SceneGraph>) {
    let ids = registry.append(&mut scene, catalog::fixed_bodies(&mut rand::rng()));
    info!("Solar system populated with {} bodies", ids.len());
}

/// Advance every registered body to the current simulated time.
///
/// Iterates a snapshot, so the pass covers exactly the bodies present when it began.
fn simulate_orbits(
    registry: Res<BodyRegistry>,
    clock: Res<SimulationClock>,
    mut scene: ResMut<SceneGraph>,
    mut stats: ResMut<FrameStats>,
) {
    let bodies = registry.snapshot();
    let visited = orbit::advance(&bodies, &mut scene, clock.elapsed);
    stats.passes += 1;
    stats.last_visited = visited;
}

fn apply_scene_rotation(camera: Res<CameraController>, mut scene: ResMut<SceneGraph>) {
    scene.set_root_rotation(camera.rotation.quat());
}
