//! Rendering systems for the star map.
//!
//! Render entities mirror the scene graph; everything here reads simulation
//! state and never writes it.

mod background;
pub mod bodies;
mod highlight;
pub mod orbits;
mod sync;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::{BodyVisualsPlugin, spawn_new_nodes};
use self::highlight::HighlightPlugin;
use self::orbits::OrbitPathPlugin;
use self::sync::sync_scene_transforms;
use crate::types::FrameSet;

pub use self::bodies::{SceneEntities, SceneNodeEntity};
pub use self::orbits::OrbitPathSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            BodyVisualsPlugin,
            BackgroundPlugin,
            OrbitPathPlugin,
            HighlightPlugin,
        ))
        .add_systems(
            Update,
            sync_scene_transforms
                .after(spawn_new_nodes)
                .in_set(FrameSet::Present),
        );
    }
}
