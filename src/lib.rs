//! Starmap - interactive Solar System star map
//!
//! A library crate providing the star map's simulation core and its Bevy
//! plugins, usable headless for testing and integration purposes.

pub mod body;
pub mod camera;
pub mod catalog;
pub mod feed;
pub mod frame;
pub mod input;
pub mod orbit;
pub mod picking;
pub mod registry;
pub mod render;
pub mod scene;
pub mod search;
pub mod selection;
pub mod settings;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

use bevy::prelude::*;

use crate::feed::FeedPlugin;
use crate::frame::SimulationPlugin;
use crate::selection::SelectionPlugin;
use crate::time::TimePlugin;

/// The windowless core: registry, scene, clock, selection and feed ingestion.
///
/// Runs under `MinimalPlugins`. The windowed app adds camera, input,
/// rendering, UI and the feed worker on top.
pub struct StarMapPlugin;

impl Plugin for StarMapPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((SimulationPlugin, TimePlugin, SelectionPlugin, FeedPlugin));
    }
}
