//! Starmap - interactive Solar System star map
//!
//! A desktop application showing the Sun, six planets and live near-Earth
//! objects, with drag-to-rotate, zoom, picking and search.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use starmap::StarMapPlugin;
use starmap::camera::CameraPlugin;
use starmap::feed::FeedWorkerPlugin;
use starmap::input::InputPlugin;
use starmap::render::RenderPlugin;
use starmap::settings::StarMapSettings;
use starmap::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar System Explorer".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.02)))
        // Settings before the plugins that read them at build time
        .insert_resource(StarMapSettings::default())
        .add_plugins(StarMapPlugin)
        .add_plugins((FeedWorkerPlugin, CameraPlugin, InputPlugin, RenderPlugin, UiPlugin))
        .run();
}
