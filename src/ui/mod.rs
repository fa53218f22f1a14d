//! UI module providing the egui-based overlay.
//!
//! Search bar at the top, info panel for the selection on the right, and a
//! small HUD along the bottom edge.

mod hud;
pub mod icons;
pub mod info_panel;
pub mod search_bar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Colors shared by the overlay.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(10, 10, 16, 230);
    pub const BUTTON_BG: Color32 = Color32::from_rgba_premultiplied(40, 40, 48, 200);
    pub const ACCENT: Color32 = Color32::from_rgb(250, 204, 21);
    pub const TEXT: Color32 = Color32::from_rgb(230, 230, 235);
    pub const MUTED: Color32 = Color32::from_rgb(156, 163, 175);
    pub const SAFE: Color32 = Color32::from_rgb(74, 222, 128);
    pub const DANGER: Color32 = Color32::from_rgb(248, 113, 113);
}

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Fonts first, or icon glyphs render as boxes.
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    search_bar::search_bar_system,
                    info_panel::info_panel_system,
                    hud::hud_system,
                )
                    .after(icons::setup_fonts)
                    .run_if(icons::fonts_ready),
            );
    }
}
