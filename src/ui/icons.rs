//! Phosphor icon definitions for the UI.
//!
//! Icons render only after `setup_fonts` has installed the Phosphor font.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::body::{BodyKind, CelestialBody};

/// Whether the icon font has been installed.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Install the Phosphor icon font once the egui context exists.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

pub fn fonts_ready(initialized: Res<FontsInitialized>) -> bool {
    initialized.0
}

// Browse all icons at https://phosphoricons.com/

pub const SEARCH: &str = egui_phosphor::regular::MAGNIFYING_GLASS;
pub const CLOSE: &str = egui_phosphor::regular::X;
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
pub const WARNING: &str = egui_phosphor::regular::WARNING;

pub const SUN: &str = egui_phosphor::regular::SUN;
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
pub const ASTEROID: &str = egui_phosphor::regular::ASTERISK;

pub const DRAG: &str = egui_phosphor::regular::MOUSE;
pub const SCROLL: &str = egui_phosphor::regular::SCROLL;
pub const CLICK: &str = egui_phosphor::regular::HAND_POINTING;

/// Icon for a body's kind.
pub fn body_icon(kind: BodyKind) -> &'static str {
    match kind {
        BodyKind::Star => SUN,
        BodyKind::Planet => PLANET,
        BodyKind::NearEarthObject => ASTEROID,
    }
}

/// Kind icon followed by the body name.
pub fn body_label(body: &CelestialBody) -> String {
    format!("{} {}", body_icon(body.kind), body.name)
}
