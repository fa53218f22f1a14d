//! Reset button and the controls legend.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::selection::ResetView;

use super::{colors, icons};

pub fn hud_system(mut contexts: EguiContexts, mut resets: MessageWriter<ResetView>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("reset_view"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(16.0, -16.0))
        .show(ctx, |ui| {
            let button = egui::Button::new(
                egui::RichText::new(format!("{} Reset View", icons::RESET)).color(colors::TEXT),
            )
            .fill(colors::BUTTON_BG)
            .corner_radius(8);
            if ui.add(button).on_hover_text("R").clicked() {
                resets.write(ResetView);
            }
        });

    egui::Area::new(egui::Id::new("controls_legend"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .corner_radius(8)
                .inner_margin(egui::Margin::symmetric(12, 6))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 16.0;
                        ui.label(format!("{} Drag to rotate", icons::DRAG));
                        ui.label(format!("{} Scroll to zoom", icons::SCROLL));
                        ui.label(format!("{} Click for info", icons::CLICK));
                    });
                });
        });
}
