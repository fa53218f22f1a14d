//! Search box with live suggestions.
//!
//! Enter navigates to the first suggestion, Escape or the close button
//! forgets the query. Picking a suggestion navigates to it.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::body::BodyDetails;
use crate::feed::FeedStats;
use crate::registry::BodyRegistry;
use crate::search::SearchState;
use crate::selection::NavigateRequest;
use crate::settings::StarMapSettings;

use super::{colors, icons};

/// What the user did with the search box this frame.
#[derive(Debug, Default, PartialEq)]
pub struct SearchOutcome {
    pub query: Option<String>,
    pub navigate: Option<String>,
    pub close: bool,
}

/// Apply a frame's search interaction to the state.
///
/// Returns the navigation target, if any; navigation itself clears the state.
pub fn apply_outcome(
    outcome: SearchOutcome,
    search: &mut SearchState,
    registry: &BodyRegistry,
    limit: usize,
) -> Option<String> {
    if outcome.close {
        search.clear();
        return None;
    }
    if let Some(query) = outcome.query {
        search.set_query(registry.as_slice(), query, limit);
    }
    outcome.navigate
}

/// Hint shown when nothing matches.
pub fn empty_hint(neo_count: usize) -> Option<String> {
    (neo_count > 0).then(|| format!("{neo_count} NEOs loaded - try searching by name!"))
}

#[allow(clippy::too_many_arguments)]
pub fn search_bar_system(
    mut contexts: EguiContexts,
    mut search: ResMut<SearchState>,
    registry: Res<BodyRegistry>,
    settings: Res<StarMapSettings>,
    stats: Res<FeedStats>,
    mut navigate: MessageWriter<NavigateRequest>,
    mut was_open: Local<bool>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let just_opened = search.open && !*was_open;
    *was_open = search.open;

    let mut outcome = SearchOutcome::default();

    egui::Area::new(egui::Id::new("search_bar"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Solar System Explorer")
                        .size(24.0)
                        .strong()
                        .color(colors::ACCENT),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "Drag to rotate • Scroll to zoom • Click objects for info • {} asteroids loaded",
                        stats.latest_snapshot
                    ))
                    .color(colors::MUTED),
                );
                ui.add_space(6.0);

                if !search.open {
                    let button = egui::Button::new(
                        egui::RichText::new(format!("{} Search Celestial Bodies", icons::SEARCH))
                            .color(colors::TEXT),
                    )
                    .fill(colors::BUTTON_BG)
                    .corner_radius(16);
                    if ui.add(button).clicked() {
                        search.open = true;
                    }
                    return;
                }

                egui::Frame::new()
                    .fill(colors::PANEL_BG)
                    .corner_radius(16)
                    .inner_margin(egui::Margin::symmetric(12, 6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(icons::SEARCH).color(colors::MUTED));

                            let mut query = search.query.clone();
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut query)
                                    .hint_text(format!("Search {} celestial bodies...", registry.len()))
                                    .desired_width(260.0),
                            );
                            if just_opened {
                                response.request_focus();
                            }
                            if response.changed() {
                                outcome.query = Some(query);
                            }

                            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                            if enter {
                                outcome.navigate = search.first_suggestion().map(str::to_string);
                            }
                            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                                outcome.close = true;
                            }
                            if ui.button(icons::CLOSE).clicked() {
                                outcome.close = true;
                            }
                        });
                    });

                if search.query.is_empty() {
                    return;
                }

                egui::Frame::new()
                    .fill(colors::PANEL_BG)
                    .corner_radius(8)
                    .inner_margin(egui::Margin::same(6))
                    .show(ui, |ui| {
                        ui.set_width(300.0);
                        if search.suggestions.is_empty() {
                            ui.label(egui::RichText::new("No celestial bodies found").color(colors::MUTED));
                            ui.small("Try searching for planets, the Sun, or asteroid names/numbers");
                            if let Some(hint) = empty_hint(stats.latest_snapshot) {
                                ui.small(egui::RichText::new(hint).color(colors::SAFE));
                            }
                            return;
                        }

                        egui::ScrollArea::vertical().max_height(256.0).show(ui, |ui| {
                            for name in &search.suggestions {
                                let body = registry.find_by_name(name);
                                let kind = body.map(|b| b.kind.label()).unwrap_or("Object");
                                let hazardous = matches!(
                                    body.map(|b| &b.details),
                                    Some(BodyDetails::NearEarthObject(neo)) if neo.hazardous
                                );

                                let mut text = format!("{name}\n{kind}");
                                if hazardous {
                                    text = format!("{name} {}\n{kind}", icons::WARNING);
                                }
                                let row = egui::Button::new(egui::RichText::new(text).color(colors::TEXT))
                                    .frame(false)
                                    .min_size(egui::vec2(290.0, 0.0));
                                if ui.add(row).clicked() {
                                    outcome.navigate = Some(name.clone());
                                }
                            }
                            if search.suggestions.len() == settings.max_suggestions {
                                ui.small(format!(
                                    "Showing first {} results...",
                                    settings.max_suggestions
                                ));
                            }
                        });
                    });
            });
        });

    if let Some(name) = apply_outcome(outcome, &mut search, &registry, settings.max_suggestions) {
        navigate.write(NavigateRequest(name));
    }
}
