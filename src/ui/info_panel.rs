//! Info panel showing the selected body's descriptive data.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::body::{BodyDetails, BodyFacts, CelestialBody, NeoDetails};
use crate::registry::BodyRegistry;
use crate::selection::{ResetView, SelectedBody};

use super::{colors, icons};

/// One labelled line of the panel.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

fn row(label: &'static str, value: impl Into<String>) -> DetailRow {
    DetailRow {
        label,
        value: value.into(),
    }
}

/// Push a row unless the text is empty.
fn push_text(rows: &mut Vec<DetailRow>, label: &'static str, value: &str) {
    if !value.is_empty() {
        rows.push(row(label, value));
    }
}

fn fact_rows(facts: &BodyFacts, rows: &mut Vec<DetailRow>) {
    push_text(rows, "Distance", &facts.distance);
    push_text(rows, "Diameter", &facts.diameter);
    push_text(rows, "Mass", &facts.mass);
    push_text(rows, "Temperature", &facts.temperature);
    push_text(rows, "Classification", &facts.classification);
    push_text(rows, "Composition", &facts.composition);
    push_text(rows, "Atmosphere", &facts.atmosphere);
    push_text(rows, "Moons", &facts.moons);
    push_text(rows, "Day Length", &facts.day_length);
    push_text(rows, "Year Length", &facts.year_length);
    push_text(rows, "Age", &facts.age);
}

/// Round to a whole number and group digits in threes with commas.
pub fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 && digits.chars().any(|c| c != '0') {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn neo_rows(neo: &NeoDetails, rows: &mut Vec<DetailRow>) {
    rows.push(row("Classification", neo.classification()));
    if let Some(km) = neo.diameter_km {
        rows.push(row("Diameter", format!("{km:.3} km")));
    }
    if let Some(km) = neo.miss_distance_km {
        rows.push(row("Miss Distance", format!("{} km from Earth", group_thousands(km))));
    }
    if let Some(kmh) = neo.relative_velocity_kmh {
        rows.push(row("Velocity", format!("{} km/h", group_thousands(kmh))));
    }
    rows.push(row("Temperature", "Varies with solar distance"));
    rows.push(row(
        "Composition",
        "Rocky or metallic composition (specific type unknown)",
    ));
    if let Some(h) = neo.absolute_magnitude {
        rows.push(row("Absolute Magnitude", format!("{h:.1}")));
    }
    if let Some(date) = &neo.closest_approach {
        rows.push(row("Closest Approach", date.clone()));
    }
    if let Some(date) = &neo.first_observation {
        rows.push(row("First Observed", date.clone()));
    }
    if let Some(date) = &neo.orbit_determination {
        rows.push(row("Orbit Determined", date.clone()));
    }
}

/// Labelled rows for a body; absent values produce no row.
pub fn detail_rows(body: &CelestialBody) -> Vec<DetailRow> {
    let mut rows = Vec::new();
    match &body.details {
        BodyDetails::Star(facts) => fact_rows(facts, &mut rows),
        BodyDetails::Planet { class, facts } => {
            push_text(&mut rows, "Type", class);
            fact_rows(facts, &mut rows);
        }
        BodyDetails::NearEarthObject(neo) => neo_rows(neo, &mut rows),
    }
    rows
}

/// Fixed fact lines for a near-Earth object.
pub fn neo_facts(neo: &NeoDetails) -> [&'static str; 2] {
    let threat = if neo.hazardous {
        "Classified as potentially hazardous due to size and orbit"
    } else {
        "Not considered a threat to Earth"
    };
    [threat, "Part of ongoing NASA monitoring program"]
}

/// Feed name shown under the heading when it differs from the display name.
pub fn original_name(body: &CelestialBody) -> Option<&str> {
    match &body.details {
        BodyDetails::NearEarthObject(neo) if neo.original_name != body.name => {
            Some(neo.original_name.as_str())
        }
        _ => None,
    }
}

fn footer(body: &CelestialBody) -> &'static str {
    match body.details {
        BodyDetails::NearEarthObject(_) => {
            "Near-Earth Objects are tracked to monitor potential impact threats \
             and study the formation of our Solar System."
        }
        _ => "Distances and sizes are not to scale for visualization purposes.",
    }
}

/// System rendering the info panel for the selected body.
///
/// Closing the panel resets the view, which also clears the selection.
pub fn info_panel_system(
    mut contexts: EguiContexts,
    selected: Res<SelectedBody>,
    registry: Res<BodyRegistry>,
    mut resets: MessageWriter<ResetView>,
) {
    let Some(body) = selected.body.and_then(|id| registry.get(id)) else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut close = false;
    let panel_frame = egui::Frame::new()
        .fill(colors::PANEL_BG)
        .corner_radius(8)
        .inner_margin(egui::Margin::same(16));

    egui::Area::new(egui::Id::new("info_panel"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 80.0))
        .show(ctx, |ui| {
            panel_frame.show(ui, |ui| {
                ui.set_width(340.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(icons::body_label(body))
                            .size(24.0)
                            .strong()
                            .color(colors::ACCENT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui.button(icons::CLOSE).on_hover_text("Close").clicked() {
                            close = true;
                        }
                    });
                });
                if let Some(name) = original_name(body) {
                    ui.label(egui::RichText::new(format!("({name})")).color(colors::MUTED));
                }
                ui.label(egui::RichText::new(body.kind.label()).color(colors::TEXT));
                ui.separator();

                egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                    egui::Grid::new("info_rows")
                        .num_columns(2)
                        .spacing([12.0, 6.0])
                        .show(ui, |ui| {
                            for DetailRow { label, value } in detail_rows(body) {
                                ui.label(egui::RichText::new(label).small().color(colors::MUTED));
                                ui.label(egui::RichText::new(value).color(colors::TEXT));
                                ui.end_row();
                            }
                        });

                    if let BodyDetails::NearEarthObject(neo) = &body.details {
                        ui.separator();
                        ui.label(egui::RichText::new("Fascinating Facts").strong().color(colors::ACCENT));
                        for fact in neo_facts(neo) {
                            ui.label(format!("• {fact}"));
                        }
                        if neo.hazardous {
                            ui.add_space(6.0);
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} Potentially hazardous",
                                    icons::WARNING
                                ))
                                .color(colors::DANGER),
                            );
                        }
                    }

                    if let BodyDetails::Star(facts) | BodyDetails::Planet { facts, .. } = &body.details {
                        if !facts.facts.is_empty() {
                            ui.separator();
                            ui.label(egui::RichText::new("Fascinating Facts").strong().color(colors::ACCENT));
                            for fact in &facts.facts {
                                ui.label(format!("• {fact}"));
                            }
                        }
                        if !facts.image_url.is_empty() {
                            ui.hyperlink_to("Image", &facts.image_url);
                        }
                    }

                    ui.separator();
                    ui.small(egui::RichText::new(footer(body)).color(colors::MUTED));
                });
            });
        });

    if close {
        resets.write(ResetView);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyKind, NewBody};
    use crate::catalog::FixedBody;
    use crate::scene::SceneGraph;

    fn register(new: NewBody) -> CelestialBody {
        let mut registry = BodyRegistry::default();
        let mut scene = SceneGraph::new();
        let ids = registry.append(&mut scene, [new]);
        registry.get(ids[0]).cloned().unwrap()
    }

    #[test]
    fn test_planet_rows_include_type_and_facts() {
        let earth = register(FixedBody::Earth.to_new_body(0.0));
        let rows = detail_rows(&earth);
        assert_eq!(rows[0].label, "Type");
        assert!(rows.iter().any(|r| r.label == "Distance"));
        assert!(rows.iter().all(|r| !r.value.is_empty()));
    }

    #[test]
    fn test_neo_rows_skip_missing_values() {
        let neo = register(NewBody::new(
            "2024 AB",
            BodyKind::NearEarthObject,
            3.0,
            BodyDetails::NearEarthObject(NeoDetails {
                original_name: "(2024 AB)".into(),
                hazardous: true,
                miss_distance_km: Some(4_512_345.6),
                ..default()
            }),
        ));
        let rows = detail_rows(&neo);
        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, ["Classification", "Miss Distance", "Temperature", "Composition"]);
        assert_eq!(rows[0].value, "Potentially Hazardous Asteroid");
        assert_eq!(rows[1].value, "4,512,346 km from Earth");
        assert_eq!(original_name(&neo), Some("(2024 AB)"));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.4), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(21473.2), "21,473");
        assert_eq!(group_thousands(59_826_152.1), "59,826,152");
        assert_eq!(group_thousands(-1234.0), "-1,234");
    }

    #[test]
    fn test_neo_facts_follow_hazard_flag() {
        let hazardous = NeoDetails {
            hazardous: true,
            ..default()
        };
        assert_eq!(
            neo_facts(&hazardous)[0],
            "Classified as potentially hazardous due to size and orbit"
        );
        assert_eq!(neo_facts(&NeoDetails::default())[0], "Not considered a threat to Earth");
        assert_eq!(neo_facts(&hazardous)[1], "Part of ongoing NASA monitoring program");
    }

    #[test]
    fn test_original_name_hidden_when_identical() {
        let neo = register(NewBody::new(
            "Eros",
            BodyKind::NearEarthObject,
            3.0,
            BodyDetails::NearEarthObject(NeoDetails {
                original_name: "Eros".into(),
                ..default()
            }),
        ));
        assert_eq!(original_name(&neo), None);
    }
}
