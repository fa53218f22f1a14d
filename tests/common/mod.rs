//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::sync::mpsc::{self, Sender};

use bevy::prelude::*;
use starmap::StarMapPlugin;
use starmap::feed::{FeedDelivery, FeedLink, NeoDescriptor, parse_snapshot};
use starmap::registry::BodyRegistry;

/// Snapshot with two dates and three objects, one of them hazardous.
pub const SNAPSHOT: &str = r#"{
    "element_count": 3,
    "near_earth_objects": {
        "2024-03-01": [
            { "name": "433 Eros (A898 PA)", "is_potentially_hazardous_asteroid": false,
              "absolute_magnitude_h": 10.4,
              "estimated_diameter": { "kilometers": { "estimated_diameter_max": 37.0 } },
              "close_approach_data": [{ "close_approach_date": "2024-03-01",
                  "miss_distance": { "kilometers": "22341234.5" },
                  "relative_velocity": { "kilometers_per_hour": "21000.1" } }] },
            { "name": "(2024 AB1)", "is_potentially_hazardous_asteroid": true,
              "estimated_diameter": { "kilometers": { "estimated_diameter_max": 0.31 } } }
        ],
        "2024-03-02": [
            { "name": "99942 Apophis (2004 MN4)", "is_potentially_hazardous_asteroid": true }
        ]
    }
}"#;

/// Headless app with the star map core and a feed channel the test controls.
pub fn headless_app() -> (App, Sender<FeedDelivery>) {
    let (tx, rx) = mpsc::channel();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(StarMapPlugin)
        .insert_resource(FeedLink::new(rx, None));
    // Startup populates the fixed bodies.
    app.update();
    (app, tx)
}

pub fn snapshot_descriptors() -> Vec<NeoDescriptor> {
    parse_snapshot(SNAPSHOT).expect("fixture snapshot parses")
}

pub fn registry(app: &App) -> &BodyRegistry {
    app.world().resource::<BodyRegistry>()
}
