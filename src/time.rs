//! Simulation clock advancement.
//!
//! The clock follows wall-clock frame delta with no scaling or pause.

use bevy::prelude::*;

use crate::types::{FrameSet, SimulationClock};

/// Plugin advancing the [`SimulationClock`] once per frame.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, advance_clock.in_set(FrameSet::Clock));
    }
}

fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.advance(time.delta_secs_f64());
}
