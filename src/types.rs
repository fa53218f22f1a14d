//! Core identifiers, constants and the simulation clock.

use bevy::prelude::*;

/// System sets making up one frame, in execution order.
///
/// Input handling completes before the feed is ingested, and the feed is
/// ingested before the simulation pass, so a pass never sees a partial append.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Pointer, wheel and keyboard handling, pick and navigation requests.
    Input,
    /// Drain pending feed deliveries into the registry.
    Ingest,
    /// Advance the simulation clock.
    Clock,
    /// Orbital positions and self-rotation.
    Orbit,
    /// Apply the accumulated drag rotation to the scene root.
    Rotate,
    /// Mirror scene state into render entities.
    Present,
}

/// Full circle in radians.
pub const TAU: f32 = std::f32::consts::TAU;

/// Vertical field of view of the perspective camera (75 degrees).
pub const CAMERA_FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;

/// Near clip plane distance.
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clip plane distance.
pub const CAMERA_FAR: f32 = 10_000.0;

/// Camera position at startup and after a view reset.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 100.0, 500.0);

/// Camera look-at target at startup and after a view reset.
pub const INITIAL_CAMERA_TARGET: Vec3 = Vec3::ZERO;

/// Identity of a body in the registry.
///
/// Assigned sequentially at append time, never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u32);

impl BodyId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the body in registry insertion order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Elapsed simulated time, starting at zero when the loop starts.
///
/// There is no pause or time scaling: the clock follows wall-clock delta.
#[derive(Resource, Clone, Debug, Default)]
pub struct SimulationClock {
    /// Seconds since the first frame.
    pub elapsed: f64,
    /// Number of frames advanced so far.
    pub frames: u64,
}

impl SimulationClock {
    /// Advance by one frame of `delta_secs` wall-clock seconds.
    ///
    /// Negative or non-finite deltas are treated as zero so the clock stays monotonic.
    pub fn advance(&mut self, delta_secs: f64) {
        if delta_secs.is_finite() && delta_secs > 0.0 {
            self.elapsed += delta_secs;
        }
        self.frames += 1;
    }
}
