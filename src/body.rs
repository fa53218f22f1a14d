//! Celestial body data model.
//!
//! Every body carries a common required subset (name, kind, radius) and a
//! closed, kind-specific descriptive payload. Descriptive data is opaque to
//! the simulation and picking code; it is only handed to the selection display.

use bevy::prelude::*;

use crate::types::BodyId;

/// Radius used when a delivered body has no usable size.
pub const DEFAULT_RADIUS: f32 = 2.0;

/// Per-frame self-rotation of the Sun (radians).
pub const STAR_SELF_ROTATION: f32 = 0.001;

/// Per-frame self-rotation of planets (radians).
pub const PLANET_SELF_ROTATION: f32 = 0.01;

/// Kind of celestial body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
    NearEarthObject,
}

impl BodyKind {
    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
            BodyKind::NearEarthObject => "Near-Earth Object",
        }
    }
}

/// Fixed-radius circular orbit around the origin in the XZ plane.
///
/// Parameters never change after creation; only simulated time advances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Distance from the orbit center (render units).
    pub center_distance: f32,
    /// Angular speed in radians per simulated second.
    pub angular_speed: f32,
    /// Angle at simulated time zero (radians).
    pub start_angle: f32,
}

impl Orbit {
    /// Orbit angle at simulated time `t`.
    pub fn angle_at(&self, t: f64) -> f64 {
        self.start_angle as f64 + t * self.angular_speed as f64
    }

    /// Position at simulated time `t`.
    pub fn position_at(&self, t: f64) -> Vec3 {
        let angle = self.angle_at(t);
        let d = self.center_distance as f64;
        Vec3::new((angle.cos() * d) as f32, 0.0, (angle.sin() * d) as f32)
    }
}

/// Descriptive facts shared by the Sun and the planets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyFacts {
    pub classification: String,
    pub distance: String,
    pub diameter: String,
    pub mass: String,
    pub temperature: String,
    pub composition: String,
    pub age: String,
    pub facts: Vec<String>,
    pub atmosphere: String,
    pub moons: String,
    pub day_length: String,
    pub year_length: String,
    pub image_url: String,
}

/// Descriptive data of a near-Earth object, as delivered by the feed.
///
/// Fields missing from the feed stay `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeoDetails {
    /// Name exactly as delivered.
    pub original_name: String,
    pub hazardous: bool,
    pub diameter_km: Option<f64>,
    pub miss_distance_km: Option<f64>,
    pub relative_velocity_kmh: Option<f64>,
    pub absolute_magnitude: Option<f64>,
    pub first_observation: Option<String>,
    pub orbit_determination: Option<String>,
    pub closest_approach: Option<String>,
}

impl NeoDetails {
    pub fn classification(&self) -> &'static str {
        if self.hazardous {
            "Potentially Hazardous Asteroid"
        } else {
            "Near-Earth Object"
        }
    }
}

/// Kind-specific descriptive payload.
#[derive(Clone, Debug, PartialEq)]
pub enum BodyDetails {
    Star(BodyFacts),
    Planet {
        /// "Terrestrial Planet", "Gas Giant", ...
        class: String,
        facts: BodyFacts,
    },
    NearEarthObject(NeoDetails),
}

/// Kind of decorative child shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// Glow shell around the Sun; `layer` starts at 1 for the innermost shell.
    Glow { layer: u8 },
    Atmosphere,
    Rings,
}

/// Geometry of a decoration, in the owning body's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecorationShape {
    Shell { radius: f32 },
    /// Flat annulus lying in the body's equatorial (XZ) plane.
    Ring { inner: f32, outer: f32 },
}

/// A visual child attached to a body.
///
/// Decorations share the body's transform and never resolve as pick targets
/// themselves. Non-pickable decorations are excluded from ray tests entirely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub shape: DecorationShape,
    pub pickable: bool,
}

/// A body as submitted to the registry, before an identity is assigned.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBody {
    pub name: String,
    pub kind: BodyKind,
    pub radius: f32,
    pub orbit: Option<Orbit>,
    /// Static local position, used when there is no orbit.
    pub placement: Vec3,
    pub self_rotation_rate: f32,
    pub details: BodyDetails,
    pub decorations: Vec<Decoration>,
}

impl NewBody {
    /// A body with no orbit, decorations, or self-rotation.
    pub fn new(name: impl Into<String>, kind: BodyKind, radius: f32, details: BodyDetails) -> Self {
        Self {
            name: name.into(),
            kind,
            radius,
            orbit: None,
            placement: Vec3::ZERO,
            self_rotation_rate: 0.0,
            details,
            decorations: Vec::new(),
        }
    }

    pub fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.orbit = Some(orbit);
        self
    }

    pub fn with_placement(mut self, placement: Vec3) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_self_rotation(mut self, rate: f32) -> Self {
        self.self_rotation_rate = rate;
        self
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decorations.push(decoration);
        self
    }
}

/// A registered celestial body. Immutable after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    /// Render-space radius, always positive.
    pub radius: f32,
    pub orbit: Option<Orbit>,
    pub placement: Vec3,
    pub self_rotation_rate: f32,
    pub details: BodyDetails,
    pub decorations: Vec<Decoration>,
}

impl CelestialBody {
    pub(crate) fn from_new(id: BodyId, new: NewBody) -> Self {
        let radius = if new.radius.is_finite() && new.radius > 0.0 {
            new.radius
        } else {
            DEFAULT_RADIUS
        };
        let placement = if new.placement.is_finite() {
            new.placement
        } else {
            Vec3::ZERO
        };
        Self {
            id,
            name: new.name,
            kind: new.kind,
            radius,
            orbit: new.orbit,
            placement,
            self_rotation_rate: new.self_rotation_rate,
            details: new.details,
            decorations: new.decorations,
        }
    }

    /// Local position at simulated time `t`.
    pub fn position_at(&self, t: f64) -> Vec3 {
        match &self.orbit {
            Some(orbit) => orbit.position_at(t),
            None => self.placement,
        }
    }

    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    /// Classification line for display.
    pub fn classification(&self) -> &str {
        match &self.details {
            BodyDetails::Star(facts) | BodyDetails::Planet { facts, .. } => &facts.classification,
            BodyDetails::NearEarthObject(neo) => neo.classification(),
        }
    }
}
