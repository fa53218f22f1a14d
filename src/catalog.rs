//! Fixed bodies of the scene: the Sun and six planets.
//!
//! Sizes and distances are render units, not physically scaled.

use rand::Rng;

use crate::body::{
    BodyDetails, BodyFacts, BodyKind, Decoration, DecorationKind, DecorationShape, NewBody, Orbit,
    PLANET_SELF_ROTATION, STAR_SELF_ROTATION,
};
use crate::types::TAU;

/// Number of glow shells around the Sun.
pub const SUN_GLOW_LAYERS: u8 = 3;

/// Identifier for the fixed bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixedBody {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
}

impl FixedBody {
    /// All fixed bodies in registry order.
    pub const ALL: &'static [FixedBody] = &[
        FixedBody::Sun,
        FixedBody::Mercury,
        FixedBody::Venus,
        FixedBody::Earth,
        FixedBody::Mars,
        FixedBody::Jupiter,
        FixedBody::Saturn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FixedBody::Sun => "Sun",
            FixedBody::Mercury => "Mercury",
            FixedBody::Venus => "Venus",
            FixedBody::Earth => "Earth",
            FixedBody::Mars => "Mars",
            FixedBody::Jupiter => "Jupiter",
            FixedBody::Saturn => "Saturn",
        }
    }

    /// Look up a fixed body by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }

    pub fn radius(self) -> f32 {
        match self {
            FixedBody::Sun => 50.0,
            FixedBody::Mercury => 5.0,
            FixedBody::Venus => 12.0,
            FixedBody::Earth => 13.0,
            FixedBody::Mars => 7.0,
            FixedBody::Jupiter => 30.0,
            FixedBody::Saturn => 25.0,
        }
    }

    /// Orbit distance and angular speed (rad/s); `None` for the Sun.
    pub fn orbit_parameters(self) -> Option<(f32, f32)> {
        match self {
            FixedBody::Sun => None,
            FixedBody::Mercury => Some((100.0, 0.04)),
            FixedBody::Venus => Some((150.0, 0.015)),
            FixedBody::Earth => Some((200.0, 0.01)),
            FixedBody::Mars => Some((250.0, 0.008)),
            FixedBody::Jupiter => Some((400.0, 0.002)),
            FixedBody::Saturn => Some((500.0, 0.001)),
        }
    }

    fn planet_class(self) -> &'static str {
        match self {
            FixedBody::Sun => "Star",
            FixedBody::Mercury | FixedBody::Venus | FixedBody::Earth | FixedBody::Mars => {
                "Terrestrial Planet"
            }
            FixedBody::Jupiter | FixedBody::Saturn => "Gas Giant",
        }
    }

    fn decorations(self) -> Vec<Decoration> {
        let radius = self.radius();
        match self {
            FixedBody::Sun => (1..=SUN_GLOW_LAYERS)
                .map(|layer| Decoration {
                    kind: DecorationKind::Glow { layer },
                    shape: DecorationShape::Shell {
                        radius: radius + layer as f32 * 20.0,
                    },
                    pickable: false,
                })
                .collect(),
            FixedBody::Earth => vec![Decoration {
                kind: DecorationKind::Atmosphere,
                shape: DecorationShape::Shell {
                    radius: radius * 1.1,
                },
                pickable: false,
            }],
            // The ring stays pickable: a click on it selects Saturn.
            FixedBody::Saturn => vec![Decoration {
                kind: DecorationKind::Rings,
                shape: DecorationShape::Ring {
                    inner: radius * 1.5,
                    outer: radius * 2.5,
                },
                pickable: true,
            }],
            _ => Vec::new(),
        }
    }

    /// Build the registry entry with the given start angle.
    pub fn to_new_body(self, start_angle: f32) -> NewBody {
        let facts = facts(self);
        match self.orbit_parameters() {
            None => {
                let mut body = NewBody::new(self.name(), BodyKind::Star, self.radius(), BodyDetails::Star(facts))
                    .with_self_rotation(STAR_SELF_ROTATION);
                body.decorations = self.decorations();
                body
            }
            Some((center_distance, angular_speed)) => {
                let details = BodyDetails::Planet {
                    class: self.planet_class().to_string(),
                    facts,
                };
                let orbit = Orbit {
                    center_distance,
                    angular_speed,
                    start_angle,
                };
                let mut body = NewBody::new(self.name(), BodyKind::Planet, self.radius(), details)
                    .with_orbit(orbit)
                    .with_placement(orbit.position_at(0.0))
                    .with_self_rotation(PLANET_SELF_ROTATION);
                body.decorations = self.decorations();
                body
            }
        }
    }
}

/// All fixed bodies, each planet with a start angle drawn uniformly from [0, 2π).
pub fn fixed_bodies(rng: &mut impl Rng) -> Vec<NewBody> {
    FixedBody::ALL
        .iter()
        .map(|&body| body.to_new_body(rng.random_range(0.0..TAU)))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Descriptive facts for the info panel.
pub fn facts(body: FixedBody) -> BodyFacts {
    match body {
        FixedBody::Sun => BodyFacts {
            classification: "G-type main-sequence star (G2V)".into(),
            distance: "0 AU (Center of Solar System)".into(),
            diameter: "1,391,000 km".into(),
            mass: "1.989 × 10^30 kg".into(),
            temperature: "Core: 15 million°C, Surface: 5,500°C".into(),
            composition: "73% Hydrogen, 25% Helium, 2% heavier elements".into(),
            age: "4.6 billion years".into(),
            facts: strings(&[
                "Contains 99.86% of the Solar System's mass",
                "Light takes 8 minutes 20 seconds to reach Earth",
                "Rotates once every 25-35 days (differential rotation)",
                "Produces energy through nuclear fusion",
                "Will become a red giant in ~5 billion years",
            ]),
            atmosphere: "Corona extends millions of kilometers into space".into(),
            moons: "N/A".into(),
            day_length: "~25 Earth days at equator".into(),
            year_length: "N/A (orbits galactic center every 230 million years)".into(),
            image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/b/b4/The_Sun_by_the_Atmospheric_Imaging_Assembly_of_NASA%27s_Solar_Dynamics_Observatory_-_20100819.jpg/290px-The_Sun_by_the_Atmospheric_Imaging_Assembly_of_NASA%27s_Solar_Dynamics_Observatory_-_20100819.jpg".into(),
        },
        FixedBody::Mercury => BodyFacts {
            classification: "Rocky planet, smallest in Solar System".into(),
            distance: "0.39 AU from Sun (57.9 million km)".into(),
            diameter: "4,879 km".into(),
            mass: "3.285 × 10^23 kg".into(),
            temperature: "Day: 430°C, Night: -180°C".into(),
            composition: "Large iron core, thin rocky mantle".into(),
            age: "4.5 billion years".into(),
            facts: strings(&[
                "Closest planet to the Sun",
                "No atmosphere to retain heat",
                "One day on Mercury = 59 Earth days",
                "Has water ice at its poles despite extreme heat",
                "Most cratered planet in the Solar System",
            ]),
            atmosphere: "Trace amounts of oxygen, sodium, hydrogen".into(),
            moons: "0".into(),
            day_length: "58.6 Earth days".into(),
            year_length: "88 Earth days".into(),
            image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d9/Mercury_in_color_-_Prockter07-edit1.jpg/290px-Mercury_in_color_-_Prockter07-edit1.jpg".into(),
        },
        FixedBody::Venus => BodyFacts {
            classification: "Rocky planet with thick atmosphere".into(),
            distance: "0.72 AU from Sun (108.2 million km)".into(),
            diameter: "12,104 km".into(),
            mass: "4.867 × 10^24 kg".into(),
            temperature: "Average surface: 462°C".into(),
            composition: "Iron core, rocky mantle, volcanic surface".into(),
            age: "4.5 billion years".into(),
            facts: strings(&[
                "Hottest planet in the Solar System",
                "Rotates backwards (retrograde rotation)",
                "Atmospheric pressure 90x Earth's",
                "Rains sulfuric acid in upper atmosphere",
                "Often called Earth's \"evil twin\"",
            ]),
            atmosphere: "96.5% CO2, 3.5% Nitrogen, traces of SO2".into(),
            moons: "0".into(),
            day_length: "243 Earth days (retrograde)".into(),
            year_length: "225 Earth days".into(),
            image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/08/Venus_from_Mariner_10.jpg/290px-Venus_from_Mariner_10.jpg".into(),
        },
        FixedBody::Earth => BodyFacts {
            classification: "Rocky planet with life".into(),
            distance: "1 AU from Sun (149.6 million km)".into(),
            diameter: "12,742 km".into(),
            mass: "5.972 × 10^24 kg".into(),
            temperature: "Average surface: 15°C".into(),
            composition: "Iron core, rocky mantle, 71% water surface".into(),
            age: "4.54 billion years".into(),
            facts: strings(&[
                "Only known planet with life",
                "Largest terrestrial planet",
                "71% covered by water",
                "Protective magnetic field shields from solar wind",
                "Perfect distance from Sun for liquid water",
            ]),
            atmosphere: "78% Nitrogen, 21% Oxygen, 1% other gases".into(),
            moons: "1 (The Moon)".into(),
            day_length: "24 hours".into(),
            year_length: "365.25 days".into(),
            image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/9/97/The_Earth_seen_from_Apollo_17.jpg/290px-The_Earth_seen_from_Apollo_17.jpg".into(),
        },
        FixedBody::Mars => BodyFacts {
            classification: "Rocky planet with polar ice caps".into(),
            distance: "1.52 AU from Sun (227.9 million km)".into(),
            diameter: "6,779 km".into(),
            mass: "6.39 × 10^23 kg".into(),
            temperature: "Average: -60°C".into(),
            composition: "Iron core, basaltic rock surface".into(),
            age: "4.6 billion years".into(),
            facts: strings(&[
                "Known as the \"Red Planet\" due to iron oxide",
                "Has the largest volcano in Solar System (Olympus Mons)",
                "Evidence of ancient river valleys",
                "Has seasons like Earth",
                "Target for human colonization",
            ]),
            atmosphere: "95% CO2, 3% Nitrogen, 2% Argon".into(),
            moons: "2 (Phobos and Deimos)".into(),
            day_length: "24 hours 37 minutes".into(),
            year_length: "687 Earth days".into(),
            image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/02/OSIRIS_Mars_true_color.jpg/290px-OSIRIS_Mars_true_color.jpg".into(),
        },
        FixedBody::Jupiter => BodyFacts {
            classification: "Largest planet in Solar System".into(),
            distance: "5.20 AU from Sun (778.5 million km)".into(),
            diameter: "139,820 km".into(),
            mass: "1.898 × 10^27 kg".into(),
            temperature: "Cloud tops: -108°C".into(),
            composition: "90% Hydrogen, 10% Helium, traces of methane".into(),
            age: "4.6 billion years".into(),
            facts: strings(&[
                "Has a Great Red Spot storm lasting 400+ years",
                "Acts as \"vacuum cleaner\" protecting inner planets",
                "Has faint ring system",
                "Emits more heat than it receives from Sun",
                "Could fit all other planets inside it",
            ]),
            atmosphere: "Hydrogen, Helium, with colorful cloud bands".into(),
            moons: "95 known (4 large Galilean moons)".into(),
            day_length: "9 hours 56 minutes".into(),
            year_length: "11.86 Earth years".into(),
            image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2b/Jupiter_and_its_shrunken_Great_Red_Spot.jpg/290px-Jupiter_and_its_shrunken_Great_Red_Spot.jpg".into(),
        },
        FixedBody::Saturn => BodyFacts {
            classification: "Ringed gas giant".into(),
            distance: "9.54 AU from Sun (1.43 billion km)".into(),
            diameter: "116,460 km".into(),
            mass: "5.683 × 10^26 kg".into(),
            temperature: "Cloud tops: -139°C".into(),
            composition: "96% Hydrogen, 3% Helium, traces of methane".into(),
            age: "4.5 billion years".into(),
            facts: strings(&[
                "Spectacular ring system made of ice and rock",
                "Less dense than water (would float!)",
                "Has hexagonal storm at north pole",
                "Rings are only 10 meters thick",
                "Takes 29.5 years to orbit the Sun",
            ]),
            atmosphere: "Hydrogen, Helium, with ammonia crystals".into(),
            moons: "146 known (Titan is larger than Mercury)".into(),
            day_length: "10 hours 42 minutes".into(),
            year_length: "29.5 Earth years".into(),
            image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c7/Saturn_during_Equinox.jpg/290px-Saturn_during_Equinox.jpg".into(),
        },
    }
}
