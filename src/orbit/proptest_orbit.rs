//! Property-based tests for orbital motion using proptest.

use proptest::prelude::*;

use crate::body::{BodyDetails, BodyFacts, BodyKind, NewBody, Orbit};
use crate::registry::BodyRegistry;
use crate::scene::SceneGraph;

use super::advance;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Position at time t equals (D·cos(A+tS), 0, D·sin(A+tS)).
    #[test]
    fn prop_position_matches_closed_form(
        distance in 10.0f32..1000.0,
        speed in -0.1f32..0.1,
        start in 0.0f32..std::f32::consts::TAU,
        t in 0.0f64..10_000.0,
    ) {
        let orbit = Orbit { center_distance: distance, angular_speed: speed, start_angle: start };
        let details = BodyDetails::Planet { class: String::new(), facts: BodyFacts::default() };
        let planet = NewBody::new("Test", BodyKind::Planet, 5.0, details).with_orbit(orbit);

        let mut registry = BodyRegistry::default();
        let mut scene = SceneGraph::new();
        let ids = registry.append(&mut scene, [planet]);
        advance(registry.as_slice(), &mut scene, t);

        let pos = scene.body_world_position(ids[0]).unwrap();
        let angle = start as f64 + t * speed as f64;
        let expected_x = distance as f64 * angle.cos();
        let expected_z = distance as f64 * angle.sin();

        prop_assert!((pos.x as f64 - expected_x).abs() < 1e-2, "x {} vs {}", pos.x, expected_x);
        prop_assert_eq!(pos.y, 0.0);
        prop_assert!((pos.z as f64 - expected_z).abs() < 1e-2, "z {} vs {}", pos.z, expected_z);
    }

    /// Orbit radius is preserved at every time.
    #[test]
    fn prop_distance_from_center_constant(
        distance in 10.0f32..1000.0,
        start in 0.0f32..std::f32::consts::TAU,
        t in 0.0f64..100_000.0,
    ) {
        let orbit = Orbit { center_distance: distance, angular_speed: 0.01, start_angle: start };
        let pos = orbit.position_at(t);
        prop_assert!((pos.length() - distance).abs() < distance * 1e-5);
    }

    /// Repeated evaluation at the same time gives the same position.
    #[test]
    fn prop_position_deterministic(t in 0.0f64..10_000.0) {
        let orbit = Orbit { center_distance: 250.0, angular_speed: 0.008, start_angle: 1.0 };
        prop_assert_eq!(orbit.position_at(t), orbit.position_at(t));
    }
}
