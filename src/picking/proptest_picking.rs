//! Property-based tests for picking using proptest.

use bevy::prelude::*;
use proptest::prelude::*;

use crate::camera::{CameraPose, Lens};
use crate::catalog::FixedBody;
use crate::orbit;
use crate::registry::BodyRegistry;
use crate::scene::SceneGraph;
use crate::test_utils::fixtures;

use super::{pick, pick_at, ray_from_ndc};

fn solar_system(t: f64, start: f32) -> (BodyRegistry, SceneGraph) {
    let (registry, mut scene) = fixtures::solar_system(start);
    orbit::advance(registry.as_slice(), &mut scene, t);
    (registry, scene)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Same pose, pointer and scene always resolve to the same body.
    #[test]
    fn prop_pick_is_idempotent(
        x in -1.0f32..1.0,
        y in -1.0f32..1.0,
        t in 0.0f64..1000.0,
        start in 0.0f32..std::f32::consts::TAU,
    ) {
        let (_, scene) = solar_system(t, start);
        let pose = CameraPose::default();
        let lens = Lens::default();
        let ndc = Vec2::new(x, y);

        let first = pick_at(&scene, &pose, &lens, 1.6, ndc);
        for _ in 0..3 {
            prop_assert_eq!(pick_at(&scene, &pose, &lens, 1.6, ndc), first);
        }
    }

    /// A hit always resolves to a registered body, never to a decoration.
    #[test]
    fn prop_hits_resolve_to_registered_bodies(
        x in -1.0f32..1.0,
        y in -1.0f32..1.0,
        t in 0.0f64..1000.0,
    ) {
        let (registry, scene) = solar_system(t, 0.3);
        let ray = ray_from_ndc(&CameraPose::default(), &Lens::default(), 1.6, Vec2::new(x, y));
        if let Some(hit) = pick(&scene, ray) {
            prop_assert!(registry.get(hit.body).is_some());
            let node = scene.body_node(hit.body).unwrap();
            prop_assert_eq!(scene.node(node).unwrap().body(), Some(hit.body));
        }
    }

    /// Rays passing only through the Sun's glow shells select nothing.
    #[test]
    fn prop_glow_shell_never_selects(
        offset in 51.0f32..109.0,
        angle in 0.0f32..std::f32::consts::TAU,
    ) {
        let mut registry = BodyRegistry::default();
        let mut scene = SceneGraph::new();
        registry.append(&mut scene, [FixedBody::Sun.to_new_body(0.0)]);

        let lateral = Vec3::new(angle.cos(), angle.sin(), 0.0) * offset;
        let ray = Ray3d::new(lateral + Vec3::Z * 500.0, Dir3::NEG_Z);
        prop_assert_eq!(pick(&scene, ray), None);
    }
}
