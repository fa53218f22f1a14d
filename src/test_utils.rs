//! Test utilities for star map tests.
//!
//! Provides fixtures for populated registries and feed bodies.

/// Fixtures for building registries and their scene graphs.
pub mod fixtures {
    use crate::body::{BodyDetails, BodyKind, NeoDetails, NewBody};
    use crate::catalog::FixedBody;
    use crate::registry::BodyRegistry;
    use crate::scene::SceneGraph;
    use bevy::math::Vec3;

    /// Sun and all six planets, every orbit starting at `start_angle`.
    pub fn solar_system(start_angle: f32) -> (BodyRegistry, SceneGraph) {
        let mut registry = BodyRegistry::default();
        let mut scene = SceneGraph::new();
        registry.append(
            &mut scene,
            FixedBody::ALL.iter().map(|b| b.to_new_body(start_angle)),
        );
        (registry, scene)
    }

    /// A stationary feed body at `placement`.
    pub fn neo(name: &str, hazardous: bool, placement: Vec3) -> NewBody {
        NewBody::new(
            name,
            BodyKind::NearEarthObject,
            3.0,
            BodyDetails::NearEarthObject(NeoDetails {
                original_name: name.to_string(),
                hazardous,
                ..Default::default()
            }),
        )
        .with_placement(placement)
    }
}
