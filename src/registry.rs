//! Body registry: the ordered, append-only collection of all known bodies.

use std::sync::Arc;

use bevy::prelude::*;

use crate::body::{CelestialBody, NewBody};
use crate::scene::SceneGraph;
use crate::types::BodyId;

/// Ordered collection of bodies, in insertion order.
///
/// Storage is copy-on-append: [`BodyRegistry::snapshot`] hands out a shared
/// view that later appends never modify, so a pass over a snapshot always
/// sees one consistent membership.
#[derive(Resource, Clone, Debug, Default)]
pub struct BodyRegistry {
    bodies: Arc<Vec<CelestialBody>>,
}

impl BodyRegistry {
    /// Append bodies, assigning identities in order, and add their scene nodes.
    ///
    /// Returns the identities of the new bodies. No deduplication is done
    /// against earlier appends.
    pub fn append(
        &mut self,
        scene: &mut SceneGraph,
        new_bodies: impl IntoIterator<Item = NewBody>,
    ) -> Vec<BodyId> {
        let bodies = Arc::make_mut(&mut self.bodies);
        let mut ids = Vec::new();
        for new in new_bodies {
            let id = BodyId::from_index(bodies.len());
            let body = CelestialBody::from_new(id, new);
            scene.insert_body(&body);
            bodies.push(body);
            ids.push(id);
        }
        ids
    }

    /// Shared view of the current membership.
    pub fn snapshot(&self) -> Arc<Vec<CelestialBody>> {
        Arc::clone(&self.bodies)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn as_slice(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// First body, in insertion order, whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|body| body.name == name)
    }
}
