//! Transform synchronization from the scene graph to render entities.

use bevy::prelude::*;

use crate::render::bodies::{SceneEntities, SceneNodeEntity};
use crate::scene::SceneGraph;

/// Copy each node's local transform onto its entity.
///
/// Entities are parented like their nodes, so Bevy's transform propagation
/// yields the same world placement the scene graph computes.
pub fn sync_scene_transforms(
    scene: Res<SceneGraph>,
    entities: Res<SceneEntities>,
    mut query: Query<&mut Transform, With<SceneNodeEntity>>,
) {
    if !scene.is_changed() {
        return;
    }
    for (id, node) in scene.iter() {
        let Some(entity) = entities.get(id) else {
            continue;
        };
        if let Ok(mut transform) = query.get_mut(entity) {
            *transform = node.transform;
        }
    }
}
