//! Simulation systems, called in a fixed order each tick:
//! alien fire + movement, collision resolution + disposal flush, then the
//! deferred formation logic pass. The snapshot builder is read-only.

pub mod alien_fire;
pub mod collision;
pub mod formation;
pub mod movement;
pub mod snapshot;

use hecs::Entity;

/// Add an entity to the disposal buffer. Set semantics: marking an entity
/// twice within a tick is a no-op.
pub(crate) fn mark_for_disposal(disposal: &mut Vec<Entity>, entity: Entity) {
    if !disposal.contains(&entity) {
        disposal.push(entity);
    }
}
