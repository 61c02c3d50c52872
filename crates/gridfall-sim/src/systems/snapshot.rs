//! Read-only view builder. Walks the roster in insertion order so the
//! renderer's draw order is stable across frames.

use hecs::{Entity, World};

use gridfall_core::enums::EntityKind;
use gridfall_core::state::EntityView;
use gridfall_core::types::Position;

/// Collect one `EntityView` per live entity, in roster order.
pub fn entity_views(world: &World, roster: &[Entity]) -> Vec<EntityView> {
    let mut views = Vec::with_capacity(roster.len());
    for &entity in roster {
        let (Ok(kind), Ok(pos)) = (
            world.get::<&EntityKind>(entity),
            world.get::<&Position>(entity),
        ) else {
            continue;
        };
        views.push(EntityView {
            x: pos.x as i32,
            y: pos.y as i32,
            sprite: kind.sprite(),
        });
    }
    views
}
