//! Cleanup system: drains the despawn buffer accumulated by the other
//! systems. Runs last so no system ever observes a half-removed
//! entity mid-tick.

use hecs::{Entity, World};

/// Despawn everything the tick marked for removal. Duplicate entries
/// are harmless: the second despawn is a no-op, keeping removal
/// exactly-once per entity.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
