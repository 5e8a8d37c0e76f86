//! Power-up pickup resolution (tank skin only in practice; the system
//! is a no-op when nothing drops pickups).

use hecs::{Entity, World};

use gridfire_core::components::*;
use gridfire_core::constants::MAX_WEAPON_TIER;
use gridfire_core::enums::PowerUpKind;
use gridfire_core::events::GameEvent;

/// Apply any pickup the player overlaps, then remove it. Uncollected
/// pickups persist on the field indefinitely.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<GameEvent>) {
    let player_box = world
        .query_mut::<(&PlayerTag, &Position, &Body)>()
        .into_iter()
        .map(|(_, (_tag, pos, body))| body.aabb(pos))
        .next();
    let Some(player_box) = player_box else {
        return;
    };

    let collected: Vec<(Entity, PowerUpKind)> = world
        .query_mut::<(&PowerUp, &Position, &Body)>()
        .into_iter()
        .filter(|(_, (_pickup, pos, body))| body.aabb(pos).intersects(&player_box))
        .map(|(entity, (pickup, _pos, _body))| (entity, pickup.kind))
        .collect();

    for (entity, kind) in collected {
        match kind {
            PowerUpKind::WeaponUpgrade => {
                for (_e, (_tag, weapon)) in world.query_mut::<(&PlayerTag, &mut Weapon)>() {
                    weapon.tier = (weapon.tier + 1).min(MAX_WEAPON_TIER);
                }
            }
            PowerUpKind::ExtraLife => {
                for (_e, (_tag, health)) in world.query_mut::<(&PlayerTag, &mut Health)>() {
                    health.lives += 1;
                }
            }
        }
        despawn_buffer.push(entity);
        events.push(GameEvent::PowerUpCollected { kind });
    }
}
