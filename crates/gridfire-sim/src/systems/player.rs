//! Player system: movement with full-candidate rejection, fire
//! cooldown, and shot spawning.

use hecs::World;

use gridfire_core::components::*;
use gridfire_core::constants::*;
use gridfire_core::enums::{Facing, MovementStyle, OwnerTag};
use gridfire_core::events::GameEvent;
use gridfire_core::input::{Action, InputSnapshot};
use gridfire_core::types::Aabb;
use gridfire_map::TileGrid;

use crate::rules::SkinRules;
use crate::world_setup;

/// Movement direction requested by the input snapshot. First active
/// axis wins, matching the source games' key priority.
fn requested_direction(input: &InputSnapshot) -> Option<Facing> {
    if input.is_active(Action::MoveUp) {
        Some(Facing::Up)
    } else if input.is_active(Action::MoveDown) {
        Some(Facing::Down)
    } else if input.is_active(Action::MoveLeft) {
        Some(Facing::Left)
    } else if input.is_active(Action::MoveRight) {
        Some(Facing::Right)
    } else {
        None
    }
}

/// Advance the player one tick.
pub fn run(
    world: &mut World,
    grid: &TileGrid,
    rules: &SkinRules,
    input: &InputSnapshot,
    events: &mut Vec<GameEvent>,
) {
    // Boxes the player may not drive through.
    let hostile_boxes: Vec<Aabb> = world
        .query_mut::<(&HostileTag, &Position, &Body)>()
        .into_iter()
        .map(|(_, (_tag, pos, body))| body.aabb(pos))
        .collect();

    let mut fire_request = None;

    for (_entity, (_tag, pos, body, mover, weapon)) in
        world.query_mut::<(&PlayerTag, &mut Position, &Body, &mut Mover, &mut Weapon)>()
    {
        if let Some(direction) = requested_direction(input) {
            let candidate = pos.0 + direction.delta() * mover.speed * DT;
            match rules.movement {
                MovementStyle::Free => {
                    // Free style keeps facing Up (shots go upward) and
                    // clamps the body inside the play bounds.
                    pos.0.x = candidate.x.clamp(body.half.x, PLAY_WIDTH - body.half.x);
                    pos.0.y = candidate.y.clamp(body.half.y, PLAY_HEIGHT - body.half.y);
                }
                MovementStyle::GridBound => {
                    mover.facing = direction;
                    // Overlap is rejected at the full candidate
                    // position: no sliding, no partial movement.
                    let candidate_box = Aabb::new(candidate, body.half);
                    let blocked = !candidate_box.inside_play_bounds()
                        || grid.blocked_rect(&candidate_box)
                        || hostile_boxes.iter().any(|b| candidate_box.intersects(b));
                    if !blocked {
                        pos.0 = candidate;
                    }
                }
            }
        }

        // Cooldown ticks down first; fire only lands on a zero timer.
        weapon.cooldown = weapon.cooldown.saturating_sub(1);
        if input.is_active(Action::Fire) && weapon.cooldown == 0 {
            fire_request = Some((pos.0, mover.facing));
            weapon.cooldown = cooldown_for_tier(weapon.tier);
        }
    }

    if let Some((origin, facing)) = fire_request {
        world_setup::spawn_projectile(world, origin, facing, OwnerTag::Friendly);
        events.push(GameEvent::ShotFired {
            owner: OwnerTag::Friendly,
        });
    }
}
