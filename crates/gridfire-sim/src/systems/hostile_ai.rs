//! Hostile behavior: timer-driven random decisions, movement with the
//! same overlap-rejection policy as the player, and bottom-bound
//! breaches in the free-movement skin.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridfire_core::components::*;
use gridfire_core::constants::*;
use gridfire_core::enums::{Facing, LifeLossPolicy, MovementStyle, OwnerTag};
use gridfire_core::events::GameEvent;
use gridfire_core::types::Aabb;
use gridfire_map::TileGrid;

use crate::engine::ScoreState;
use crate::rules::SkinRules;
use crate::world_setup;

/// Facings a free-style ship may drift in; it never climbs back up.
const DRIFT_FACINGS: [Facing; 3] = [Facing::Left, Facing::Right, Facing::Down];

/// Advance every hostile one tick.
pub fn run(
    world: &mut World,
    grid: &TileGrid,
    rules: &SkinRules,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    score: &mut ScoreState,
) {
    let hostiles: Vec<Entity> = world
        .query_mut::<(&HostileTag, &BehaviorTimer)>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();

    let mut fire_requests: Vec<(Vec2, Facing)> = Vec::new();
    let mut breaches = 0u32;

    for entity in hostiles {
        // Decision: at timer expiry pick a fresh facing and maybe
        // request a shot; no pathfinding anywhere.
        let mut wants_fire = false;
        if let Ok(mut timer) = world.get::<&mut BehaviorTimer>(entity) {
            if timer.ticks_left == 0 {
                timer.ticks_left =
                    rng.gen_range(HOSTILE_DECISION_MIN_TICKS..=HOSTILE_DECISION_MAX_TICKS);
                drop(timer);
                let facing = random_facing(rng, rules.movement);
                if let Ok(mut mover) = world.get::<&mut Mover>(entity) {
                    mover.facing = facing;
                }
                wants_fire = rng.gen_bool(rules.hostile_fire_chance);
            } else {
                timer.ticks_left -= 1;
            }
        }

        // Boxes of every other tank, sampled fresh so earlier movers
        // this tick are seen at their new positions.
        let other_boxes: Vec<Aabb> = world
            .query_mut::<(&Mover, &Position, &Body)>()
            .into_iter()
            .filter(|(other, _)| *other != entity && !despawn_buffer.contains(other))
            .map(|(_, (_mover, pos, body))| body.aabb(pos))
            .collect();

        let (position, half, facing, speed) = {
            let pos = match world.get::<&Position>(entity) {
                Ok(p) => p.0,
                Err(_) => continue,
            };
            let body = match world.get::<&Body>(entity) {
                Ok(b) => *b,
                Err(_) => continue,
            };
            let mover = match world.get::<&Mover>(entity) {
                Ok(m) => *m,
                Err(_) => continue,
            };
            (pos, body.half, mover.facing, mover.speed)
        };

        match rules.movement {
            MovementStyle::GridBound => {
                let candidate = position + facing.delta() * speed * DT;
                let candidate_box = Aabb::new(candidate, half);
                let blocked = !candidate_box.inside_play_bounds()
                    || grid.blocked_rect(&candidate_box)
                    || other_boxes.iter().any(|b| candidate_box.intersects(b));
                if blocked {
                    // Bounce fallback: stay put this tick and turn.
                    let new_facing = random_facing(rng, rules.movement);
                    if let Ok(mut mover) = world.get::<&mut Mover>(entity) {
                        mover.facing = new_facing;
                    }
                } else if let Ok(mut pos) = world.get::<&mut Position>(entity) {
                    pos.0 = candidate;
                }
            }
            MovementStyle::Free => {
                // Ships always descend; the facing only adds lateral
                // drift. Crossing the bottom bound is a breach.
                let lateral = match facing {
                    Facing::Left => -0.6,
                    Facing::Right => 0.6,
                    _ => 0.0,
                };
                let mut next = position + Vec2::new(lateral, 1.0) * speed * DT;
                next.x = next.x.clamp(half.x, PLAY_WIDTH - half.x);
                if next.y + half.y >= PLAY_HEIGHT {
                    despawn_buffer.push(entity);
                    score.hostiles_remaining = score.hostiles_remaining.saturating_sub(1);
                    breaches += 1;
                    continue;
                }
                if let Ok(mut pos) = world.get::<&mut Position>(entity) {
                    pos.0 = next;
                }
            }
        }

        if wants_fire {
            let fire_facing = match rules.movement {
                MovementStyle::GridBound => facing,
                MovementStyle::Free => Facing::Down,
            };
            fire_requests.push((position, fire_facing));
        }
    }

    // Breaches cost health once per breacher, never per hit taken.
    if breaches > 0 && rules.life_loss == LifeLossPolicy::PerBreach {
        let mut health_left = 0;
        for (_entity, (_tag, health)) in world.query_mut::<(&PlayerTag, &mut Health)>() {
            health.lives = health.lives.saturating_sub(breaches);
            health_left = health.lives;
        }
        for _ in 0..breaches {
            events.push(GameEvent::Breach { health_left });
        }
    }

    for (origin, facing) in fire_requests {
        world_setup::spawn_projectile(world, origin, facing, OwnerTag::Hostile);
        events.push(GameEvent::ShotFired {
            owner: OwnerTag::Hostile,
        });
    }
}

fn random_facing(rng: &mut ChaCha8Rng, movement: MovementStyle) -> Facing {
    match movement {
        MovementStyle::GridBound => Facing::ALL[rng.gen_range(0..Facing::ALL.len())],
        MovementStyle::Free => DRIFT_FACINGS[rng.gen_range(0..DRIFT_FACINGS.len())],
    }
}
