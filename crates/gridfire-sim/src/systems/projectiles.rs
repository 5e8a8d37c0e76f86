//! Projectile system: flight, bounds, tile resolution, and
//! entity-vs-entity hit resolution.
//!
//! Collisions are resolved independently per projectile and each
//! projectile is credited with at most one kill; two different
//! projectiles may still take down two different targets in the same
//! tick. Every removal goes through the despawn buffer, drained once
//! by the cleanup system.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridfire_core::components::*;
use gridfire_core::constants::*;
use gridfire_core::enums::{LifeLossPolicy, OwnerTag, Tile};
use gridfire_core::events::GameEvent;
use gridfire_core::types::{point_in_play_bounds, Aabb};
use gridfire_map::TileGrid;

use crate::engine::ScoreState;
use crate::rules::SkinRules;
use crate::world_setup;

/// Advance and resolve every projectile one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    grid: &mut TileGrid,
    rules: &SkinRules,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    score: &mut ScoreState,
    player_spawn: Vec2,
) {
    // Flight.
    for (_entity, (pos, vel, _shot)) in
        world.query_mut::<(&mut Position, &Velocity, &Projectile)>()
    {
        pos.0 += vel.0 * DT;
    }

    let shots: Vec<(Entity, Vec2, OwnerTag, Vec2)> = world
        .query_mut::<(&Projectile, &Position, &Body)>()
        .into_iter()
        .map(|(entity, (shot, pos, body))| (entity, pos.0, shot.owner, body.half))
        .collect();

    let hostiles: Vec<(Entity, Aabb)> = world
        .query_mut::<(&HostileTag, &Position, &Body)>()
        .into_iter()
        .map(|(entity, (_tag, pos, body))| (entity, body.aabb(pos)))
        .collect();

    let player: Option<(Entity, Aabb)> = world
        .query_mut::<(&PlayerTag, &Position, &Body)>()
        .into_iter()
        .map(|(entity, (_tag, pos, body))| (entity, body.aabb(pos)))
        .next();

    let mut killed: Vec<Entity> = Vec::new();
    let mut bursts: Vec<Vec2> = Vec::new();
    let mut drops: Vec<Vec2> = Vec::new();
    let mut player_hits = 0u32;

    for (entity, position, owner, half) in shots {
        // Out of bounds: removed with no collision side effects.
        if !point_in_play_bounds(position) {
            despawn_buffer.push(entity);
            continue;
        }

        // Tile resolution at the projectile's cell.
        if let Some((col, row)) = grid.cell_at(position) {
            let tile = grid.get(col, row);
            if tile.blocks_projectiles() {
                match tile {
                    Tile::Brick => {
                        grid.set(col, row, Tile::Empty);
                        events.push(GameEvent::TileDestroyed { col, row });
                    }
                    Tile::Base => {
                        grid.set(col, row, Tile::BaseRuined);
                        events.push(GameEvent::BaseDestroyed);
                    }
                    // Steel just absorbs the shot.
                    _ => {}
                }
                bursts.push(position);
                despawn_buffer.push(entity);
                continue;
            }
        }

        let shot_box = Aabb::new(position, half);
        match owner {
            OwnerTag::Friendly => {
                let target = hostiles
                    .iter()
                    .find(|(hostile, hit_box)| {
                        !killed.contains(hostile)
                            && !despawn_buffer.contains(hostile)
                            && shot_box.intersects(hit_box)
                    })
                    .copied();
                if let Some((hostile, hit_box)) = target {
                    killed.push(hostile);
                    despawn_buffer.push(hostile);
                    despawn_buffer.push(entity);
                    bursts.push(hit_box.center);
                    score.score += SCORE_PER_KILL;
                    score.hostiles_remaining = score.hostiles_remaining.saturating_sub(1);
                    score.hostiles_downed += 1;
                    events.push(GameEvent::HostileDown {
                        score_awarded: SCORE_PER_KILL,
                    });
                    if rules.power_up_drops && rng.gen_bool(POWER_UP_DROP_CHANCE) {
                        drops.push(hit_box.center);
                    }
                }
            }
            OwnerTag::Hostile => {
                if let Some((_player_entity, player_box)) = &player {
                    if shot_box.intersects(player_box) {
                        despawn_buffer.push(entity);
                        bursts.push(position);
                        if rules.life_loss == LifeLossPolicy::PerHit {
                            player_hits += 1;
                        }
                    }
                }
            }
        }
    }

    // Apply player hits: one life per bullet, respawn at the player
    // spawn point, fatal at zero (the entity leaves the world and the
    // terminal check fires this tick).
    if player_hits > 0 {
        let mut fatal = None;
        for (entity, (_tag, pos, health)) in
            world.query_mut::<(&PlayerTag, &mut Position, &mut Health)>()
        {
            for _ in 0..player_hits {
                health.lives = health.lives.saturating_sub(1);
                events.push(GameEvent::PlayerHit {
                    lives_left: health.lives,
                });
            }
            if health.lives == 0 {
                fatal = Some(entity);
            } else {
                pos.0 = player_spawn;
            }
        }
        if let Some(entity) = fatal {
            despawn_buffer.push(entity);
        }
    }

    for at in bursts {
        world_setup::burst_particles(world, rng, at);
        events.push(GameEvent::Explosion { position: at });
    }
    for at in drops {
        world_setup::spawn_power_up(world, rng, at);
    }
}
