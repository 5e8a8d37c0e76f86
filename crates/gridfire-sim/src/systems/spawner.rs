//! Spawn director: a countdown timer that feeds hostiles into the
//! field at fixed entry points, ramping up with score.

use glam::Vec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use gridfire_core::components::{Body, HostileTag, Mover, Position};
use gridfire_core::constants::*;

use crate::rules::SkinRules;
use crate::world_setup;

/// Running spawn state for a session.
#[derive(Debug, Clone)]
pub struct SpawnerState {
    /// Ticks until the next spawn attempt.
    pub timer: u32,
    /// Hostiles not yet spawned this session.
    pub remaining_to_spawn: u32,
    /// Round-robin index into the spawn point list.
    pub next_point: usize,
}

impl SpawnerState {
    /// Fresh state; the first spawn attempt happens on the first tick.
    pub fn new(total_hostiles: u32) -> Self {
        Self {
            timer: 0,
            remaining_to_spawn: total_hostiles,
            next_point: 0,
        }
    }
}

/// Spawn interval for the current score. Difficulty ramps with score:
/// the interval shrinks but never drops below the floor.
pub fn interval_for_score(score: u32) -> u32 {
    SPAWN_INTERVAL_START_TICKS
        .saturating_sub(score / SPAWN_INTERVAL_SCORE_STEP)
        .max(SPAWN_INTERVAL_MIN_TICKS)
}

/// Run one spawn-director tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    rules: &SkinRules,
    state: &mut SpawnerState,
    score: u32,
    spawn_points: &[Vec2],
) {
    if state.remaining_to_spawn == 0 || spawn_points.is_empty() {
        return;
    }
    if state.timer > 0 {
        state.timer -= 1;
        return;
    }
    state.timer = interval_for_score(score);

    let live_hostiles = world.query_mut::<&HostileTag>().into_iter().count();
    if live_hostiles >= rules.max_concurrent as usize {
        return;
    }

    let point = spawn_points[state.next_point % spawn_points.len()];
    state.next_point += 1;

    // Skip if any tank/ship sits within one tile-width of the point;
    // the attempt is lost, counts unchanged this tick.
    let occupied = world
        .query_mut::<(&Mover, &Position, &Body)>()
        .into_iter()
        .any(|(_, (_mover, pos, _body))| {
            (pos.0.x - point.x).abs() < SPAWN_CLEARANCE && (pos.0.y - point.y).abs() < SPAWN_CLEARANCE
        });
    if occupied {
        return;
    }

    world_setup::spawn_hostile(world, rng, rules, point);
    state.remaining_to_spawn -= 1;
}
