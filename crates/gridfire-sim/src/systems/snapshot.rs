//! Snapshot system: queries the ECS world and builds a complete
//! GameSnapshot. Read-only — it never modifies the world.

use hecs::World;

use gridfire_core::components::*;
use gridfire_core::enums::{GamePhase, GameSkin, TerminalSignal};
use gridfire_core::events::GameEvent;
use gridfire_core::state::*;
use gridfire_core::types::TickTime;
use gridfire_map::TileGrid;

use crate::engine::ScoreState;

/// Build a complete snapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    grid: Option<&TileGrid>,
    time: TickTime,
    phase: GamePhase,
    skin: GameSkin,
    score: &ScoreState,
    terminal: TerminalSignal,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    let player = build_player(world);

    GameSnapshot {
        time,
        phase,
        skin,
        score: score.score,
        lives: player.map_or(0, |p| p.lives),
        hostiles_remaining: score.hostiles_remaining,
        terminal,
        player,
        hostiles: build_hostiles(world),
        projectiles: build_projectiles(world),
        particles: build_particles(world),
        power_ups: build_power_ups(world),
        grid: grid.map(TileGrid::view),
        events,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&PlayerTag, &Position, &Mover, &Health, &Weapon)>()
        .iter()
        .next()
        .map(|(_, (_tag, pos, mover, health, weapon))| PlayerView {
            position: pos.0,
            facing: mover.facing,
            lives: health.lives,
            weapon_tier: weapon.tier,
        })
}

fn build_hostiles(world: &World) -> Vec<HostileView> {
    let mut views: Vec<HostileView> = world
        .query::<(&HostileTag, &Position, &Mover)>()
        .iter()
        .map(|(_, (_tag, pos, mover))| HostileView {
            position: pos.0,
            facing: mover.facing,
        })
        .collect();
    sort_by_position(&mut views, |v| v.position);
    views
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (shot, pos))| ProjectileView {
            position: pos.0,
            owner: shot.owner,
        })
        .collect();
    sort_by_position(&mut views, |v| v.position);
    views
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    let mut views: Vec<ParticleView> = world
        .query::<(&Particle, &Position)>()
        .iter()
        .map(|(_, (particle, pos))| ParticleView {
            position: pos.0,
            color: particle.color,
            life: particle.life,
        })
        .collect();
    sort_by_position(&mut views, |v| v.position);
    views
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    let mut views: Vec<PowerUpView> = world
        .query::<(&PowerUp, &Position)>()
        .iter()
        .map(|(_, (pickup, pos))| PowerUpView {
            position: pos.0,
            kind: pickup.kind,
        })
        .collect();
    sort_by_position(&mut views, |v| v.position);
    views
}

/// Stable display ordering independent of archetype iteration order.
fn sort_by_position<T>(views: &mut [T], key: impl Fn(&T) -> glam::Vec2) {
    views.sort_by(|a, b| {
        let (a, b) = (key(a), key(b));
        a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
    });
}
