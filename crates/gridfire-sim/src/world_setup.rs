//! Entity spawn factories for setting up and populating a session.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridfire_core::components::*;
use gridfire_core::constants::*;
use gridfire_core::enums::{Facing, GameSkin, MovementStyle, OwnerTag, PowerUpKind};
use gridfire_core::types::Color;
use gridfire_map::layouts::{self, Layout};

use crate::rules::SkinRules;

/// Explosion debris palette.
const BURST_COLORS: [Color; 4] = [
    [255, 160, 40],
    [255, 220, 90],
    [230, 80, 30],
    [200, 200, 200],
];

/// Pick the level layout for a skin.
pub fn layout_for(skin: GameSkin) -> Layout {
    match skin {
        GameSkin::TankAssault => layouts::tank_assault(),
        GameSkin::StarDefense => layouts::star_defense(),
    }
}

/// Spawn the player at the layout's spawn point with full lives.
pub fn spawn_player(world: &mut World, rules: &SkinRules, spawn: Vec2) -> hecs::Entity {
    world.spawn((
        PlayerTag,
        Position(spawn),
        Body::square(TANK_HALF),
        Mover {
            facing: Facing::Up,
            speed: PLAYER_SPEED,
        },
        Weapon {
            cooldown: 0,
            tier: 0,
        },
        Health {
            lives: rules.starting_lives,
        },
    ))
}

/// Spawn one hostile at a spawn point, facing into the field.
pub fn spawn_hostile(world: &mut World, rng: &mut ChaCha8Rng, rules: &SkinRules, spawn: Vec2) {
    let facing = match rules.movement {
        // Grid hostiles start heading down toward the base.
        MovementStyle::GridBound => Facing::Down,
        // Free-style ships descend; lateral drift comes later from
        // the behavior timer.
        MovementStyle::Free => Facing::Down,
    };
    world.spawn((
        HostileTag,
        Position(spawn),
        Body::square(TANK_HALF),
        Mover {
            facing,
            speed: HOSTILE_SPEED,
        },
        BehaviorTimer {
            ticks_left: rng.gen_range(HOSTILE_DECISION_MIN_TICKS..=HOSTILE_DECISION_MAX_TICKS),
        },
    ));
}

/// Spawn a projectile leaving a muzzle at `origin` along `facing`.
pub fn spawn_projectile(world: &mut World, origin: Vec2, facing: Facing, owner: OwnerTag) {
    let muzzle = origin + facing.delta() * (TANK_HALF + PROJECTILE_HALF + 1.0);
    world.spawn((
        Projectile { owner },
        Position(muzzle),
        Velocity(facing.delta() * PROJECTILE_SPEED),
        Body::square(PROJECTILE_HALF),
    ));
}

/// Spawn an explosion burst of 10-30 particles at a destruction site.
pub fn burst_particles(world: &mut World, rng: &mut ChaCha8Rng, at: Vec2) {
    let count = rng.gen_range(BURST_MIN..=BURST_MAX);
    for _ in 0..count {
        let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed: f32 = rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
        let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
        let color = BURST_COLORS[rng.gen_range(0..BURST_COLORS.len())];
        world.spawn((
            Particle {
                life: rng.gen_range(PARTICLE_LIFE_MIN..=PARTICLE_LIFE_MAX),
                color,
            },
            Position(at),
            Velocity(velocity),
        ));
    }
}

/// Drop a power-up where a hostile died. Kind is an even split.
pub fn spawn_power_up(world: &mut World, rng: &mut ChaCha8Rng, at: Vec2) {
    let kind = if rng.gen_bool(0.5) {
        PowerUpKind::WeaponUpgrade
    } else {
        PowerUpKind::ExtraLife
    };
    world.spawn((
        PowerUp { kind },
        Position(at),
        Body::square(POWER_UP_HALF),
    ));
}
