//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Play bounds ---

/// Play area width in world units.
pub const PLAY_WIDTH: f32 = 400.0;

/// Play area height in world units.
pub const PLAY_HEIGHT: f32 = 350.0;

/// Tile edge length in world units (16 x 14 cells).
pub const TILE_SIZE: f32 = 25.0;

/// Grid columns covering the play area.
pub const GRID_COLS: usize = (PLAY_WIDTH / TILE_SIZE) as usize;

/// Grid rows covering the play area.
pub const GRID_ROWS: usize = (PLAY_HEIGHT / TILE_SIZE) as usize;

// --- Player ---

/// Player movement speed (units/sec).
pub const PLAYER_SPEED: f32 = 90.0;

/// Player/hostile body half extent (square tanks and ships).
pub const TANK_HALF: f32 = 10.0;

/// Highest reachable weapon tier.
pub const MAX_WEAPON_TIER: u8 = 2;

/// Fire cooldown in ticks for a weapon tier (shorter at higher tiers).
pub fn cooldown_for_tier(tier: u8) -> u32 {
    match tier {
        0 => 12,
        1 => 8,
        _ => 5,
    }
}

// --- Projectiles ---

/// Projectile speed (units/sec).
pub const PROJECTILE_SPEED: f32 = 240.0;

/// Projectile body half extent.
pub const PROJECTILE_HALF: f32 = 2.5;

// --- Hostiles ---

/// Hostile movement speed (units/sec).
pub const HOSTILE_SPEED: f32 = 50.0;

/// Behavior timer reset range (ticks) between random decisions.
pub const HOSTILE_DECISION_MIN_TICKS: u32 = 20;
pub const HOSTILE_DECISION_MAX_TICKS: u32 = 70;

// --- Spawning ---

/// Spawn interval at zero score (ticks).
pub const SPAWN_INTERVAL_START_TICKS: u32 = 90;

/// Spawn interval floor the difficulty ramp never drops below (ticks).
pub const SPAWN_INTERVAL_MIN_TICKS: u32 = 30;

/// Score points that shave one tick off the spawn interval.
pub const SPAWN_INTERVAL_SCORE_STEP: u32 = 50;

/// A spawn point is considered occupied when a tank/ship AABB lies
/// within one tile-width of it.
pub const SPAWN_CLEARANCE: f32 = TILE_SIZE;

// --- Scoring ---

/// Score awarded per hostile destroyed.
pub const SCORE_PER_KILL: u32 = 100;

// --- Particles ---

/// Particle burst size range on any destruction event.
pub const BURST_MIN: u32 = 10;
pub const BURST_MAX: u32 = 30;

/// Particle lifetime range (ticks).
pub const PARTICLE_LIFE_MIN: u32 = 10;
pub const PARTICLE_LIFE_MAX: u32 = 25;

/// Particle initial speed range (units/sec).
pub const PARTICLE_SPEED_MIN: f32 = 30.0;
pub const PARTICLE_SPEED_MAX: f32 = 120.0;

// --- Power-ups ---

/// Probability that a destroyed hostile drops a power-up (tank skin).
pub const POWER_UP_DROP_CHANCE: f64 = 0.2;

/// Power-up pickup body half extent.
pub const POWER_UP_HALF: f32 = 8.0;
