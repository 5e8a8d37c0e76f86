//! Per-skin tuning: one engine, two game skins.
//!
//! The two source games differ in movement, how the player loses
//! lives, and what the field looks like. Those differences are data,
//! not code paths scattered through the systems.

use gridfire_core::enums::{GameSkin, LifeLossPolicy, MovementStyle};

/// Behavior knobs that distinguish the skins.
#[derive(Debug, Clone)]
pub struct SkinRules {
    pub skin: GameSkin,
    pub movement: MovementStyle,
    pub life_loss: LifeLossPolicy,
    /// Starting lives (tank) or health (space).
    pub starting_lives: u32,
    /// Total hostiles the session will spawn.
    pub total_hostiles: u32,
    /// Maximum hostiles alive at once.
    pub max_concurrent: u32,
    /// Probability a hostile fires when its behavior timer expires.
    pub hostile_fire_chance: f64,
    /// Per-tick velocity multiplier for particles (1.0 = no decay).
    pub particle_decay: f32,
    /// Whether destroyed hostiles may drop power-ups.
    pub power_up_drops: bool,
}

impl SkinRules {
    pub fn for_skin(skin: GameSkin) -> Self {
        match skin {
            GameSkin::TankAssault => Self::tank_assault(),
            GameSkin::StarDefense => Self::star_defense(),
        }
    }

    /// Tile-grid tank game: lives lost per bullet hit, base to defend,
    /// power-up drops, decaying explosion debris.
    pub fn tank_assault() -> Self {
        Self {
            skin: GameSkin::TankAssault,
            movement: MovementStyle::GridBound,
            life_loss: LifeLossPolicy::PerHit,
            starting_lives: 3,
            total_hostiles: 12,
            max_concurrent: 4,
            hostile_fire_chance: 0.4,
            particle_decay: 0.9,
            power_up_drops: true,
        }
    }

    /// Free-movement space game: health lost only when a ship crosses
    /// the bottom bound, no obstacle map, no pickups.
    pub fn star_defense() -> Self {
        Self {
            skin: GameSkin::StarDefense,
            movement: MovementStyle::Free,
            life_loss: LifeLossPolicy::PerBreach,
            starting_lives: 5,
            total_hostiles: 20,
            max_concurrent: 6,
            hostile_fire_chance: 0.25,
            particle_decay: 1.0,
            power_up_drops: false,
        }
    }
}
