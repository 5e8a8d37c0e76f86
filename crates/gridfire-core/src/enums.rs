//! Enumeration types used throughout the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Discrete facing direction for grid-bound movers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Facing {
    /// Unit vector for this facing. The world origin is the top-left
    /// corner, so Up points toward negative y.
    pub fn delta(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Right => Vec2::new(1.0, 0.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
        }
    }

    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Right, Facing::Down, Facing::Left];
}

/// Which side a projectile belongs to; projectiles only hit the
/// opposing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerTag {
    Friendly,
    Hostile,
}

/// Pickup effect kinds (tank skin only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Raises the weapon tier, shortening the fire cooldown.
    WeaponUpgrade,
    /// Grants an extra life.
    ExtraLife,
}

/// Tile type codes for the static obstacle map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    /// Breakable wall; a projectile hit turns it Empty.
    Brick,
    /// Indestructible wall; absorbs projectiles.
    Steel,
    /// Decorative overlay; never blocks, drawn above entities.
    Foliage,
    /// The defended objective; its destruction ends the game.
    Base,
    /// The objective after being destroyed.
    BaseRuined,
}

impl Tile {
    /// Whether tanks and ships cannot enter this tile.
    pub fn blocks_movement(self) -> bool {
        matches!(self, Tile::Brick | Tile::Steel | Tile::Base | Tile::BaseRuined)
    }

    /// Whether projectiles interact with this tile.
    pub fn blocks_projectiles(self) -> bool {
        matches!(self, Tile::Brick | Tile::Steel | Tile::Base)
    }
}

/// Which game skin the engine is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSkin {
    /// Tile-grid tank game: blocking map, defended base, power-ups,
    /// lives lost per bullet hit.
    #[default]
    TankAssault,
    /// Free-movement space game: no obstacle map, health lost per
    /// hostile that crosses the bottom bound.
    StarDefense,
}

/// How the player loses a life. The two source games genuinely diverge
/// here; both policies are kept rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeLossPolicy {
    /// One life per hostile projectile hit (tank skin).
    PerHit,
    /// One health per hostile reaching the bottom bound; being hit by
    /// a projectile does not cost health (space skin).
    PerBreach,
}

/// Movement style for the player and hostiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementStyle {
    /// Axis-locked movement checked against the blocking tile grid.
    GridBound,
    /// Unconstrained movement clamped to the play bounds.
    Free,
}

/// Game phase (top-level state machine).
/// `Menu -> Playing -> {GameOver, Victory} -> Menu`, with
/// `Playing <-> Paused` superimposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
    Victory,
}

/// Tri-state outcome of a tick, edge-triggered: the transitioning
/// tick's snapshot carries GameOver or Victory exactly once, after
/// which the phase latches and the signal reverts to None.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalSignal {
    #[default]
    None,
    GameOver,
    Victory,
}
