//! Game state snapshot — the complete visible state returned to the
//! host after each tick. The renderer reads snapshots only, which
//! keeps its read-only contract structural rather than conventional.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Color, TickTime};

/// Complete game state handed to the host after each step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: TickTime,
    pub phase: GamePhase,
    pub skin: GameSkin,
    /// Monotonically non-decreasing within a session.
    pub score: u32,
    /// Lives (tank skin) or health (space skin); zero is terminal.
    pub lives: u32,
    /// Hostiles left to defeat, counting both unspawned and live ones.
    pub hostiles_remaining: u32,
    /// Edge-triggered terminal outcome for this tick.
    pub terminal: TerminalSignal,
    pub player: Option<PlayerView>,
    pub hostiles: Vec<HostileView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub power_ups: Vec<PowerUpView>,
    /// Present for grid-bound skins only.
    pub grid: Option<GridView>,
    /// One-shot events since the previous snapshot.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub facing: Facing,
    pub lives: u32,
    pub weapon_tier: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HostileView {
    pub position: Vec2,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub owner: OwnerTag,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec2,
    pub color: Color,
    pub life: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUpView {
    pub position: Vec2,
    pub kind: PowerUpKind,
}

/// Tile grid contents for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridView {
    pub cols: usize,
    pub rows: usize,
    /// Row-major tile codes, `rows * cols` entries.
    pub tiles: Vec<Tile>,
}
