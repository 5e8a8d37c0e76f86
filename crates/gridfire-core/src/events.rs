//! Events emitted by the simulation for host audio and UI feedback.
//!
//! Events are drained into each tick's snapshot, so every event is
//! observed exactly once.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{OwnerTag, PowerUpKind};

/// One-shot feedback events for the host sound/UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A shot left a barrel.
    ShotFired { owner: OwnerTag },
    /// A particle burst went off at this position.
    Explosion { position: Vec2 },
    /// A breakable tile was shot out.
    TileDestroyed { col: usize, row: usize },
    /// A hostile was destroyed; score already credited.
    HostileDown { score_awarded: u32 },
    /// The player took a hit and lost a life.
    PlayerHit { lives_left: u32 },
    /// A pickup was collected.
    PowerUpCollected { kind: PowerUpKind },
    /// The defended base was destroyed.
    BaseDestroyed,
    /// A hostile crossed the bottom bound (space skin).
    Breach { health_left: u32 },
}
