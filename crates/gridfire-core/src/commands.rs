//! Host commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so the
//! world is never mutated mid-step.

use serde::{Deserialize, Serialize};

use crate::enums::GameSkin;

/// All host-driven session transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// Leave the menu and start a fresh session with the given skin.
    StartGame { skin: GameSkin },
    /// Pause: the step becomes a snapshot-only no-op, entity state
    /// untouched.
    Pause,
    /// Resume from pause.
    Resume,
    /// Restart the current skin from scratch.
    Reset,
    /// Return to the menu from any state, discarding the session.
    ReturnToMenu,
}
