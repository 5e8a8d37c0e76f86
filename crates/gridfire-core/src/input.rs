//! Logical input actions and the per-frame input snapshot.
//!
//! The snapshot holds current-instant held state only. There is no
//! buffering or queueing: a key pressed and released between two
//! frames is invisible to the simulation. That is a documented
//! limitation of the sampling model, not a bug.

use serde::{Deserialize, Serialize};

/// The fixed set of logical actions the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
    Pause,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Fire,
        Action::Pause,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Action::MoveUp => 0,
            Action::MoveDown => 1,
            Action::MoveLeft => 2,
            Action::MoveRight => 3,
            Action::Fire => 4,
            Action::Pause => 5,
        }
    }
}

/// Held/not-held state for every action, sampled once per frame by the
/// host. The step function only ever reads this, never mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    held: [bool; 6],
}

impl InputSnapshot {
    pub fn is_active(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn set(&mut self, action: Action, held: bool) {
        self.held[action.index()] = held;
    }

    /// Convenience constructor for tests and scripted sessions.
    pub fn with(actions: &[Action]) -> Self {
        let mut snapshot = Self::default();
        for &action in actions {
            snapshot.set(action, true);
        }
        snapshot
    }
}
