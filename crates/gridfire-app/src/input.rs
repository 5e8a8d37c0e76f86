//! Input sampling. The host feeds raw key transitions as they arrive;
//! the game loop takes one [`InputSnapshot`] copy per tick. Held state
//! only — a press and release landing between two ticks is invisible,
//! which at 30Hz has never been observable in play.

use std::collections::HashMap;

use gridfire_core::input::{Action, InputSnapshot};

/// Maps raw key codes to actions and tracks held state between ticks.
#[derive(Debug)]
pub struct InputSampler {
    bindings: HashMap<&'static str, Action>,
    held: InputSnapshot,
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}

impl InputSampler {
    /// Arrows + WASD for movement, Space/J to fire, Escape/P to pause.
    pub fn with_default_bindings() -> Self {
        let bindings = HashMap::from([
            ("ArrowUp", Action::MoveUp),
            ("KeyW", Action::MoveUp),
            ("ArrowDown", Action::MoveDown),
            ("KeyS", Action::MoveDown),
            ("ArrowLeft", Action::MoveLeft),
            ("KeyA", Action::MoveLeft),
            ("ArrowRight", Action::MoveRight),
            ("KeyD", Action::MoveRight),
            ("Space", Action::Fire),
            ("KeyJ", Action::Fire),
            ("Escape", Action::Pause),
            ("KeyP", Action::Pause),
        ]);
        Self {
            bindings,
            held: InputSnapshot::default(),
        }
    }

    /// Unknown key codes are ignored.
    pub fn key_down(&mut self, code: &str) {
        if let Some(&action) = self.bindings.get(code) {
            self.held.set(action, true);
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(&action) = self.bindings.get(code) {
            self.held.set(action, false);
        }
    }

    /// All keys released, e.g. on window focus loss.
    pub fn release_all(&mut self) {
        self.held = InputSnapshot::default();
    }

    /// Copy of the current-instant held state.
    pub fn snapshot(&self) -> InputSnapshot {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_transitions_update_held_state() {
        let mut sampler = InputSampler::default();
        sampler.key_down("ArrowUp");
        sampler.key_down("Space");
        assert!(sampler.snapshot().is_active(Action::MoveUp));
        assert!(sampler.snapshot().is_active(Action::Fire));

        sampler.key_up("ArrowUp");
        assert!(!sampler.snapshot().is_active(Action::MoveUp));
        assert!(sampler.snapshot().is_active(Action::Fire));
    }

    #[test]
    fn test_alternate_bindings_share_an_action() {
        let mut sampler = InputSampler::default();
        sampler.key_down("KeyW");
        assert!(sampler.snapshot().is_active(Action::MoveUp));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut sampler = InputSampler::default();
        sampler.key_down("KeyQ");
        assert_eq!(sampler.snapshot(), InputSnapshot::default());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut sampler = InputSampler::default();
        sampler.key_down("Space");
        let snap = sampler.snapshot();
        sampler.key_up("Space");
        assert!(snap.is_active(Action::Fire), "snapshots are decoupled");
    }

    #[test]
    fn test_release_all_clears_everything() {
        let mut sampler = InputSampler::default();
        sampler.key_down("KeyA");
        sampler.key_down("Space");
        sampler.release_all();
        assert_eq!(sampler.snapshot(), InputSnapshot::default());
    }
}
