//! Session state machine: wraps the engine for a host, watching each
//! snapshot's terminal signal and persisting an improved best score.
//! After a terminal fires the session stops stepping until the host
//! starts or resets it.

use gridfire_core::commands::HostCommand;
use gridfire_core::enums::{GameSkin, TerminalSignal};
use gridfire_core::input::InputSnapshot;
use gridfire_core::state::GameSnapshot;
use gridfire_sim::engine::{GameEngine, SimConfig};

use crate::persistence::BestScoreStore;

pub struct Session {
    engine: GameEngine,
    store: BestScoreStore,
    best: u32,
    finished: bool,
    latest: GameSnapshot,
}

impl Session {
    pub fn new(config: SimConfig, store: BestScoreStore) -> Self {
        let best = store.load();
        Self {
            engine: GameEngine::new(config),
            store,
            best,
            finished: false,
            latest: GameSnapshot::default(),
        }
    }

    /// Best score across all sessions, including persisted history.
    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn start(&mut self, skin: GameSkin) {
        self.finished = false;
        self.engine.queue_command(HostCommand::StartGame { skin });
    }

    pub fn pause(&mut self) {
        self.engine.queue_command(HostCommand::Pause);
    }

    pub fn resume(&mut self) {
        self.engine.queue_command(HostCommand::Resume);
    }

    pub fn reset(&mut self) {
        self.finished = false;
        self.engine.queue_command(HostCommand::Reset);
    }

    pub fn return_to_menu(&mut self) {
        self.finished = false;
        self.engine.queue_command(HostCommand::ReturnToMenu);
    }

    /// Advance one frame. Once a terminal signal has been observed
    /// this returns the last snapshot unchanged until the session is
    /// started or reset again.
    pub fn frame(&mut self, input: &InputSnapshot) -> GameSnapshot {
        if self.finished {
            return self.latest.clone();
        }
        let snapshot = self.engine.step(input);
        self.absorb(&snapshot);
        self.latest = snapshot.clone();
        snapshot
    }

    /// Handle the edge-triggered terminal signal: it appears in
    /// exactly one snapshot, so everything here happens once per
    /// session.
    fn absorb(&mut self, snapshot: &GameSnapshot) {
        match snapshot.terminal {
            TerminalSignal::None => {}
            TerminalSignal::GameOver | TerminalSignal::Victory => {
                self.finished = true;
                log::info!(
                    "session over at tick {}: {:?}, score {}",
                    snapshot.time.tick,
                    snapshot.terminal,
                    snapshot.score
                );
                if snapshot.score > self.best {
                    self.best = snapshot.score;
                    match self.store.record(snapshot.score) {
                        Ok(true) => log::info!("new best score {}", snapshot.score),
                        Ok(false) => {}
                        Err(err) => log::error!("best score not saved: {err}"),
                    }
                }
            }
        }
    }
}
