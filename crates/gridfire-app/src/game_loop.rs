//! Game loop thread — drives a [`Session`] at the fixed tick rate.
//!
//! The session lives inside the thread; commands and input state
//! arrive over an `mpsc` channel and the latest snapshot is published
//! through a shared slot the host polls when it wants to draw.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use gridfire_core::constants::TICK_RATE;
use gridfire_core::enums::GameSkin;
use gridfire_core::input::InputSnapshot;
use gridfire_core::state::GameSnapshot;
use gridfire_sim::engine::SimConfig;

use crate::persistence::BestScoreStore;
use crate::session::Session;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    Start(GameSkin),
    Pause,
    Resume,
    Reset,
    ReturnToMenu,
    /// Replace the held input state used for subsequent ticks.
    Input(InputSnapshot),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Spawn the game loop in a new thread.
///
/// Returns the command sender plus the join handle for shutdown.
pub fn spawn_game_loop(
    config: SimConfig,
    store: BestScoreStore,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>), String> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("gridfire-game-loop".into())
        .spawn(move || {
            run_game_loop(config, store, cmd_rx, &latest_snapshot);
        })
        .map_err(|e| format!("Failed to spawn game loop thread: {e}"))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    store: BestScoreStore,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut session = Session::new(config, store);
    let mut input = InputSnapshot::default();
    let mut next_tick_time = Instant::now();

    log::info!("game loop running at {TICK_RATE}Hz");
    loop {
        // 1. Drain all pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Start(skin)) => session.start(skin),
                Ok(LoopCommand::Pause) => session.pause(),
                Ok(LoopCommand::Resume) => session.resume(),
                Ok(LoopCommand::Reset) => session.reset(),
                Ok(LoopCommand::ReturnToMenu) => session.return_to_menu(),
                Ok(LoopCommand::Input(held)) => input = held,
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame (the session handles pause and
        //    terminal latching internally).
        let snapshot = session.frame(&input);

        // 3. Publish for host polling.
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick boundary.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::test_dir;
    use gridfire_core::enums::GamePhase;
    use gridfire_core::input::Action;
    use std::fs;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Start(GameSkin::TankAssault)).unwrap();
        tx.send(LoopCommand::Input(InputSnapshot::with(&[Action::Fire])))
            .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Start(GameSkin::TankAssault)
        ));
        assert!(matches!(commands[1], LoopCommand::Input(_)));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let dir = test_dir("game_loop");
        let _ = fs::remove_dir_all(&dir);
        let latest = Arc::new(Mutex::new(None));

        let (tx, handle) = spawn_game_loop(
            SimConfig::default(),
            BestScoreStore::new(dir),
            Arc::clone(&latest),
        )
        .unwrap();

        tx.send(LoopCommand::Start(GameSkin::TankAssault)).unwrap();
        // Give the loop a few ticks to publish.
        std::thread::sleep(TICK_DURATION * 6);

        let snapshot = latest.lock().unwrap().clone();
        let snapshot = snapshot.expect("loop should have published a snapshot");
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert!(snapshot.time.tick > 0);

        tx.send(LoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_tick_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
