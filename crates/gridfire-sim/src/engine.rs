//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs world and all session state, processes
//! host commands at tick boundaries, runs the systems in a fixed
//! order, and evaluates the terminal condition edge-triggered: the
//! transitioning tick's snapshot carries `GameOver` or `Victory`
//! exactly once, after which the phase latches.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridfire_core::commands::HostCommand;
use gridfire_core::components::{Health, HostileTag, PlayerTag};
use gridfire_core::enums::{GamePhase, GameSkin, MovementStyle, TerminalSignal};
use gridfire_core::events::GameEvent;
use gridfire_core::input::InputSnapshot;
use gridfire_core::state::GameSnapshot;
use gridfire_core::types::TickTime;
use gridfire_map::TileGrid;

use crate::rules::SkinRules;
use crate::systems;
use crate::systems::spawner::SpawnerState;
use crate::world_setup;

/// Configuration for a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
    /// Skin selected when the host starts a game without choosing.
    pub skin: GameSkin,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            skin: GameSkin::TankAssault,
        }
    }
}

/// Session score bookkeeping. `score` only ever increases.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub score: u32,
    /// Hostiles left to defeat: unspawned plus live.
    pub hostiles_remaining: u32,
    pub hostiles_downed: u32,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    grid: TileGrid,
    player_spawn: Vec2,
    hostile_spawns: Vec<Vec2>,
    time: TickTime,
    phase: GamePhase,
    rules: SkinRules,
    rng: ChaCha8Rng,
    command_queue: VecDeque<HostCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    score: ScoreState,
    spawner: SpawnerState,
}

impl GameEngine {
    /// Create an engine sitting at the menu.
    pub fn new(config: SimConfig) -> Self {
        let rules = SkinRules::for_skin(config.skin);
        let layout = world_setup::layout_for(config.skin);
        Self {
            world: World::new(),
            grid: layout.grid,
            player_spawn: layout.player_spawn,
            hostile_spawns: layout.hostile_spawns,
            time: TickTime::default(),
            phase: GamePhase::default(),
            rules,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
            spawner: SpawnerState::new(0),
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. While paused or at the menu this is a snapshot-only
    /// no-op: no entity state changes and time does not advance.
    pub fn step(&mut self, input: &InputSnapshot) -> GameSnapshot {
        self.process_commands();

        let mut terminal = TerminalSignal::None;
        if self.phase == GamePhase::Playing {
            self.run_systems(input);
            self.time.advance();
            terminal = self.evaluate_terminal();
        }

        let events = std::mem::take(&mut self.events);
        let grid = (self.rules.movement == MovementStyle::GridBound).then_some(&self.grid);
        systems::snapshot::build_snapshot(
            &self.world,
            grid,
            self.time,
            self.phase,
            self.rules.skin,
            &self.score,
            terminal,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> TickTime {
        self.time
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut TileGrid {
        &mut self.grid
    }

    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    #[cfg(test)]
    pub fn score_mut(&mut self) -> &mut ScoreState {
        &mut self.score
    }

    #[cfg(test)]
    pub fn spawner_mut(&mut self) -> &mut SpawnerState {
        &mut self.spawner
    }

    #[cfg(test)]
    pub fn player_spawn(&self) -> Vec2 {
        self.player_spawn
    }

    #[cfg(test)]
    pub fn hostile_spawns(&self) -> &[Vec2] {
        &self.hostile_spawns
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::StartGame { skin } => {
                if matches!(
                    self.phase,
                    GamePhase::Menu | GamePhase::GameOver | GamePhase::Victory
                ) {
                    self.start_session(skin);
                }
            }
            HostCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            HostCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            HostCommand::Reset => {
                if self.phase != GamePhase::Menu {
                    self.start_session(self.rules.skin);
                }
            }
            HostCommand::ReturnToMenu => {
                self.world.clear();
                self.phase = GamePhase::Menu;
            }
        }
    }

    /// Tear down any previous session and start fresh.
    fn start_session(&mut self, skin: GameSkin) {
        self.rules = SkinRules::for_skin(skin);
        let layout = world_setup::layout_for(skin);
        self.grid = layout.grid;
        self.player_spawn = layout.player_spawn;
        self.hostile_spawns = layout.hostile_spawns;

        self.world.clear();
        self.despawn_buffer.clear();
        self.events.clear();
        world_setup::spawn_player(&mut self.world, &self.rules, self.player_spawn);

        self.score = ScoreState {
            score: 0,
            hostiles_remaining: self.rules.total_hostiles,
            hostiles_downed: 0,
        };
        self.spawner = SpawnerState::new(self.rules.total_hostiles);
        self.time = TickTime::default();
        self.phase = GamePhase::Playing;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputSnapshot) {
        // 1. Player movement and fire.
        systems::player::run(
            &mut self.world,
            &self.grid,
            &self.rules,
            input,
            &mut self.events,
        );
        // 2. Hostile decisions, movement, breaches.
        systems::hostile_ai::run(
            &mut self.world,
            &self.grid,
            &self.rules,
            &mut self.rng,
            &mut self.events,
            &mut self.despawn_buffer,
            &mut self.score,
        );
        // 3. Spawn director.
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.rules,
            &mut self.spawner,
            self.score.score,
            &self.hostile_spawns,
        );
        // 4. Projectile flight and hit resolution.
        systems::projectiles::run(
            &mut self.world,
            &mut self.grid,
            &self.rules,
            &mut self.rng,
            &mut self.events,
            &mut self.despawn_buffer,
            &mut self.score,
            self.player_spawn,
        );
        // 5. Particle decay.
        systems::particles::run(&mut self.world, &self.rules, &mut self.despawn_buffer);
        // 6. Pickups.
        systems::power_ups::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        // 7. Drain removals.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Evaluate the terminal condition for this tick and latch the
    /// phase on a transition.
    fn evaluate_terminal(&mut self) -> TerminalSignal {
        let base_gone =
            self.rules.movement == MovementStyle::GridBound && !self.grid.base_intact();
        let player_down = self
            .world
            .query_mut::<(&PlayerTag, &Health)>()
            .into_iter()
            .next()
            .map_or(true, |(_, (_tag, health))| health.lives == 0);

        if base_gone || player_down {
            self.phase = GamePhase::GameOver;
            return TerminalSignal::GameOver;
        }

        let live_hostiles = self.world.query_mut::<&HostileTag>().into_iter().count();
        if self.score.hostiles_remaining == 0 && live_hostiles == 0 {
            self.phase = GamePhase::Victory;
            return TerminalSignal::Victory;
        }

        TerminalSignal::None
    }
}
