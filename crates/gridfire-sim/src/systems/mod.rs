//! Simulation systems, run once per tick in a fixed order so results
//! are reproducible for a fixed input sequence.

pub mod cleanup;
pub mod hostile_ai;
pub mod particles;
pub mod player;
pub mod power_ups;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
