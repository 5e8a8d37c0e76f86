//! GRIDFIRE simulation engine.
//!
//! `GameEngine` owns the hecs ECS world, processes host commands, runs
//! all systems once per `step`, and produces `GameSnapshot`s.
//! Completely headless (no renderer or host dependency), enabling
//! deterministic testing: the same seed and input sequence always
//! yields the same snapshots.

pub mod engine;
pub mod rules;
pub mod systems;
pub mod world_setup;
