//! Tile grid and built-in level layouts for the GRIDFIRE simulation.
//!
//! The grid is the static obstacle map of the tank skin: a fixed-size
//! array of tile codes mutated in place when breakable tiles are shot.
//! It is the sole shared mutable resource between the projectile
//! system (writes) and movement/render (reads).

pub mod grid;
pub mod layouts;

pub use grid::TileGrid;
