//! Tests for core geometry, tiles, and input sampling.

use glam::Vec2;

use crate::constants::*;
use crate::enums::{Facing, Tile};
use crate::input::{Action, InputSnapshot};
use crate::types::{Aabb, TickTime};

// ---- Aabb ----

#[test]
fn test_aabb_overlap_and_separation() {
    let a = Aabb::new(Vec2::new(100.0, 100.0), Vec2::splat(10.0));
    let b = Aabb::new(Vec2::new(115.0, 100.0), Vec2::splat(10.0));
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));

    let c = Aabb::new(Vec2::new(130.0, 100.0), Vec2::splat(10.0));
    assert!(!a.intersects(&c));
}

#[test]
fn test_aabb_touching_edges_do_not_intersect() {
    // Exactly-touching boxes are not overlapping: separation uses a
    // strict comparison so adjacent tanks can sit flush.
    let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
    let b = Aabb::new(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
    assert!(!a.intersects(&b));
}

#[test]
fn test_aabb_play_bounds() {
    let inside = Aabb::new(Vec2::new(200.0, 175.0), Vec2::splat(10.0));
    assert!(inside.inside_play_bounds());

    let poking_out = Aabb::new(Vec2::new(PLAY_WIDTH - 5.0, 175.0), Vec2::splat(10.0));
    assert!(!poking_out.inside_play_bounds());
}

// ---- Facing ----

#[test]
fn test_facing_deltas_are_unit_axes() {
    for facing in Facing::ALL {
        let d = facing.delta();
        assert_eq!(d.length(), 1.0);
        assert!(d.x == 0.0 || d.y == 0.0);
    }
    // Top-left origin: Up is negative y.
    assert_eq!(Facing::Up.delta(), Vec2::new(0.0, -1.0));
    assert_eq!(Facing::Down.delta(), Vec2::new(0.0, 1.0));
}

// ---- Tiles ----

#[test]
fn test_tile_blocking_rules() {
    assert!(Tile::Brick.blocks_movement());
    assert!(Tile::Steel.blocks_movement());
    assert!(Tile::Base.blocks_movement());
    assert!(!Tile::Empty.blocks_movement());
    // Foliage is decorative: entities drive under it freely.
    assert!(!Tile::Foliage.blocks_movement());
    assert!(!Tile::Foliage.blocks_projectiles());
    // A ruined base blocks movement but no longer stops shots.
    assert!(Tile::BaseRuined.blocks_movement());
    assert!(!Tile::BaseRuined.blocks_projectiles());
}

// ---- Input ----

#[test]
fn test_input_snapshot_default_is_idle() {
    let snapshot = InputSnapshot::default();
    for action in Action::ALL {
        assert!(!snapshot.is_active(action));
    }
}

#[test]
fn test_input_snapshot_set_and_query() {
    let mut snapshot = InputSnapshot::default();
    snapshot.set(Action::Fire, true);
    snapshot.set(Action::MoveLeft, true);
    assert!(snapshot.is_active(Action::Fire));
    assert!(snapshot.is_active(Action::MoveLeft));
    assert!(!snapshot.is_active(Action::MoveRight));

    snapshot.set(Action::Fire, false);
    assert!(!snapshot.is_active(Action::Fire));
}

// ---- Time ----

#[test]
fn test_tick_time_advance() {
    let mut time = TickTime::default();
    for _ in 0..TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
}

#[test]
fn test_grid_covers_play_area() {
    assert_eq!(GRID_COLS, 16);
    assert_eq!(GRID_ROWS, 14);
    assert_eq!(GRID_COLS as f32 * TILE_SIZE, PLAY_WIDTH);
    assert_eq!(GRID_ROWS as f32 * TILE_SIZE, PLAY_HEIGHT);
}
