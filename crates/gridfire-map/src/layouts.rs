//! Built-in level layouts and spawn geometry for the two skins.

use glam::Vec2;

use gridfire_core::constants::{GRID_COLS, GRID_ROWS, TILE_SIZE};

use crate::grid::TileGrid;

/// A level: the obstacle map plus the fixed spawn geometry.
#[derive(Debug, Clone)]
pub struct Layout {
    pub grid: TileGrid,
    pub player_spawn: Vec2,
    /// Fixed set of hostile entry points, used round-robin.
    pub hostile_spawns: Vec<Vec2>,
}

/// The tank-assault level: brick lanes, steel anchors, foliage cover,
/// and the defended base walled in at the bottom center. Hostiles
/// enter along the top row.
pub fn tank_assault() -> Layout {
    let grid = TileGrid::from_rows(&[
        "................",
        ".....#....#.....",
        ".##..#.##.#..##.",
        ".##..#.##.#..##.",
        ".....S....S.....",
        "..#..........#..",
        "..#.~~####~~.#..",
        "....~~....~~....",
        ".S...######...S.",
        ".....#....#.....",
        ".##..#.##.#..##.",
        ".##..........##.",
        "......###.......",
        "......#B#.......",
    ]);

    let player_spawn = grid.cell_center(4, GRID_ROWS - 1);
    let hostile_spawns = vec![
        grid.cell_center(0, 0),
        grid.cell_center(GRID_COLS / 2 - 1, 0),
        grid.cell_center(GRID_COLS - 1, 0),
    ];

    Layout {
        grid,
        player_spawn,
        hostile_spawns,
    }
}

/// The space-defense field: no obstacles, ships enter along the top
/// edge and the player starts centered near the bottom bound.
pub fn star_defense() -> Layout {
    let grid = TileGrid::open(GRID_COLS, GRID_ROWS);

    let player_spawn = Vec2::new(
        GRID_COLS as f32 * TILE_SIZE / 2.0,
        (GRID_ROWS as f32 - 1.0) * TILE_SIZE,
    );
    let hostile_spawns = (0..5)
        .map(|i| {
            Vec2::new(
                (i as f32 + 1.0) * GRID_COLS as f32 * TILE_SIZE / 6.0,
                TILE_SIZE / 2.0,
            )
        })
        .collect();

    Layout {
        grid,
        player_spawn,
        hostile_spawns,
    }
}
