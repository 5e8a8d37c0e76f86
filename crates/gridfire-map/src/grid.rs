//! TileGrid: the static obstacle map with world-space queries.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use gridfire_core::constants::TILE_SIZE;
use gridfire_core::enums::Tile;
use gridfire_core::state::GridView;
use gridfire_core::types::Aabb;

/// Fixed-size grid of tile codes, row-major with row 0 at the top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGrid {
    cols: usize,
    rows: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// An all-empty grid (used by the space skin, which has no
    /// obstacle map).
    pub fn open(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            tiles: vec![Tile::Empty; cols * rows],
        }
    }

    /// Build a grid from row strings, one char per cell:
    /// `.` empty, `#` brick, `S` steel, `~` foliage, `B` base.
    pub fn from_rows(rows: &[&str]) -> Self {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |r| r.len());
        let mut tiles = Vec::with_capacity(row_count * col_count);
        for row in rows {
            debug_assert_eq!(row.len(), col_count, "ragged layout row");
            for ch in row.chars() {
                tiles.push(match ch {
                    '#' => Tile::Brick,
                    'S' => Tile::Steel,
                    '~' => Tile::Foliage,
                    'B' => Tile::Base,
                    _ => Tile::Empty,
                });
            }
        }
        Self {
            cols: col_count,
            rows: row_count,
            tiles,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Tile {
        if col >= self.cols || row >= self.rows {
            return Tile::Empty;
        }
        self.tiles[row * self.cols + col]
    }

    pub fn set(&mut self, col: usize, row: usize, tile: Tile) {
        if col < self.cols && row < self.rows {
            self.tiles[row * self.cols + col] = tile;
        }
    }

    /// Cell containing a world-space point, or None outside the grid.
    pub fn cell_at(&self, point: Vec2) -> Option<(usize, usize)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / TILE_SIZE) as usize;
        let row = (point.y / TILE_SIZE) as usize;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some((col, row))
    }

    /// World-space center of a cell.
    pub fn cell_center(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            col as f32 * TILE_SIZE + TILE_SIZE / 2.0,
            row as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        )
    }

    /// Whether any movement-blocking tile overlaps the given AABB.
    /// Used by the full-candidate-position rejection policy: movers
    /// test their destination box and revert wholesale on overlap.
    pub fn blocked_rect(&self, aabb: &Aabb) -> bool {
        let min = aabb.min();
        let max = aabb.max();
        let col_lo = (min.x / TILE_SIZE).floor().max(0.0) as usize;
        let row_lo = (min.y / TILE_SIZE).floor().max(0.0) as usize;
        let col_hi = ((max.x / TILE_SIZE).ceil() as usize).min(self.cols);
        let row_hi = ((max.y / TILE_SIZE).ceil() as usize).min(self.rows);

        for row in row_lo..row_hi {
            for col in col_lo..col_hi {
                if !self.get(col, row).blocks_movement() {
                    continue;
                }
                let tile_box = Aabb::new(self.cell_center(col, row), Vec2::splat(TILE_SIZE / 2.0));
                if aabb.intersects(&tile_box) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether any Base tile remains intact.
    pub fn base_intact(&self) -> bool {
        self.tiles.iter().any(|&t| t == Tile::Base)
    }

    /// Snapshot view for the renderer.
    pub fn view(&self) -> GridView {
        GridView {
            cols: self.cols,
            rows: self.rows,
            tiles: self.tiles.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> TileGrid {
        TileGrid::from_rows(&[
            "....", //
            ".#S.", //
            ".~B.", //
            "....",
        ])
    }

    #[test]
    fn test_from_rows_parses_tile_codes() {
        let grid = small_grid();
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.get(1, 1), Tile::Brick);
        assert_eq!(grid.get(2, 1), Tile::Steel);
        assert_eq!(grid.get(1, 2), Tile::Foliage);
        assert_eq!(grid.get(2, 2), Tile::Base);
        assert_eq!(grid.get(0, 0), Tile::Empty);
    }

    #[test]
    fn test_cell_at_maps_world_space() {
        let grid = small_grid();
        assert_eq!(grid.cell_at(Vec2::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(
            grid.cell_at(Vec2::new(TILE_SIZE * 1.5, TILE_SIZE * 1.5)),
            Some((1, 1))
        );
        assert_eq!(grid.cell_at(Vec2::new(-1.0, 0.0)), None);
        assert_eq!(grid.cell_at(Vec2::new(TILE_SIZE * 10.0, 0.0)), None);
    }

    #[test]
    fn test_blocked_rect_hits_brick_not_foliage() {
        let grid = small_grid();
        let on_brick = Aabb::new(grid.cell_center(1, 1), Vec2::splat(8.0));
        assert!(grid.blocked_rect(&on_brick));

        let on_foliage = Aabb::new(grid.cell_center(1, 2), Vec2::splat(8.0));
        assert!(!grid.blocked_rect(&on_foliage));

        let open = Aabb::new(grid.cell_center(0, 0), Vec2::splat(8.0));
        assert!(!grid.blocked_rect(&open));
    }

    #[test]
    fn test_base_intact_flips_after_destruction() {
        let mut grid = small_grid();
        assert!(grid.base_intact());
        grid.set(2, 2, Tile::BaseRuined);
        assert!(!grid.base_intact());
    }

    #[test]
    fn test_open_grid_never_blocks() {
        let grid = TileGrid::open(16, 14);
        let anywhere = Aabb::new(Vec2::new(200.0, 175.0), Vec2::splat(10.0));
        assert!(!grid.blocked_rect(&anywhere));
        assert!(!grid.base_intact());
    }
}
