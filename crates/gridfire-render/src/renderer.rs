//! Snapshot drawing with a fixed back-to-front order: terrain,
//! pickups, tanks and ships, projectiles, particles, then foliage
//! overlay and HUD on top.

use glam::Vec2;

use gridfire_core::constants::{POWER_UP_HALF, PROJECTILE_HALF, TANK_HALF, TILE_SIZE};
use gridfire_core::enums::{GameSkin, PowerUpKind, Tile};
use gridfire_core::state::{GameSnapshot, GridView};
use gridfire_core::types::Color;

use crate::assets::{Assets, SpriteKey};
use crate::frame::Frame;
use crate::hud;

const TANK_BACKGROUND: Color = [0x14, 0x12, 0x0c];
const SPACE_BACKGROUND: Color = [0x08, 0x0a, 0x18];
const HUD_COLOR: Color = [0xf0, 0xf0, 0xe0];

fn tile_sprite(tile: Tile) -> Option<SpriteKey> {
    match tile {
        Tile::Empty => None,
        Tile::Brick => Some(SpriteKey::Brick),
        Tile::Steel => Some(SpriteKey::Steel),
        Tile::Foliage => Some(SpriteKey::Foliage),
        Tile::Base => Some(SpriteKey::Base),
        Tile::BaseRuined => Some(SpriteKey::BaseRuined),
    }
}

/// Draw a sprite centered at a world position, or a solid placeholder
/// rect of the entity's extent while the slot is pending.
fn draw_entity(frame: &mut Frame, assets: &Assets, key: SpriteKey, center: Vec2, half: f32) {
    match assets.get(key) {
        Some(sprite) => {
            let x = center.x as i32 - (sprite.width / 2) as i32;
            let y = center.y as i32 - (sprite.height / 2) as i32;
            frame.blit(x, y, sprite.width, sprite.height, &sprite.rgba);
        }
        None => {
            let size = (half * 2.0) as u32;
            frame.fill_rect(
                (center.x - half) as i32,
                (center.y - half) as i32,
                size,
                size,
                key.placeholder_color(),
            );
        }
    }
}

fn draw_tile(frame: &mut Frame, assets: &Assets, key: SpriteKey, col: usize, row: usize) {
    let center = Vec2::new(
        (col as f32 + 0.5) * TILE_SIZE,
        (row as f32 + 0.5) * TILE_SIZE,
    );
    draw_entity(frame, assets, key, center, TILE_SIZE / 2.0);
}

fn draw_terrain(frame: &mut Frame, assets: &Assets, grid: &GridView, overlay: bool) {
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let tile = grid.tiles[row * grid.cols + col];
            if (tile == Tile::Foliage) != overlay {
                continue;
            }
            if let Some(key) = tile_sprite(tile) {
                draw_tile(frame, assets, key, col, row);
            }
        }
    }
}

/// Draw one snapshot into the frame. Strictly read-only over the
/// snapshot; the frame is cleared first.
pub fn render(snapshot: &GameSnapshot, assets: &Assets, frame: &mut Frame) {
    let background = match snapshot.skin {
        GameSkin::TankAssault => TANK_BACKGROUND,
        GameSkin::StarDefense => SPACE_BACKGROUND,
    };
    frame.clear(background);

    if let Some(grid) = &snapshot.grid {
        draw_terrain(frame, assets, grid, false);
    }

    for pickup in &snapshot.power_ups {
        let key = match pickup.kind {
            PowerUpKind::WeaponUpgrade => SpriteKey::PowerUpWeapon,
            PowerUpKind::ExtraLife => SpriteKey::PowerUpLife,
        };
        draw_entity(frame, assets, key, pickup.position, POWER_UP_HALF);
    }

    if let Some(player) = &snapshot.player {
        draw_entity(frame, assets, SpriteKey::Player, player.position, TANK_HALF);
    }
    for hostile in &snapshot.hostiles {
        draw_entity(frame, assets, SpriteKey::Hostile, hostile.position, TANK_HALF);
    }

    for shot in &snapshot.projectiles {
        draw_entity(
            frame,
            assets,
            SpriteKey::Projectile,
            shot.position,
            PROJECTILE_HALF,
        );
    }

    for particle in &snapshot.particles {
        frame.fill_rect(
            particle.position.x as i32,
            particle.position.y as i32,
            2,
            2,
            particle.color,
        );
    }

    // Foliage occludes everything below it.
    if let Some(grid) = &snapshot.grid {
        draw_terrain(frame, assets, grid, true);
    }

    hud::draw_number(frame, 4, 4, 2, snapshot.score, HUD_COLOR);
    hud::draw_life_pips(frame, 4, 18, snapshot.lives, HUD_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfire_core::constants::{PLAY_HEIGHT, PLAY_WIDTH};
    use gridfire_core::enums::Facing;
    use gridfire_core::state::PlayerView;
    use crate::assets::Sprite;

    fn frame() -> Frame {
        Frame::new(PLAY_WIDTH as u32, PLAY_HEIGHT as u32)
    }

    fn snapshot_with_player(at: Vec2) -> GameSnapshot {
        GameSnapshot {
            player: Some(PlayerView {
                position: at,
                facing: Facing::Up,
                lives: 3,
                weapon_tier: 0,
            }),
            lives: 3,
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn test_placeholder_drawn_while_assets_pending() {
        let mut out = frame();
        let at = Vec2::new(200.0, 200.0);
        render(&snapshot_with_player(at), &Assets::new(), &mut out);
        assert_eq!(
            out.pixel(200, 200),
            [0x3c, 0xb0, 0x43, 0xff],
            "pending player slot falls back to the placeholder fill"
        );
    }

    #[test]
    fn test_installed_sprite_replaces_placeholder() {
        let mut out = frame();
        let mut assets = Assets::new();
        let sprite = Sprite::from_rgba(4, 4, vec![0xff; 64]).unwrap();
        assets.install(SpriteKey::Player, sprite);
        let at = Vec2::new(200.0, 200.0);
        render(&snapshot_with_player(at), &assets, &mut out);
        assert_eq!(out.pixel(200, 200), [0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_foliage_occludes_entities() {
        let mut out = frame();
        // Player parked inside a foliage cell.
        let mut snapshot = snapshot_with_player(Vec2::new(TILE_SIZE * 0.5, TILE_SIZE * 0.5));
        snapshot.grid = Some(GridView {
            cols: 1,
            rows: 1,
            tiles: vec![Tile::Foliage],
        });
        render(&snapshot, &Assets::new(), &mut out);
        assert_eq!(
            out.pixel(12, 12)[..3],
            SpriteKey::Foliage.placeholder_color(),
            "foliage overlay draws above the player"
        );
    }

    #[test]
    fn test_entity_at_bounds_edge_renders_clipped() {
        let mut out = frame();
        render(&snapshot_with_player(Vec2::new(0.0, 0.0)), &Assets::new(), &mut out);
        // Top-left quarter of the placeholder lands in-frame.
        assert_eq!(out.pixel(2, 2)[..3], [0x3c, 0xb0, 0x43]);
    }
}
