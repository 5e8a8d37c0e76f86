//! Sprite slots. The host decodes images on its own schedule and
//! installs them here; until a slot resolves the renderer paints a
//! solid-color placeholder instead. Pending sprites are a degraded
//! mode, never an error.

use gridfire_core::types::Color;

/// Every sprite the renderer can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKey {
    Player,
    Hostile,
    Projectile,
    PowerUpWeapon,
    PowerUpLife,
    Brick,
    Steel,
    Foliage,
    Base,
    BaseRuined,
}

impl SpriteKey {
    pub const ALL: [SpriteKey; 10] = [
        SpriteKey::Player,
        SpriteKey::Hostile,
        SpriteKey::Projectile,
        SpriteKey::PowerUpWeapon,
        SpriteKey::PowerUpLife,
        SpriteKey::Brick,
        SpriteKey::Steel,
        SpriteKey::Foliage,
        SpriteKey::Base,
        SpriteKey::BaseRuined,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|&k| k == self).unwrap_or(0)
    }

    /// Solid fill used while the slot is still pending.
    pub fn placeholder_color(self) -> Color {
        match self {
            SpriteKey::Player => [0x3c, 0xb0, 0x43],
            SpriteKey::Hostile => [0xc8, 0x40, 0x38],
            SpriteKey::Projectile => [0xf0, 0xe8, 0xc0],
            SpriteKey::PowerUpWeapon => [0xf0, 0xa0, 0x20],
            SpriteKey::PowerUpLife => [0xe8, 0x50, 0x90],
            SpriteKey::Brick => [0x96, 0x4b, 0x28],
            SpriteKey::Steel => [0x9a, 0xa0, 0xa8],
            SpriteKey::Foliage => [0x28, 0x78, 0x30],
            SpriteKey::Base => [0xd0, 0xc0, 0x40],
            SpriteKey::BaseRuined => [0x50, 0x48, 0x38],
        }
    }
}

/// A decoded RGBA sprite.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Sprite {
    /// Build from raw RGBA bytes, validating the byte count.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, String> {
        let expected = (width * height * 4) as usize;
        if rgba.len() != expected {
            return Err(format!(
                "sprite byte count {} does not match {}x{} RGBA ({} expected)",
                rgba.len(),
                width,
                height,
                expected
            ));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }
}

/// Sprite slots, one per key, all pending until installed. An
/// explicit handle the host passes into `render` — no global cache.
#[derive(Debug, Default)]
pub struct Assets {
    slots: [Option<Sprite>; 10],
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&mut self, key: SpriteKey, sprite: Sprite) {
        self.slots[key.index()] = Some(sprite);
    }

    pub fn get(&self, key: SpriteKey) -> Option<&Sprite> {
        self.slots[key.index()].as_ref()
    }

    pub fn all_ready(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }
}
