//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Facing, OwnerTag, PowerUpKind};
use crate::types::{Aabb, Color};

/// World position. Newtype so Position and Velocity are distinct
/// component types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity in units/sec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Collision body: half extents of the entity's AABB.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub half: Vec2,
}

impl Body {
    pub fn square(half: f32) -> Self {
        Self {
            half: Vec2::splat(half),
        }
    }

    pub fn aabb(&self, position: &Position) -> Aabb {
        Aabb::new(position.0, self.half)
    }
}

/// Marks the player entity. Exactly one exists while lives > 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerTag;

/// Marks a hostile tank/ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HostileTag;

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: OwnerTag,
}

/// Cosmetic explosion debris; never participates in collision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// Remaining life in ticks; dropped at zero.
    pub life: u32,
    pub color: Color,
}

/// A pickup waiting on the field (tank skin only).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

/// Lives (tank skin) or health (space skin).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub lives: u32,
}

/// Fire control state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    /// Ticks until the next shot is allowed.
    pub cooldown: u32,
    /// Power tier; higher tiers reload faster.
    pub tier: u8,
}

/// Movement state for tanks and ships.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mover {
    pub facing: Facing,
    /// Speed in units/sec.
    pub speed: f32,
}

/// Countdown driving a hostile's random direction/fire decisions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BehaviorTimer {
    pub ticks_left: u32,
}
