//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGB color used for particles and placeholder rendering.
pub type Color = [u8; 3];

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl TickTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f32 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Axis-aligned bounding box, the sole hit-detection primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    /// Half extents along each axis.
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Axis-aligned rectangle intersection test.
    pub fn intersects(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() < self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() < self.half.y + other.half.y
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() <= self.half.x
            && (point.y - self.center.y).abs() <= self.half.y
    }

    /// Whether this box lies entirely inside the play bounds.
    pub fn inside_play_bounds(&self) -> bool {
        let min = self.min();
        let max = self.max();
        min.x >= 0.0
            && min.y >= 0.0
            && max.x <= crate::constants::PLAY_WIDTH
            && max.y <= crate::constants::PLAY_HEIGHT
    }
}

/// Whether a point lies inside the 400x350 play bounds.
pub fn point_in_play_bounds(point: Vec2) -> bool {
    point.x >= 0.0
        && point.y >= 0.0
        && point.x <= crate::constants::PLAY_WIDTH
        && point.y <= crate::constants::PLAY_HEIGHT
}
