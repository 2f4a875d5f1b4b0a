//! Player body: gravity integration, floor clamp, single jump
//!
//! Gravity and jump strength are per-frame quantities. There is no delta-time
//! scaling; one tick is one rendered frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// The hen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = falling)
    pub vel_y: f32,
    /// Resting on the floor line
    pub grounded: bool,
}

impl Player {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(size),
            vel_y: 0.0,
            grounded: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Advance one frame under gravity and clamp to the floor
    pub fn integrate(&mut self, gravity: f32, floor_y: f32) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;

        if self.pos.y + self.size.y > floor_y {
            self.pos.y = floor_y - self.size.y;
            self.vel_y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }

    /// Jump if grounded. Returns whether the jump happened.
    ///
    /// Airborne presses are dropped, not buffered.
    pub fn jump(&mut self, strength: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.vel_y = -strength;
        self.grounded = false;
        true
    }

    /// Stand still on the floor line
    pub fn place_on_floor(&mut self, floor_y: f32) {
        self.pos.y = floor_y - self.size.y;
        self.vel_y = 0.0;
        self.grounded = true;
    }

    /// Center horizontally in a playfield of the given width
    pub fn center_x(&mut self, width: f32) {
        self.pos.x = width / 2.0 - self.size.x / 2.0;
    }
}
