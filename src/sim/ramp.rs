//! Difficulty ramp: scroll speed grows on a fixed frame cadence
//!
//! Growth is unbounded; long runs simply get faster until the player misses.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyRamp {
    /// Frames between speed-ups
    pub interval: u64,
    /// Speed added at each step
    pub increment: f32,
}

impl DifficultyRamp {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            interval: tuning.ramp_interval,
            increment: tuning.ramp_increment,
        }
    }

    /// Apply the ramp for the frame that is completing.
    /// Returns the new speed when a step happened.
    pub fn tick(&self, frame: u64, speed: &mut f32) -> Option<f32> {
        if self.interval == 0 || frame == 0 || frame % self.interval != 0 {
            return None;
        }
        *speed += self.increment;
        Some(*speed)
    }
}
