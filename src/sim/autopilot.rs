//! Idle/demo mode: decide when the hen should jump
//!
//! Looks at the nearest obstacle still ahead of the player and jumps once it
//! is a few frames away at the current speed. A jump clears a 40px crate from
//! roughly the fourth airborne frame to the thirty-fifth, so a short fixed
//! lead works at every speed the ramp reaches.

use super::state::{Phase, World};
use crate::consts::AUTOPILOT_LEAD_FRAMES;

/// Whether a jump should be requested for the next tick
pub fn wants_jump(world: &World) -> bool {
    if world.phase != Phase::Running || !world.player.grounded {
        return false;
    }

    let player_right = world.player.aabb().right();
    let nearest_gap = world
        .obstacles
        .iter()
        .map(|o| o.aabb.pos.x - player_right)
        .filter(|gap| *gap >= 0.0)
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    match nearest_gap {
        Some(gap) => gap <= world.speed * AUTOPILOT_LEAD_FRAMES,
        None => false,
    }
}
