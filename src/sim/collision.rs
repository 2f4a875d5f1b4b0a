//! Axis-aligned bounding boxes
//!
//! Everything in the playfield is a rectangle, so one strict overlap test
//! covers player/obstacle and player/collectible contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangle with its top-left corner at `pos` (screen coords, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap: boxes that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// True once the right edge has scrolled past the left screen edge
    #[inline]
    pub fn is_off_left(&self) -> bool {
        self.right() < 0.0
    }

    /// Rest the box on a floor line
    #[inline]
    pub fn snap_to_floor(&mut self, floor_y: f32) {
        self.pos.y = floor_y - self.size.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, s: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::splat(s))
    }

    #[test]
    fn test_overlap_detected() {
        let a = square(0.0, 0.0, 40.0);
        let b = square(30.0, 30.0, 40.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = square(0.0, 0.0, 40.0);
        // Shares the vertical edge x = 40
        assert!(!a.overlaps(&square(40.0, 0.0, 40.0)));
        // Shares the horizontal edge y = 40
        assert!(!a.overlaps(&square(0.0, 40.0, 40.0)));
    }

    #[test]
    fn test_vertical_clearance() {
        // Player directly above an obstacle, one pixel clear
        let player = square(100.0, 469.0, 40.0);
        let obstacle = square(100.0, 510.0, 40.0);
        assert!(!player.overlaps(&obstacle));

        let player = square(100.0, 471.0, 40.0);
        assert!(player.overlaps(&obstacle));
    }

    #[test]
    fn test_off_left() {
        assert!(!square(-40.0, 0.0, 40.0).is_off_left());
        assert!(square(-40.5, 0.0, 40.0).is_off_left());
    }

    #[test]
    fn test_snap_to_floor() {
        let mut b = square(0.0, 0.0, 30.0);
        b.snap_to_floor(550.0);
        assert_eq!(b.pos.y, 520.0);
        assert_eq!(b.bottom(), 550.0);
    }
}
