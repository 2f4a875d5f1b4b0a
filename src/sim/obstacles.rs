//! Obstacle field: spawn timing, scrolling, collision, pruning
//!
//! Obstacles all move at the shared scroll speed, so spawn order is also
//! left-to-right screen order. Nothing here re-sorts the list.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::state::Playfield;
use crate::tuning::Tuning;

/// A crate sitting on the floor line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub aabb: Aabb,
}

/// What happened to the field during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObstacleOutcome {
    /// ID of the obstacle spawned this tick
    pub spawned: Option<u32>,
    /// Number of obstacles overlapping the player after the move
    pub overlaps: u32,
    /// IDs pruned off the left edge (one point each)
    pub passed: Vec<u32>,
}

impl ObstacleOutcome {
    pub fn collided(&self) -> bool {
        self.overlaps > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Frames until the next spawn (fractional, counts down by one per tick)
    pub spawn_timer: f32,
    next_id: u32,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            next_id: 1,
        }
    }

    /// Remove every obstacle and spawn on the next tick
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
    }

    /// Push an obstacle at an explicit position
    pub fn spawn_at(&mut self, pos: Vec2, size: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            aabb: Aabb::new(pos, Vec2::splat(size)),
        });
        id
    }

    /// Advance the field by one frame
    pub fn tick<R: Rng>(
        &mut self,
        rng: &mut R,
        tuning: &Tuning,
        field: &Playfield,
        speed: f32,
        player: &Aabb,
    ) -> ObstacleOutcome {
        let mut outcome = ObstacleOutcome::default();

        self.spawn_timer -= 1.0;
        if self.spawn_timer <= 0.0 {
            let size = tuning.obstacle_size;
            let pos = Vec2::new(field.width, field.floor_y() - size);
            outcome.spawned = Some(self.spawn_at(pos, size));
            self.spawn_timer = tuning.spawn_gap_min + rng.random::<f32>() * tuning.spawn_gap_jitter;
        }

        for obstacle in &mut self.obstacles {
            obstacle.aabb.pos.x -= speed;
            if player.overlaps(&obstacle.aabb) {
                outcome.overlaps += 1;
            }
        }

        self.obstacles.retain(|o| {
            if o.aabb.is_off_left() {
                outcome.passed.push(o.id);
                false
            } else {
                true
            }
        });

        outcome
    }

    /// Re-seat every obstacle on a new floor line
    pub fn snap_to_floor(&mut self, floor_y: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.aabb.snap_to_floor(floor_y);
        }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn playfield() -> Playfield {
        Playfield::new(800.0, 600.0, &Tuning::default())
    }

    /// Player parked well above the lane so nothing collides
    fn sky_player() -> Aabb {
        Aabb::new(Vec2::new(380.0, -1000.0), Vec2::splat(40.0))
    }

    /// Field whose timer never fires during a test
    fn quiet_field() -> ObstacleField {
        let mut field = ObstacleField::new();
        field.spawn_timer = f32::MAX;
        field
    }

    #[test]
    fn test_first_tick_spawns() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = Tuning::default();
        let pf = playfield();
        let mut field = ObstacleField::new();

        let out = field.tick(&mut rng, &tuning, &pf, 4.0, &sky_player());
        assert!(out.spawned.is_some());
        assert_eq!(field.len(), 1);

        // Spawned at the right edge, then moved in the same tick
        let obs = &field.obstacles[0];
        assert_eq!(obs.aabb.pos.x, 796.0);
        assert_eq!(obs.aabb.pos.y, 510.0);
        assert!(field.spawn_timer >= 60.0 && field.spawn_timer <= 150.0);
    }

    #[test]
    fn test_spawn_gap_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let tuning = Tuning::default();
        let pf = playfield();
        let mut field = ObstacleField::new();

        let mut last_spawn = None;
        for frame in 0..5000u32 {
            let out = field.tick(&mut rng, &tuning, &pf, 4.0, &sky_player());
            if out.spawned.is_some() {
                if let Some(prev) = last_spawn {
                    let gap = frame - prev;
                    assert!((60..=151).contains(&gap), "gap {gap} out of range");
                }
                last_spawn = Some(frame);
            }
        }
    }

    #[test]
    fn test_prune_scores_exactly_once() {
        let mut rng = Pcg32::seed_from_u64(3);
        let tuning = Tuning::default();
        let pf = playfield();
        let mut field = quiet_field();
        field.spawn_at(Vec2::new(800.0, 510.0), 40.0);

        let mut passed = 0;
        for tick in 1..=210 {
            passed += field
                .tick(&mut rng, &tuning, &pf, 4.0, &sky_player())
                .passed
                .len();
            if tick == 200 {
                assert_eq!(field.obstacles[0].aabb.pos.x, 0.0);
            }
        }
        // x = -40 exactly: right edge touches 0, still alive
        assert_eq!(passed, 0);
        assert_eq!(field.len(), 1);

        let out = field.tick(&mut rng, &tuning, &pf, 4.0, &sky_player());
        assert_eq!(out.passed.len(), 1);
        assert!(field.is_empty());

        let out = field.tick(&mut rng, &tuning, &pf, 4.0, &sky_player());
        assert!(out.passed.is_empty());
    }

    #[test]
    fn test_collision_counts_every_overlap() {
        let mut rng = Pcg32::seed_from_u64(3);
        let tuning = Tuning::default();
        let pf = playfield();
        let mut field = quiet_field();
        field.spawn_at(Vec2::new(384.0, 510.0), 40.0);
        field.spawn_at(Vec2::new(404.0, 510.0), 40.0);

        let player = Aabb::new(Vec2::new(380.0, 510.0), Vec2::splat(40.0));
        let out = field.tick(&mut rng, &tuning, &pf, 4.0, &player);
        assert!(out.collided());
        assert_eq!(out.overlaps, 2);
        // Collision never removes or scores
        assert_eq!(field.len(), 2);
        assert!(out.passed.is_empty());
    }

    #[test]
    fn test_jumping_player_clears_obstacle() {
        let mut rng = Pcg32::seed_from_u64(3);
        let tuning = Tuning::default();
        let pf = playfield();
        let mut field = quiet_field();
        field.spawn_at(Vec2::new(430.0, 510.0), 40.0);

        // Bottom edge exactly on the obstacle's top edge
        let player = Aabb::new(Vec2::new(380.0, 470.0), Vec2::splat(40.0));
        for _ in 0..30 {
            let out = field.tick(&mut rng, &tuning, &pf, 4.0, &player);
            assert!(!out.collided());
        }
    }

    #[test]
    fn test_snap_to_floor() {
        let mut field = quiet_field();
        field.spawn_at(Vec2::new(100.0, 510.0), 40.0);
        field.snap_to_floor(400.0);
        assert_eq!(field.obstacles[0].aabb.pos.y, 360.0);
    }
}
