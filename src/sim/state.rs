//! World state and core simulation types
//!
//! `World` is the single owner of the session: playfield, player, obstacles,
//! scroll, and the shared scalars (score, speed, frame count). Only the
//! simulation clock mutates it during play.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collectible::CollectibleSpawner;
use super::collision::Aabb;
use super::obstacles::ObstacleField;
use super::physics::Player;
use super::ramp::DifficultyRamp;
use crate::sanitize_extent;
use crate::tuning::Tuning;

/// Coarse session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Start screen showing, nothing moves
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Player hit an obstacle; frozen until reset
    Over,
}

/// Things that happened during a tick (for HUD, logging, sound hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    ObstacleSpawned { id: u32 },
    ObstaclePassed { id: u32, score: u32 },
    CollectibleSpawned,
    CollectiblePicked,
    CollectibleLost,
    SpeedUp { speed: f32 },
    Collision,
    GameOver { score: u32, has_collectible: bool },
}

/// Which overlay the game-over screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndScreen {
    /// Scroll was collected this session
    Scroll,
    /// Scroll was missed; nudge the player to find it
    Hint,
}

/// Playfield bounds and the floor line derived from them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// Height of the ground strip below the floor line
    pub ground_height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32, tuning: &Tuning) -> Self {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        // Portrait screens get a taller ground so the action sits mid-screen
        let ground_height = if height > width {
            height / tuning.portrait_ground_divisor.max(1.0)
        } else {
            tuning.landscape_ground_height
        };
        Self {
            width,
            height,
            ground_height,
        }
    }

    /// Y coordinate of the floor line (never negative)
    #[inline]
    pub fn floor_y(&self) -> f32 {
        (self.height - self.ground_height).max(0.0)
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

/// Immutable view handed to the renderer each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub playfield: Playfield,
    pub floor_y: f32,
    pub player: Aabb,
    pub obstacles: Vec<Aabb>,
    pub collectible: Option<Aabb>,
    pub score: u32,
    pub speed: f32,
    pub phase: Phase,
    pub has_collectible: bool,
    pub frame_count: u64,
    /// Events raised by the tick that produced this snapshot
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn end_screen(&self) -> Option<EndScreen> {
        match self.phase {
            Phase::Over if self.has_collectible => Some(EndScreen::Scroll),
            Phase::Over => Some(EndScreen::Hint),
            _ => None,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct World {
    /// Balance table this session was built from
    pub tuning: Tuning,
    pub playfield: Playfield,
    /// Ticks since the last reset
    pub frame_count: u64,
    /// Obstacles passed
    pub score: u32,
    /// Current scroll speed (pixels per tick)
    pub speed: f32,
    pub phase: Phase,
    /// Scroll collected this session
    pub has_collectible: bool,
    pub player: Player,
    pub obstacles: ObstacleField,
    pub collectible: CollectibleSpawner,
    pub ramp: DifficultyRamp,
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a world for a playfield of the given size
    pub fn new(width: f32, height: f32, tuning: Tuning, seed: u64) -> Self {
        let playfield = Playfield::new(width, height, &tuning);
        let mut player = Player::new(tuning.player_size);
        player.center_x(playfield.width);
        player.place_on_floor(playfield.floor_y());

        Self {
            playfield,
            frame_count: 0,
            score: 0,
            speed: tuning.initial_speed,
            phase: Phase::NotStarted,
            has_collectible: false,
            player,
            obstacles: ObstacleField::new(),
            collectible: CollectibleSpawner::new(),
            ramp: DifficultyRamp::from_tuning(&tuning),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.playfield.floor_y()
    }

    /// Recompute the floor for a new playfield size and re-seat everything on it
    ///
    /// Safe in any phase.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.playfield = Playfield::new(width, height, &self.tuning);
        let floor_y = self.playfield.floor_y();

        self.player.center_x(self.playfield.width);
        self.player.place_on_floor(floor_y);
        self.obstacles.snap_to_floor(floor_y);
        self.collectible.snap_to_floor(floor_y);
    }

    /// Clear the session back to its starting values (phase is left to the caller)
    pub(crate) fn clear_session(&mut self) {
        self.obstacles.clear();
        self.collectible.clear();
        self.has_collectible = false;
        self.frame_count = 0;
        self.score = 0;
        self.speed = self.tuning.initial_speed;
        self.player.place_on_floor(self.playfield.floor_y());
    }

    pub fn snapshot(&self, events: Vec<GameEvent>) -> Snapshot {
        Snapshot {
            playfield: self.playfield,
            floor_y: self.floor_y(),
            player: self.player.aabb(),
            obstacles: self.obstacles.iter().map(|o| o.aabb).collect(),
            collectible: self.collectible.active,
            score: self.score,
            speed: self.speed,
            phase: self.phase,
            has_collectible: self.has_collectible,
            frame_count: self.frame_count,
            events,
        }
    }
}
