//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - One tick per rendered frame (no delta-time scaling)
//! - Seeded RNG owned by the world
//! - Stable iteration order (spawn order)
//! - Input only through the intent queue

pub mod autopilot;
pub mod collectible;
pub mod collision;
pub mod input;
pub mod obstacles;
pub mod physics;
pub mod ramp;
pub mod state;
pub mod tick;

pub use collectible::{CollectibleOutcome, CollectibleSpawner};
pub use collision::Aabb;
pub use input::{InputQueue, TickInput};
pub use obstacles::{Obstacle, ObstacleField, ObstacleOutcome};
pub use physics::Player;
pub use ramp::DifficultyRamp;
pub use state::{EndScreen, GameEvent, Phase, Playfield, Snapshot, World};
pub use tick::SimulationClock;
