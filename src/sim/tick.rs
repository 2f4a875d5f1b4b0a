//! Frame-stepped simulation clock
//!
//! One `tick` per rendered frame, always in the same order:
//! player physics, obstacles, scroll, difficulty ramp, frame counter.
//! Collision is tested against the floor-clamped player of the same tick,
//! and game over is applied only after the whole tick has run.

use std::sync::Arc;

use super::collectible::CollectibleOutcome;
use super::input::{InputQueue, TickInput};
use super::state::{GameEvent, Phase, Snapshot, World};
use crate::tuning::Tuning;

/// Owns the world and every phase transition
#[derive(Debug)]
pub struct SimulationClock {
    world: World,
    input: Arc<InputQueue>,
    /// Snapshot of the most recent state change
    last: Snapshot,
}

impl SimulationClock {
    pub fn new(world: World) -> Self {
        let last = world.snapshot(Vec::new());
        Self {
            world,
            input: Arc::new(InputQueue::new()),
            last,
        }
    }

    /// Build a fresh world for the given playfield and seed
    pub fn with_tuning(width: f32, height: f32, tuning: Tuning, seed: u64) -> Self {
        Self::new(World::new(width, height, tuning, seed))
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for hosts and tests (bypasses the intent queue)
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn phase(&self) -> Phase {
        self.world.phase
    }

    /// Handle for input sources; safe to move to another thread
    pub fn input(&self) -> Arc<InputQueue> {
        Arc::clone(&self.input)
    }

    /// Latest snapshot (frozen while `Over`)
    pub fn snapshot(&self) -> &Snapshot {
        &self.last
    }

    /// Queue a jump for the next tick
    pub fn request_jump(&self) {
        self.input.request_jump();
    }

    /// Leave the start screen. No-op unless `NotStarted`.
    pub fn start(&mut self) -> bool {
        if self.world.phase != Phase::NotStarted {
            return false;
        }
        self.world.phase = Phase::Running;
        log::info!("Session started (seed {})", self.world.seed);
        self.refresh();
        true
    }

    /// Restart the session and go straight back to `Running`
    pub fn reset(&mut self) {
        let previous = self.world.phase;
        self.world.clear_session();
        self.world.phase = Phase::Running;
        log::info!("Session reset (was {:?})", previous);
        self.refresh();
    }

    /// New playfield size from the host; allowed in any phase
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.resize(width, height);
        log::info!(
            "Resized to {}x{} (floor at {})",
            self.world.playfield.width,
            self.world.playfield.height,
            self.world.floor_y()
        );
        self.refresh();
    }

    /// Apply queued reset/start intents. Jumps outside `Running` are dropped.
    pub fn apply_intents(&mut self) -> TickInput {
        let applied = TickInput {
            reset: self.input.take_reset(),
            start: self.input.take_start(),
            jump: false,
        };
        if applied.reset {
            self.reset();
        }
        if applied.start {
            self.start();
        }
        if self.world.phase != Phase::Running {
            self.input.take_jump();
        }
        applied
    }

    /// One display frame: apply intents, then tick only while `Running`
    pub fn frame(&mut self) -> &Snapshot {
        self.apply_intents();
        if self.world.phase == Phase::Running {
            self.tick();
        }
        &self.last
    }

    /// Advance the simulation by one tick. No-op unless `Running`.
    pub fn tick(&mut self) -> &Snapshot {
        if self.world.phase != Phase::Running {
            return &self.last;
        }

        let mut events = Vec::new();
        let world = &mut self.world;
        let tuning = &world.tuning;
        let floor_y = world.playfield.floor_y();

        // Physics
        if self.input.take_jump() && world.player.jump(tuning.jump_strength) {
            events.push(GameEvent::Jumped);
        }
        world.player.integrate(tuning.gravity, floor_y);
        let player = world.player.aabb();

        // Obstacles
        let obstacles =
            world
                .obstacles
                .tick(&mut world.rng, tuning, &world.playfield, world.speed, &player);
        if let Some(id) = obstacles.spawned {
            log::debug!("Obstacle {} spawned", id);
            events.push(GameEvent::ObstacleSpawned { id });
        }
        for &id in &obstacles.passed {
            world.score += 1;
            log::debug!("Obstacle {} passed, score {}", id, world.score);
            events.push(GameEvent::ObstaclePassed {
                id,
                score: world.score,
            });
        }

        // Scroll
        let outcome = world.collectible.tick(
            &mut world.rng,
            tuning,
            &world.playfield,
            world.score,
            world.speed,
            world.has_collectible,
            &player,
        );
        match outcome {
            CollectibleOutcome::Idle => {}
            CollectibleOutcome::Spawned => {
                log::debug!("Scroll spawned at score {}", world.score);
                events.push(GameEvent::CollectibleSpawned);
            }
            CollectibleOutcome::PickedUp => {
                world.has_collectible = true;
                log::info!("Scroll collected at score {}", world.score);
                events.push(GameEvent::CollectiblePicked);
            }
            CollectibleOutcome::Lost => {
                log::debug!("Scroll lost off screen");
                events.push(GameEvent::CollectibleLost);
            }
        }

        // Difficulty
        let frame = world.frame_count + 1;
        if let Some(speed) = world.ramp.tick(frame, &mut world.speed) {
            log::debug!("Speed up to {:.1} at frame {}", speed, frame);
            events.push(GameEvent::SpeedUp { speed });
        }
        world.frame_count = frame;

        if obstacles.collided() {
            events.push(GameEvent::Collision);
            self.game_over(&mut events);
        }

        self.last = self.world.snapshot(events);
        &self.last
    }

    /// Idempotent transition to `Over`
    fn game_over(&mut self, events: &mut Vec<GameEvent>) {
        if self.world.phase == Phase::Over {
            return;
        }
        self.world.phase = Phase::Over;
        log::info!(
            "Game over: score {}, speed {:.1}, scroll {}",
            self.world.score,
            self.world.speed,
            self.world.has_collectible
        );
        events.push(GameEvent::GameOver {
            score: self.world.score,
            has_collectible: self.world.has_collectible,
        });
    }

    fn refresh(&mut self) {
        self.last = self.world.snapshot(Vec::new());
    }
}
