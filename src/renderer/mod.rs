//! Rendering module
//!
//! The simulation hands an immutable [`Snapshot`] to a [`Renderer`] once per
//! display frame. Renderers never feed back into game state.
//!
//! Backends:
//! - `LogRenderer`: headless, writes HUD lines through `log`
//! - `canvas::CanvasRenderer` (wasm32): Canvas 2D drawing

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::{EndScreen, Phase, Snapshot};

/// Presentation sink for simulation snapshots
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

/// HUD score label
pub fn hud_score(score: u32) -> String {
    format!("Score: {}", score)
}

/// HUD speed label (one decimal)
pub fn hud_speed(speed: f32) -> String {
    format!("Speed: {:.1}", speed)
}

/// Headless renderer that logs a HUD line every `interval` frames
#[derive(Debug)]
pub struct LogRenderer {
    interval: u64,
    frames: u64,
    last_phase: Phase,
}

impl LogRenderer {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            last_phase: Phase::NotStarted,
        }
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(60)
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frames += 1;

        if snapshot.phase != self.last_phase {
            if let Some(screen) = snapshot.end_screen() {
                match screen {
                    EndScreen::Scroll => log::info!(
                        "[end] {} - scroll collected",
                        hud_score(snapshot.score)
                    ),
                    EndScreen::Hint => log::info!(
                        "[end] {} - scroll missed",
                        hud_score(snapshot.score)
                    ),
                }
            }
            self.last_phase = snapshot.phase;
        }

        if snapshot.phase == Phase::Running && self.frames % self.interval == 0 {
            log::debug!(
                "[hud] {} | {} | obstacles {} | scroll {}",
                hud_score(snapshot.score),
                hud_speed(snapshot.speed),
                snapshot.obstacles.len(),
                if snapshot.has_collectible { "yes" } else { "no" }
            );
        }
    }
}
