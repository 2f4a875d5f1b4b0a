//! Hen Dash - A side-scrolling jump-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, obstacles, collectible, difficulty)
//! - `renderer`: Renderer interface plus log and canvas backends
//! - `platform`: Frame driver and input routing
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use platform::{FrameDriver, InputEvent};
pub use renderer::Renderer;
pub use sim::{Phase, SimulationClock, Snapshot, World};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// Balance values live in [`Tuning`]; these are the fixed facts of the playfield.
pub mod consts {
    /// Playfield size used before the host reports a real one
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Frames the autopilot looks ahead when deciding to jump
    pub const AUTOPILOT_LEAD_FRAMES: f32 = 6.0;
}

/// Replace NaN/infinite/negative dimensions with zero
#[inline]
pub fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
