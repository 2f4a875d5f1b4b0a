//! Platform abstraction layer
//!
//! Handles host-facing glue shared by the browser and native builds:
//! - Mapping raw input (key/touch/mouse/buttons) to queued intents
//! - Driving one simulation frame per display refresh
//! - Handing snapshots to the renderer

use crate::renderer::Renderer;
use crate::sim::{InputQueue, Phase, SimulationClock, Snapshot, autopilot};

/// Host input, already stripped of device details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Space, tap or click on the playfield
    Press,
    /// Click on the start screen
    StartScreen,
    /// Restart button
    Restart,
    /// Toggle idle/demo mode
    ToggleAutopilot,
}

/// Turn a host event into an intent for the next frame
///
/// The first press on the start screen only starts the game. Presses after
/// game over are ignored; leaving `Over` takes the restart button.
pub fn route_input(event: InputEvent, phase: Phase, queue: &InputQueue) {
    match (event, phase) {
        (InputEvent::Press, Phase::NotStarted) | (InputEvent::StartScreen, _) => {
            queue.request_start()
        }
        (InputEvent::Press, Phase::Running) => queue.request_jump(),
        (InputEvent::Press, Phase::Over) => {}
        (InputEvent::Restart, _) => queue.request_reset(),
        (InputEvent::ToggleAutopilot, _) => {}
    }
}

/// Runs the simulation one display frame at a time
pub struct FrameDriver<R: Renderer> {
    clock: SimulationClock,
    renderer: R,
    /// Idle/demo mode - the autopilot presses jump
    pub autopilot: bool,
}

impl<R: Renderer> FrameDriver<R> {
    pub fn new(clock: SimulationClock, renderer: R) -> Self {
        Self {
            clock,
            renderer,
            autopilot: false,
        }
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.clock.snapshot()
    }

    /// Route a host event through the intent queue
    pub fn handle_input(&mut self, event: InputEvent) {
        if event == InputEvent::ToggleAutopilot {
            self.autopilot = !self.autopilot;
            log::info!("Idle mode: {}", self.autopilot);
            return;
        }
        let input = self.clock.input();
        route_input(event, self.clock.phase(), &input);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.clock.resize(width, height);
    }

    /// Advance one display frame and render it
    ///
    /// While `Over` nothing ticks; the frozen snapshot is rendered again.
    pub fn frame(&mut self) -> Phase {
        if self.autopilot && autopilot::wants_jump(self.clock.world()) {
            self.clock.request_jump();
        }
        let snapshot = self.clock.frame();
        self.renderer.render(snapshot);
        snapshot.phase
    }
}
