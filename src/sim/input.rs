//! Queued player intents
//!
//! Input callbacks never touch the world directly. They raise flags here and
//! the next frame drains them. The flags are atomics so an input thread can
//! share the queue with the frame loop through an `Arc`.

use std::sync::atomic::{AtomicBool, Ordering};

/// Intents consumed by a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Leave the start screen
    pub start: bool,
    /// Jump (dropped unless running and grounded)
    pub jump: bool,
    /// Restart the session
    pub reset: bool,
}

impl TickInput {
    pub fn is_empty(&self) -> bool {
        !(self.start || self.jump || self.reset)
    }
}

/// Single-writer/single-reader intent flags
#[derive(Debug, Default)]
pub struct InputQueue {
    start: AtomicBool,
    jump: AtomicBool,
    reset: AtomicBool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_start(&self) {
        self.start.store(true, Ordering::Release);
    }

    pub fn request_jump(&self) {
        self.jump.store(true, Ordering::Release);
    }

    pub fn request_reset(&self) {
        self.reset.store(true, Ordering::Release);
    }

    pub fn take_start(&self) -> bool {
        self.start.swap(false, Ordering::AcqRel)
    }

    pub fn take_jump(&self) -> bool {
        self.jump.swap(false, Ordering::AcqRel)
    }

    pub fn take_reset(&self) -> bool {
        self.reset.swap(false, Ordering::AcqRel)
    }

    /// Take every pending intent, clearing the flags
    pub fn drain(&self) -> TickInput {
        TickInput {
            start: self.take_start(),
            jump: self.take_jump(),
            reset: self.take_reset(),
        }
    }
}
