//! Tween-driven surface simulation.
//!
//! Demos and pipeline tests need a stand-in for the platform scroll
//! surface: something that records the engine's scroll commands and can
//! play an animated command back as the stream of intermediate offset
//! samples a real surface would produce while easing toward the target.

use std::cell::{Cell, RefCell};

use super::ScrollSurface;

/// Simulated frame interval in milliseconds (~60fps).
const FRAME_MS: u64 = 16;

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

// =============================================================================
// Tween
// =============================================================================

/// An eased offset animation between two offsets.
///
/// Sampling is pure: the tween holds no clock. Callers advance their own
/// `now_ms` and can retarget mid-flight (a new command interrupting a
/// running animation), which restarts the easing from the current sampled
/// position.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: u64,
    duration_ms: u64,
}

impl Tween {
    /// Animation from `from` to `to` starting at `start_ms`.
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    /// Whether the animation has run its full duration at `now_ms`.
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Offset at `now_ms`, smoothstep-eased, clamped to the end position.
    pub fn sample(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smoothstep(t)
    }

    /// Interrupt toward a new target, keeping the current position.
    pub fn retarget(&mut self, now_ms: u64, new_to: f64, duration_ms: u64) {
        let current = self.sample(now_ms);
        *self = Self::new(current, new_to, now_ms, duration_ms);
    }
}

// =============================================================================
// Sim Surface
// =============================================================================

/// One scroll command issued to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub offset: f64,
    pub animated: bool,
}

/// Recording scroll surface.
///
/// Non-animated commands jump the simulated offset immediately; animated
/// commands are left pending until [`play`](Self::play) turns the latest
/// one into a frame-by-frame sample stream.
#[derive(Debug, Default)]
pub struct SimSurface {
    commands: RefCell<Vec<ScrollCommand>>,
    offset: Cell<f64>,
}

impl SimSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands issued so far, oldest first.
    pub fn commands(&self) -> Vec<ScrollCommand> {
        self.commands.borrow().clone()
    }

    /// The most recent command, if any.
    pub fn last_command(&self) -> Option<ScrollCommand> {
        self.commands.borrow().last().copied()
    }

    /// Current simulated content offset.
    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    /// Play the latest command as an eased ~60fps sample stream.
    ///
    /// Returns the intermediate offsets (ending exactly on the target) and
    /// leaves the simulated offset at the target. Returns an empty stream
    /// when no command is pending.
    pub fn play(&self, duration_ms: u64) -> Vec<f64> {
        let Some(command) = self.last_command() else {
            return Vec::new();
        };

        let tween = Tween::new(self.offset.get(), command.offset, 0, duration_ms);
        let mut samples = Vec::new();
        let mut now_ms = 0;
        while !tween.is_done(now_ms) {
            now_ms += FRAME_MS;
            samples.push(tween.sample(now_ms));
        }
        self.offset.set(command.offset);
        samples
    }
}

impl ScrollSurface for SimSurface {
    fn scroll_to(&self, offset: f64, animated: bool) {
        self.commands.borrow_mut().push(ScrollCommand { offset, animated });
        if !animated {
            self.offset.set(offset);
        }
    }
}
