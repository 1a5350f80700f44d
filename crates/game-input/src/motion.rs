//! Relative mouse motion from absolute pointer positions.
//!
//! The display only reports where the cursor is. To get unbounded motion
//! for mouse look, the pump warps the cursor back to the window center
//! after each frame that moved it, and this tracker measures how far it
//! strayed in between. When the cursor is seen at the exact center again
//! the warp has landed, and everything accumulated since the previous
//! landing is reported as one motion event.

/// Center observations this soon after a reset are dropped while the
/// display's pointer state settles after a grab or warp.
pub const SETTLE_MS: u64 = 50;

/// Result of observing one pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// The cursor left the center; a recentering warp is needed.
    Moved,
    /// Our warp landed. Carries the accumulated delta, or `None` if it
    /// was dropped during the settle interval.
    Recentered(Option<(i32, i32)>),
}

/// Window center for a window of the given size.
#[must_use]
pub fn center_of(width: u32, height: u32) -> (i32, i32) {
    let half = |v: u32| i32::try_from(v / 2).unwrap_or(i32::MAX);
    (half(width), half(height))
}

/// Accumulates pointer offsets between recentering warps.
#[derive(Debug, Clone, Default)]
pub struct MotionTracker {
    /// Last observed position.
    last: (i32, i32),
    /// Delta not yet reported.
    pending: (i32, i32),
    /// When the tracker was last reset.
    reset_at: u64,
    /// Only accept a center observation as a warp landing while one of
    /// our warps is in flight.
    strict: bool,
    warp_in_flight: bool,
}

impl MotionTracker {
    #[must_use]
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            ..Self::default()
        }
    }

    /// Forget all motion and restart the settle interval at `now`.
    pub fn reset(&mut self, center: (i32, i32), now: u64) {
        self.last = center;
        self.pending = (0, 0);
        self.reset_at = now;
        self.warp_in_flight = false;
    }

    /// Record that a recentering warp was sent.
    pub fn warp_issued(&mut self) {
        self.warp_in_flight = true;
    }

    /// Delta accumulated since the last landing.
    #[must_use]
    pub fn pending(&self) -> (i32, i32) {
        self.pending
    }

    #[must_use]
    pub fn last_position(&self) -> (i32, i32) {
        self.last
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Observe the cursor at `(x, y)` at `time`.
    pub fn observe(&mut self, x: i32, y: i32, time: u64, center: (i32, i32)) -> Motion {
        let landed = (x, y) == center && (!self.strict || self.warp_in_flight);
        if landed {
            let delta = self.pending;
            self.last = center;
            self.pending = (0, 0);
            self.warp_in_flight = false;

            if time.saturating_sub(self.reset_at) > SETTLE_MS {
                return Motion::Recentered(Some(delta));
            }
            tracing::trace!(dx = delta.0, dy = delta.1, "Dropping motion while settling");
            return Motion::Recentered(None);
        }

        self.pending.0 = self.pending.0.saturating_add(scale(x.saturating_sub(self.last.0)));
        self.pending.1 = self.pending.1.saturating_add(scale(y.saturating_sub(self.last.1)));
        self.last = (x, y);
        Motion::Moved
    }
}

/// Double steps over one pixel to undo the acceleration already applied
/// upstream. Single-pixel steps pass through so slow aiming stays exact.
/// Saturates rather than wrapping on absurd coordinates.
fn scale(step: i32) -> i32 {
    if step.unsigned_abs() > 1 {
        step.saturating_mul(2)
    } else {
        step
    }
}
