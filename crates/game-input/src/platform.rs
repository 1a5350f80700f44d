//! Windowing system seam.
//!
//! [`Platform`] is the narrow set of display calls the input layer needs:
//! drain pending events, grab and release keyboard and pointer, hide the
//! cursor, read and write pointer acceleration, and warp the pointer.
//! The display connection itself is owned elsewhere; a platform without
//! a window reports [`Platform::has_window`] as `false` and the input
//! layer leaves it alone.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::event::RawEvent;

/// Pointer acceleration settings.
///
/// Motion past `threshold` pixels per event is multiplied by
/// `accel_numerator / accel_denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerControl {
    pub accel_numerator: i32,
    pub accel_denominator: i32,
    pub threshold: i32,
}

impl PointerControl {
    /// 1:1 motion with no threshold.
    pub const NEUTRAL: Self = Self {
        accel_numerator: 1,
        accel_denominator: 1,
        threshold: 0,
    };
}

/// Display calls used by the input layer.
///
/// Every call is non-blocking. Failures are reported but the input layer
/// treats them as warnings; capture is a convenience, not a requirement.
pub trait Platform {
    /// Whether a display connection and window exist.
    fn has_window(&self) -> bool;

    /// Window size in pixels.
    fn window_size(&self) -> (u32, u32);

    /// Next already-pending event, or `None` when the queue is empty.
    fn poll_event(&mut self) -> Option<RawEvent>;

    /// Replace the window cursor with an invisible one.
    fn hide_cursor(&mut self) -> Result<(), PlatformError>;

    /// Restore the default window cursor.
    fn show_cursor(&mut self) -> Result<(), PlatformError>;

    /// Exclusively capture the pointer, confined to the window.
    fn grab_pointer(&mut self) -> Result<(), PlatformError>;

    fn ungrab_pointer(&mut self) -> Result<(), PlatformError>;

    /// Exclusively capture the keyboard.
    fn grab_keyboard(&mut self) -> Result<(), PlatformError>;

    fn ungrab_keyboard(&mut self) -> Result<(), PlatformError>;

    /// Current pointer acceleration settings.
    fn pointer_control(&self) -> Result<PointerControl, PlatformError>;

    fn set_pointer_control(&mut self, control: PointerControl) -> Result<(), PlatformError>;

    /// Move the pointer to window coordinates `(x, y)`.
    fn warp_pointer(&mut self, x: i32, y: i32) -> Result<(), PlatformError>;

    /// Ask the compositor to stop redirecting the window. Only some
    /// compositors honour this; the default does nothing.
    fn bypass_compositor(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }

    /// Flush outstanding requests and wait for them to be processed.
    fn sync(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }
}

/// Monotonic millisecond clock shared with event timestamps.
pub trait Clock {
    fn milliseconds(&self) -> u64;
}

/// [`Clock`] counting from its own creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[allow(clippy::cast_possible_truncation)]
    fn milliseconds(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Errors from display calls.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// No display connection or window.
    #[error("no display or window")]
    NoDisplay,

    /// Pointer or keyboard grab refused.
    #[error("grab failed: {0}")]
    Grab(String),

    /// Cursor could not be created or changed.
    #[error("cursor change failed: {0}")]
    Cursor(String),

    /// Pointer acceleration could not be read or written.
    #[error("pointer control failed: {0}")]
    PointerControl(String),

    /// Pointer warp failed.
    #[error("pointer warp failed: {0}")]
    Warp(String),
}
