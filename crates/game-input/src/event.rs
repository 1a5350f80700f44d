//! Platform events in, engine events out.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::keys::KeyCode;
use crate::keysym::Keysym;

/// An event delivered by the windowing system.
///
/// Timestamps are engine milliseconds; the platform converts from its own
/// clock before handing events over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawEvent {
    KeyPress {
        keysym: Keysym,
        /// Locale-aware string lookup result for the press.
        #[serde(default)]
        lookup: String,
        time: u64,
    },
    KeyRelease {
        keysym: Keysym,
        #[serde(default)]
        lookup: String,
        time: u64,
    },
    /// Absolute pointer position in window coordinates.
    PointerMotion { x: i32, y: i32, time: u64 },
    ButtonPress { button: u8, time: u64 },
    ButtonRelease { button: u8, time: u64 },
    /// Window created at, or moved to, the given origin.
    WindowGeometry { x: i32, y: i32 },
}

/// A normalized engine input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Key { key: KeyCode, down: bool, time: u64 },
    Char { ch: char, time: u64 },
    MouseMove { dx: i32, dy: i32, time: u64 },
    /// Mouse button, numbered from 0 relative to [`KeyCode::MOUSE1`].
    MouseButton { button: u8, down: bool, time: u64 },
}

impl InputEvent {
    #[must_use]
    pub fn time(&self) -> u64 {
        match *self {
            Self::Key { time, .. }
            | Self::Char { time, .. }
            | Self::MouseMove { time, .. }
            | Self::MouseButton { time, .. } => time,
        }
    }

    /// The binding key for key and mouse button events.
    #[must_use]
    pub fn key(&self) -> Option<KeyCode> {
        match *self {
            Self::Key { key, .. } => Some(key),
            Self::MouseButton { button, .. } => KeyCode::mouse(button),
            Self::Char { .. } | Self::MouseMove { .. } => None,
        }
    }
}

/// Destination for normalized events. Implementations must keep push
/// order.
pub trait EventSink {
    fn push(&mut self, event: InputEvent);
}

impl EventSink for Vec<InputEvent> {
    fn push(&mut self, event: InputEvent) {
        Vec::push(self, event);
    }
}

impl EventSink for VecDeque<InputEvent> {
    fn push(&mut self, event: InputEvent) {
        self.push_back(event);
    }
}
