//! Windowing input for the game client.
//!
//! Turns raw display events into the engine's timestamped input events
//! and derives unbounded relative mouse motion from an absolute cursor by
//! warping it back to the window center every frame.
//!
//! - [`keymap`]: platform keysym to engine key translation
//! - [`motion`]: relative motion from absolute pointer positions
//! - [`grab`]: keyboard/pointer grab lifecycle and capture policy
//! - [`pump`]: per-frame event pump and the [`InputContext`] that owns
//!   all input state
//! - [`platform`]: the display calls the input layer relies on
//! - [`sim`]: in-memory display for tests and trace replay

pub mod client;
pub mod config;
pub mod event;
pub mod grab;
pub mod keymap;
pub mod keys;
pub mod keysym;
pub mod motion;
pub mod platform;
pub mod pump;
pub mod sim;

pub use client::{ClientState, ConnectionState, KeyCatchers};
pub use config::InputConfig;
pub use event::{EventSink, InputEvent, RawEvent};
pub use grab::{should_capture, CaptureState};
pub use keymap::{translate_press, translate_release, Translation};
pub use keys::KeyCode;
pub use keysym::Keysym;
pub use platform::{Clock, MonotonicClock, Platform, PlatformError, PointerControl};
pub use pump::{FrameSummary, InputContext};
