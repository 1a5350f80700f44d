//! Per-frame input pump.
//!
//! [`InputContext`] owns all input state: the grab, the motion tracker
//! and the window origin. The frame driver keeps one and calls
//! [`InputContext::pump_frame`] once per frame with the display, the
//! clock, the current client state and the engine event queue.

use serde::Serialize;

use crate::client::ClientState;
use crate::config::InputConfig;
use crate::event::{EventSink, InputEvent, RawEvent};
use crate::grab::{should_capture, CaptureState, Grab};
use crate::keymap::{translate_press, translate_release};
use crate::keys::KeyCode;
use crate::motion::{center_of, Motion, MotionTracker};
use crate::platform::{Clock, Platform};

/// What happened during one [`InputContext::pump_frame`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameSummary {
    /// Platform events drained.
    pub drained: usize,
    /// Engine events pushed.
    pub pushed: usize,
    /// New capture state, if it changed this frame.
    pub capture: Option<CaptureState>,
    /// Whether the pointer was warped back to the center.
    pub warped: bool,
}

/// Input subsystem state.
#[derive(Debug, Clone)]
pub struct InputContext {
    config: InputConfig,
    grab: Grab,
    tracker: MotionTracker,
    window_origin: (i32, i32),
    motion_active: bool,
}

impl InputContext {
    /// Create an uninitialized context. Nothing is captured until
    /// [`Self::initialize`].
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        let tracker = MotionTracker::new(config.strict_recenter);
        Self {
            config,
            grab: Grab::new(),
            tracker,
            window_origin: (0, 0),
            motion_active: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Switch between fullscreen and windowed. Takes effect on the next
    /// frame.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.config.fullscreen = fullscreen;
    }

    #[must_use]
    pub fn capture_state(&self) -> CaptureState {
        self.grab.state()
    }

    /// Window origin from the last create or configure notification.
    #[must_use]
    pub fn window_origin(&self) -> (i32, i32) {
        self.window_origin
    }

    /// Whether the last frame reported relative mouse motion.
    #[must_use]
    pub fn motion_active(&self) -> bool {
        self.motion_active
    }

    /// Apply `config` and grab the mouse if it is enabled.
    pub fn initialize<P: Platform, C: Clock>(
        &mut self,
        platform: &mut P,
        clock: &C,
        config: InputConfig,
    ) {
        tracing::debug!(?config, "Input initialization");
        self.tracker.set_strict(config.strict_recenter);
        self.config = config;

        if self.config.mouse {
            self.grab.set_available(true);
            self.activate(platform, clock);
        } else {
            self.deactivate(platform);
            self.grab.set_available(false);
        }
    }

    /// Release any grab and disable the mouse.
    pub fn shutdown<P: Platform>(&mut self, platform: &mut P) {
        self.deactivate(platform);
        self.grab.set_available(false);
        self.motion_active = false;
        tracing::debug!("Input shut down");
    }

    /// Re-read configuration, as after a settings change.
    pub fn reinitialize<P: Platform, C: Clock>(
        &mut self,
        platform: &mut P,
        clock: &C,
        config: InputConfig,
    ) {
        self.initialize(platform, clock, config);
    }

    /// Install the grab. Returns `true` if the state changed.
    pub fn activate<P: Platform, C: Clock>(&mut self, platform: &mut P, clock: &C) -> bool {
        self.grab.activate(
            platform,
            &mut self.tracker,
            clock.milliseconds(),
            self.config.nograb,
        )
    }

    /// Release the grab. Returns `true` if the state changed.
    pub fn deactivate<P: Platform>(&mut self, platform: &mut P) -> bool {
        self.grab.deactivate(platform)
    }

    /// Run one frame: update the grab for `client`, drain all pending
    /// platform events into `sink`, then recenter the pointer once if it
    /// moved.
    pub fn pump_frame<P, C, S>(
        &mut self,
        platform: &mut P,
        clock: &C,
        client: &ClientState,
        sink: &mut S,
    ) -> FrameSummary
    where
        P: Platform,
        C: Clock,
        S: EventSink,
    {
        let mut summary = FrameSummary::default();

        let changed = if should_capture(self.config.fullscreen, client.catchers, client.connection) {
            self.activate(platform, clock)
        } else {
            self.deactivate(platform)
        };
        if changed {
            summary.capture = Some(self.grab.state());
        }

        self.motion_active = false;
        if !platform.has_window() {
            return summary;
        }

        let mut counting = CountingSink { inner: sink, pushed: 0 };
        let mut needs_warp = false;
        let center = {
            let (width, height) = platform.window_size();
            center_of(width, height)
        };

        while let Some(event) = platform.poll_event() {
            summary.drained += 1;
            needs_warp |= self.dispatch(event, center, &mut counting);
        }
        summary.pushed = counting.pushed;

        if needs_warp {
            if let Err(e) = platform.warp_pointer(center.0, center.1) {
                tracing::warn!("Failed to recenter pointer: {e}");
            } else {
                self.tracker.warp_issued();
                summary.warped = true;
            }
        }

        summary
    }

    /// Handle one platform event. Returns `true` if the pointer needs
    /// recentering.
    fn dispatch<S: EventSink>(&mut self, event: RawEvent, center: (i32, i32), sink: &mut S) -> bool {
        match event {
            RawEvent::KeyPress { keysym, lookup, time } => {
                let Some(t) = translate_press(keysym, &lookup, self.config.verbose) else {
                    return false;
                };
                if let Some(key) = t.key {
                    sink.push(InputEvent::Key { key, down: true, time });
                }
                for ch in t.text.chars() {
                    sink.push(InputEvent::Char { ch, time });
                }
            }
            RawEvent::KeyRelease { keysym, lookup, time } => {
                if let Some(key) = translate_release(keysym, &lookup, self.config.verbose) {
                    sink.push(InputEvent::Key { key, down: false, time });
                }
            }
            RawEvent::PointerMotion { x, y, time } => {
                match self.tracker.observe(x, y, time, center) {
                    Motion::Moved => return true,
                    Motion::Recentered(Some((dx, dy))) => {
                        tracing::trace!(dx, dy, "Mouse motion");
                        self.motion_active |= dx != 0 || dy != 0;
                        sink.push(InputEvent::MouseMove { dx, dy, time });
                    }
                    Motion::Recentered(None) => {}
                }
            }
            RawEvent::ButtonPress { button, time } => push_button(sink, button, true, time),
            RawEvent::ButtonRelease { button, time } => push_button(sink, button, false, time),
            RawEvent::WindowGeometry { x, y } => {
                tracing::trace!(x, y, "Window origin");
                self.window_origin = (x, y);
            }
        }
        false
    }
}

/// Map a platform button to an engine event.
///
/// Buttons 4 and 5 are the wheel and become key events. The rest are
/// numbered from [`KeyCode::MOUSE1`]; middle and right are swapped
/// relative to the platform's order.
#[must_use]
pub fn button_event(button: u8, down: bool, time: u64) -> Option<InputEvent> {
    let index = match button {
        4 => return Some(InputEvent::Key { key: KeyCode::MWHEELUP, down, time }),
        5 => return Some(InputEvent::Key { key: KeyCode::MWHEELDOWN, down, time }),
        1 => 0,
        2 => 2,
        3 => 1,
        6 => 3,
        7 => 4,
        _ => return None,
    };
    Some(InputEvent::MouseButton { button: index, down, time })
}

fn push_button<S: EventSink>(sink: &mut S, button: u8, down: bool, time: u64) {
    match button_event(button, down, time) {
        Some(event) => sink.push(event),
        None => tracing::debug!(button, "Unmapped mouse button"),
    }
}

/// Counts pushes on the way through to the real sink.
struct CountingSink<'a, S> {
    inner: &'a mut S,
    pushed: usize,
}

impl<S: EventSink> EventSink for CountingSink<'_, S> {
    fn push(&mut self, event: InputEvent) {
        self.pushed += 1;
        self.inner.push(event);
    }
}
