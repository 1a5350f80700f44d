//! In-memory display for tests and trace replay.
//!
//! [`SimPlatform`] keeps just enough display state to stand in for a real
//! window: a pending event queue, grab and cursor flags, pointer
//! acceleration and the pointer position. Warping the pointer queues the
//! motion event a real display would send back, so the recentering loop
//! can be exercised end to end.

use std::cell::Cell;
use std::collections::VecDeque;

use crate::event::RawEvent;
use crate::platform::{Clock, Platform, PlatformError, PointerControl};

/// A display call that changes state, in the order it was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Sync,
    BypassCompositor,
    HideCursor,
    ShowCursor,
    GrabPointer,
    UngrabPointer,
    GrabKeyboard,
    UngrabKeyboard,
    SetPointerControl(PointerControl),
    WarpPointer(i32, i32),
}

/// Scripted display.
#[derive(Debug, Clone)]
pub struct SimPlatform {
    window: Option<(u32, u32)>,
    events: VecDeque<RawEvent>,
    calls: Vec<Call>,
    pointer: (i32, i32),
    control: PointerControl,
    pointer_grabbed: bool,
    keyboard_grabbed: bool,
    cursor_visible: bool,
    control_unreadable: bool,
    grabs_denied: bool,
    /// Timestamp given to events the display generates itself.
    now: u64,
}

impl SimPlatform {
    /// A display with a `width` x `height` window.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window: Some((width, height)),
            events: VecDeque::new(),
            calls: Vec::new(),
            pointer: (0, 0),
            control: PointerControl {
                accel_numerator: 2,
                accel_denominator: 1,
                threshold: 4,
            },
            pointer_grabbed: false,
            keyboard_grabbed: false,
            cursor_visible: true,
            control_unreadable: false,
            grabs_denied: false,
            now: 0,
        }
    }

    /// A display with no window yet.
    #[must_use]
    pub fn headless() -> Self {
        Self {
            window: None,
            ..Self::new(0, 0)
        }
    }

    #[must_use]
    pub fn with_pointer_control(mut self, control: PointerControl) -> Self {
        self.control = control;
        self
    }

    /// Queue an event as if the display had delivered it.
    pub fn push_event(&mut self, event: RawEvent) {
        if let RawEvent::PointerMotion { x, y, .. } = event {
            self.pointer = (x, y);
        }
        self.events.push_back(event);
    }

    /// Move the pointer and queue the motion event.
    pub fn move_pointer(&mut self, x: i32, y: i32, time: u64) {
        self.push_event(RawEvent::PointerMotion { x, y, time });
    }

    /// Set the timestamp used for display-generated events.
    pub fn set_time(&mut self, now: u64) {
        self.now = now;
    }

    /// Create or destroy the window.
    pub fn set_window(&mut self, size: Option<(u32, u32)>) {
        self.window = size;
    }

    /// Make [`Platform::pointer_control`] fail.
    pub fn fail_pointer_control(&mut self) {
        self.control_unreadable = true;
    }

    /// Make pointer and keyboard grabs fail.
    pub fn deny_grabs(&mut self) {
        self.grabs_denied = true;
    }

    #[must_use]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Return and clear the call log.
    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    /// Number of pointer warps made so far.
    #[must_use]
    pub fn warp_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::WarpPointer(..)))
            .count()
    }

    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn pointer_position(&self) -> (i32, i32) {
        self.pointer
    }

    #[must_use]
    pub fn pointer_grabbed(&self) -> bool {
        self.pointer_grabbed
    }

    #[must_use]
    pub fn keyboard_grabbed(&self) -> bool {
        self.keyboard_grabbed
    }

    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    #[must_use]
    pub fn current_pointer_control(&self) -> PointerControl {
        self.control
    }

    fn require_window(&self) -> Result<(), PlatformError> {
        if self.window.is_some() {
            Ok(())
        } else {
            Err(PlatformError::NoDisplay)
        }
    }

    fn grab(&self, what: &str) -> Result<(), PlatformError> {
        self.require_window()?;
        if self.grabs_denied {
            return Err(PlatformError::Grab(format!("{what} already grabbed")));
        }
        Ok(())
    }
}

impl Platform for SimPlatform {
    fn has_window(&self) -> bool {
        self.window.is_some()
    }

    fn window_size(&self) -> (u32, u32) {
        self.window.unwrap_or_default()
    }

    fn poll_event(&mut self) -> Option<RawEvent> {
        self.events.pop_front()
    }

    fn hide_cursor(&mut self) -> Result<(), PlatformError> {
        self.calls.push(Call::HideCursor);
        self.require_window()?;
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), PlatformError> {
        self.calls.push(Call::ShowCursor);
        self.require_window()?;
        self.cursor_visible = true;
        Ok(())
    }

    fn grab_pointer(&mut self) -> Result<(), PlatformError> {
        self.calls.push(Call::GrabPointer);
        self.grab("pointer")?;
        self.pointer_grabbed = true;
        Ok(())
    }

    fn ungrab_pointer(&mut self) -> Result<(), PlatformError> {
        self.calls.push(Call::UngrabPointer);
        self.pointer_grabbed = false;
        Ok(())
    }

    fn grab_keyboard(&mut self) -> Result<(), PlatformError> {
        self.calls.push(Call::GrabKeyboard);
        self.grab("keyboard")?;
        self.keyboard_grabbed = true;
        Ok(())
    }

    fn ungrab_keyboard(&mut self) -> Result<(), PlatformError> {
        self.calls.push(Call::UngrabKeyboard);
        self.keyboard_grabbed = false;
        Ok(())
    }

    fn pointer_control(&self) -> Result<PointerControl, PlatformError> {
        if self.control_unreadable {
            return Err(PlatformError::PointerControl("request failed".to_string()));
        }
        Ok(self.control)
    }

    fn set_pointer_control(&mut self, control: PointerControl) -> Result<(), PlatformError> {
        self.calls.push(Call::SetPointerControl(control));
        self.control = control;
        Ok(())
    }

    fn warp_pointer(&mut self, x: i32, y: i32) -> Result<(), PlatformError> {
        self.calls.push(Call::WarpPointer(x, y));
        self.require_window()?;
        // A warp onto the current position generates no motion.
        if self.pointer != (x, y) {
            self.move_pointer(x, y, self.now);
        }
        Ok(())
    }

    fn bypass_compositor(&mut self) -> Result<(), PlatformError> {
        self.calls.push(Call::BypassCompositor);
        Ok(())
    }

    fn sync(&mut self) -> Result<(), PlatformError> {
        self.calls.push(Call::Sync);
        Ok(())
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    #[must_use]
    pub fn new(now: u64) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: u64) {
        self.now.set(now);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn milliseconds(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warp_queues_motion_back() {
        let mut sim = SimPlatform::new(640, 480);
        sim.set_time(7);
        sim.move_pointer(100, 100, 5);
        assert!(sim.poll_event().is_some());

        sim.warp_pointer(320, 240).unwrap();
        assert_eq!(
            sim.poll_event(),
            Some(RawEvent::PointerMotion { x: 320, y: 240, time: 7 })
        );

        sim.warp_pointer(320, 240).unwrap();
        assert_eq!(sim.poll_event(), None);
        assert_eq!(sim.warp_count(), 2);
    }

    #[test]
    fn headless_refuses_calls() {
        let mut sim = SimPlatform::headless();
        assert!(!sim.has_window());
        assert!(matches!(sim.grab_pointer(), Err(PlatformError::NoDisplay)));
    }

    #[test]
    fn window_can_appear_later() {
        let mut sim = SimPlatform::headless();
        sim.set_window(Some((800, 600)));
        assert!(sim.has_window());
        assert_eq!(sim.window_size(), (800, 600));
        assert!(sim.grab_pointer().is_ok());

        sim.set_window(None);
        assert!(!sim.has_window());
    }

    #[test]
    fn queued_motion_moves_the_pointer() {
        let mut sim = SimPlatform::new(640, 480);
        sim.move_pointer(10, 20, 1);
        sim.move_pointer(30, 40, 2);
        assert_eq!(sim.pending_events(), 2);
        assert_eq!(sim.pointer_position(), (30, 40));

        sim.poll_event();
        assert_eq!(sim.pending_events(), 1);
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(10);
        clock.advance(5);
        assert_eq!(clock.milliseconds(), 15);
        clock.set(3);
        assert_eq!(clock.milliseconds(), 3);
    }
}
