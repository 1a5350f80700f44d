//! Keyboard and pointer grab lifecycle.
//!
//! While installed the window owns keyboard and pointer, the cursor is
//! invisible and pointer acceleration is neutral so the motion tracker
//! sees raw offsets. Releasing puts back exactly the acceleration that
//! was in effect before the grab.

use serde::{Deserialize, Serialize};

use crate::client::{ConnectionState, KeyCatchers};
use crate::motion::{center_of, MotionTracker};
use crate::platform::{Platform, PlatformError, PointerControl};

/// Whether the grab is in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureState {
    #[default]
    Released,
    Installed,
}

/// Whether input should be captured this frame.
///
/// A fullscreen client always captures. A windowed client lets go while
/// the console is down or while it is loading, so the user can reach
/// other windows.
#[must_use]
pub fn should_capture(fullscreen: bool, catchers: KeyCatchers, connection: ConnectionState) -> bool {
    if fullscreen {
        return true;
    }
    !catchers.contains(KeyCatchers::CONSOLE) && !connection.is_loading()
}

/// Grab state plus the acceleration to restore on release.
#[derive(Debug, Clone, Default)]
pub struct Grab {
    state: CaptureState,
    /// Mouse input enabled by configuration.
    available: bool,
    /// Acceleration read when the grab was installed.
    saved_control: Option<PointerControl>,
    /// Display grabs were made on activate and must be undone on
    /// release, whatever `nograb` says by then.
    display_grabbed: bool,
}

impl Grab {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> CaptureState {
        self.state
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.state == CaptureState::Installed
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Acceleration that release will restore, if a grab saved one.
    #[must_use]
    pub fn saved_control(&self) -> Option<PointerControl> {
        self.saved_control
    }

    /// Install the grab. Does nothing if already installed, if the mouse
    /// is disabled, or if there is no window. With `nograb` only the
    /// logical state changes.
    ///
    /// Returns `true` if the state changed.
    pub fn activate<P: Platform>(
        &mut self,
        platform: &mut P,
        tracker: &mut MotionTracker,
        now: u64,
        nograb: bool,
    ) -> bool {
        if !self.available || !platform.has_window() || self.is_installed() {
            return false;
        }
        if !nograb {
            self.install(platform, tracker, now);
            self.display_grabbed = true;
        }
        self.state = CaptureState::Installed;
        tracing::info!(nograb, "Input grab installed");
        true
    }

    /// Release the grab. Does nothing if already released, if the mouse
    /// is disabled, or if there is no window. Display grabs are undone
    /// only if activate made them.
    ///
    /// Returns `true` if the state changed.
    pub fn deactivate<P: Platform>(&mut self, platform: &mut P) -> bool {
        if !self.available || !platform.has_window() || !self.is_installed() {
            return false;
        }
        let display_grabbed = std::mem::take(&mut self.display_grabbed);
        if display_grabbed {
            self.uninstall(platform);
        }
        self.state = CaptureState::Released;
        tracing::info!(display_grabbed, "Input grab released");
        true
    }

    fn install<P: Platform>(&mut self, platform: &mut P, tracker: &mut MotionTracker, now: u64) {
        warn_on(platform.sync(), "sync");
        warn_on(platform.bypass_compositor(), "compositor bypass");
        warn_on(platform.hide_cursor(), "hide cursor");
        warn_on(platform.grab_pointer(), "pointer grab");

        // Without the current values there is nothing to restore later,
        // so leave acceleration alone.
        match platform.pointer_control() {
            Ok(control) => {
                tracing::debug!(?control, "Saved pointer acceleration");
                self.saved_control = Some(control);
                warn_on(
                    platform.set_pointer_control(PointerControl::NEUTRAL),
                    "neutral acceleration",
                );
            }
            Err(e) => {
                tracing::warn!("Failed to read pointer acceleration: {e}");
                self.saved_control = None;
            }
        }
        warn_on(platform.sync(), "sync");

        let (width, height) = platform.window_size();
        tracker.reset(center_of(width, height), now);

        warn_on(platform.grab_keyboard(), "keyboard grab");
        warn_on(platform.sync(), "sync");
    }

    fn uninstall<P: Platform>(&mut self, platform: &mut P) {
        if let Some(control) = self.saved_control.take() {
            tracing::debug!(?control, "Restoring pointer acceleration");
            warn_on(platform.set_pointer_control(control), "restore acceleration");
        }
        warn_on(platform.ungrab_pointer(), "pointer ungrab");
        warn_on(platform.ungrab_keyboard(), "keyboard ungrab");
        warn_on(platform.show_cursor(), "show cursor");
    }
}

fn warn_on(result: Result<(), PlatformError>, what: &str) {
    if let Err(e) = result {
        tracing::warn!(what, "Display call failed: {e}");
    }
}
