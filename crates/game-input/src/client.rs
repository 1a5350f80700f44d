//! Client state the capture policy looks at each frame.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Client connection state, in connection order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Uninitialized,
    /// Not talking to a server; the main menu is up.
    #[default]
    Disconnected,
    Authorizing,
    Connecting,
    Challenging,
    Connected,
    Loading,
    Primed,
    /// In game.
    Active,
    Cinematic,
}

impl ConnectionState {
    /// Anything between the main menu and being in game.
    #[must_use]
    pub fn is_loading(self) -> bool {
        !matches!(self, Self::Disconnected | Self::Active)
    }
}

bitflags! {
    /// Subsystems currently catching key input.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct KeyCatchers: u32 {
        const CONSOLE = 0x0001;
        const UI = 0x0002;
        const MESSAGE = 0x0004;
        const CGAME = 0x0008;
    }
}

/// Per-frame snapshot of the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientState {
    pub connection: ConnectionState,
    pub catchers: KeyCatchers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_and_game_are_not_loading() {
        assert!(!ConnectionState::Disconnected.is_loading());
        assert!(!ConnectionState::Active.is_loading());
        assert!(ConnectionState::Connecting.is_loading());
        assert!(ConnectionState::Primed.is_loading());
        assert!(ConnectionState::Uninitialized.is_loading());
    }
}
