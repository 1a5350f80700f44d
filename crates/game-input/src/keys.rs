//! Engine key numbering.
//!
//! Printable keys use their lowercase ASCII value. Everything else lives
//! above 127 in a fixed block shared with the console, menu and binding
//! code, so these values must never be renumbered.

use serde::{Deserialize, Serialize};

/// An engine key number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const TAB: Self = Self(9);
    pub const ENTER: Self = Self(13);
    pub const ESCAPE: Self = Self(27);
    pub const SPACE: Self = Self(32);
    pub const BACKSPACE: Self = Self(127);

    pub const COMMAND: Self = Self(128);
    pub const CAPSLOCK: Self = Self(129);
    pub const POWER: Self = Self(130);
    pub const PAUSE: Self = Self(131);

    pub const UPARROW: Self = Self(132);
    pub const DOWNARROW: Self = Self(133);
    pub const LEFTARROW: Self = Self(134);
    pub const RIGHTARROW: Self = Self(135);

    pub const ALT: Self = Self(136);
    pub const CTRL: Self = Self(137);
    pub const SHIFT: Self = Self(138);
    pub const INS: Self = Self(139);
    pub const DEL: Self = Self(140);
    pub const PGDN: Self = Self(141);
    pub const PGUP: Self = Self(142);
    pub const HOME: Self = Self(143);
    pub const END: Self = Self(144);

    pub const F1: Self = Self(145);
    pub const F2: Self = Self(146);
    pub const F3: Self = Self(147);
    pub const F4: Self = Self(148);
    pub const F5: Self = Self(149);
    pub const F6: Self = Self(150);
    pub const F7: Self = Self(151);
    pub const F8: Self = Self(152);
    pub const F9: Self = Self(153);
    pub const F10: Self = Self(154);
    pub const F11: Self = Self(155);
    pub const F12: Self = Self(156);

    pub const KP_HOME: Self = Self(160);
    pub const KP_UPARROW: Self = Self(161);
    pub const KP_PGUP: Self = Self(162);
    pub const KP_LEFTARROW: Self = Self(163);
    pub const KP_5: Self = Self(164);
    pub const KP_RIGHTARROW: Self = Self(165);
    pub const KP_END: Self = Self(166);
    pub const KP_DOWNARROW: Self = Self(167);
    pub const KP_PGDN: Self = Self(168);
    pub const KP_ENTER: Self = Self(169);
    pub const KP_INS: Self = Self(170);
    pub const KP_DEL: Self = Self(171);
    pub const KP_SLASH: Self = Self(172);
    pub const KP_MINUS: Self = Self(173);
    pub const KP_PLUS: Self = Self(174);

    /// First of five consecutive mouse button keys.
    pub const MOUSE1: Self = Self(178);
    pub const MOUSE2: Self = Self(179);
    pub const MOUSE3: Self = Self(180);
    pub const MOUSE4: Self = Self(181);
    pub const MOUSE5: Self = Self(182);
    pub const MWHEELDOWN: Self = Self(183);
    pub const MWHEELUP: Self = Self(184);

    /// Console toggle.
    pub const CONSOLE: Self = Self(185);

    /// Key for a printable ASCII byte.
    #[must_use]
    pub const fn ascii(byte: u8) -> Self {
        Self(byte as u16)
    }

    /// Mouse button key `MOUSE1 + offset`, for offsets 0 to 4.
    #[must_use]
    pub fn mouse(offset: u8) -> Option<Self> {
        (offset < 5).then(|| Self(Self::MOUSE1.0 + u16::from(offset)))
    }
}

impl std::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0x21..=0x7e => write!(f, "'{}'", char::from(self.0 as u8)),
            n => write!(f, "key#{n}"),
        }
    }
}
