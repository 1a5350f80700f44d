//! Platform key symbols.
//!
//! Values follow the X11 keysym encoding so an X front end can pass its
//! keysyms straight through. Only the symbols the translator names are
//! listed; anything else is still a valid [`Keysym`].

use serde::{Deserialize, Serialize};

/// A platform key symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keysym(pub u32);

impl Keysym {
    pub const SPACE: Self = Self(0x0020);
    pub const EXCLAM: Self = Self(0x0021);
    pub const NUMBERSIGN: Self = Self(0x0023);
    pub const DOLLAR: Self = Self(0x0024);
    pub const PERCENT: Self = Self(0x0025);
    pub const AMPERSAND: Self = Self(0x0026);
    pub const PARENLEFT: Self = Self(0x0028);
    pub const PARENRIGHT: Self = Self(0x0029);
    pub const ASTERISK: Self = Self(0x002a);
    pub const EQUAL: Self = Self(0x003d);
    pub const AT: Self = Self(0x0040);
    pub const ASCIICIRCUM: Self = Self(0x005e);
    pub const TWOSUPERIOR: Self = Self(0x00b2);

    pub const BACKSPACE: Self = Self(0xff08);
    pub const TAB: Self = Self(0xff09);
    pub const RETURN: Self = Self(0xff0d);
    pub const PAUSE: Self = Self(0xff13);
    pub const ESCAPE: Self = Self(0xff1b);
    pub const MULTI_KEY: Self = Self(0xff20);
    pub const HOME: Self = Self(0xff50);
    pub const LEFT: Self = Self(0xff51);
    pub const UP: Self = Self(0xff52);
    pub const RIGHT: Self = Self(0xff53);
    pub const DOWN: Self = Self(0xff54);
    pub const PAGE_UP: Self = Self(0xff55);
    pub const PAGE_DOWN: Self = Self(0xff56);
    pub const END: Self = Self(0xff57);
    pub const EXECUTE: Self = Self(0xff62);
    pub const INSERT: Self = Self(0xff63);

    pub const KP_SPACE: Self = Self(0xff80);
    pub const KP_ENTER: Self = Self(0xff8d);
    pub const KP_HOME: Self = Self(0xff95);
    pub const KP_LEFT: Self = Self(0xff96);
    pub const KP_UP: Self = Self(0xff97);
    pub const KP_RIGHT: Self = Self(0xff98);
    pub const KP_DOWN: Self = Self(0xff99);
    pub const KP_PAGE_UP: Self = Self(0xff9a);
    pub const KP_PAGE_DOWN: Self = Self(0xff9b);
    pub const KP_END: Self = Self(0xff9c);
    pub const KP_BEGIN: Self = Self(0xff9d);
    pub const KP_INSERT: Self = Self(0xff9e);
    pub const KP_DELETE: Self = Self(0xff9f);
    pub const KP_MULTIPLY: Self = Self(0xffaa);
    pub const KP_ADD: Self = Self(0xffab);
    pub const KP_SUBTRACT: Self = Self(0xffad);
    pub const KP_DECIMAL: Self = Self(0xffae);
    pub const KP_DIVIDE: Self = Self(0xffaf);
    pub const KP_0: Self = Self(0xffb0);
    pub const KP_1: Self = Self(0xffb1);
    pub const KP_2: Self = Self(0xffb2);
    pub const KP_3: Self = Self(0xffb3);
    pub const KP_4: Self = Self(0xffb4);
    pub const KP_6: Self = Self(0xffb6);
    pub const KP_7: Self = Self(0xffb7);
    pub const KP_8: Self = Self(0xffb8);
    pub const KP_9: Self = Self(0xffb9);

    pub const F1: Self = Self(0xffbe);
    pub const F2: Self = Self(0xffbf);
    pub const F3: Self = Self(0xffc0);
    pub const F4: Self = Self(0xffc1);
    pub const F5: Self = Self(0xffc2);
    pub const F6: Self = Self(0xffc3);
    pub const F7: Self = Self(0xffc4);
    pub const F8: Self = Self(0xffc5);
    pub const F9: Self = Self(0xffc6);
    pub const F10: Self = Self(0xffc7);
    pub const F11: Self = Self(0xffc8);
    pub const F12: Self = Self(0xffc9);

    pub const SHIFT_L: Self = Self(0xffe1);
    pub const SHIFT_R: Self = Self(0xffe2);
    pub const CONTROL_L: Self = Self(0xffe3);
    pub const CONTROL_R: Self = Self(0xffe4);
    pub const META_L: Self = Self(0xffe7);
    pub const META_R: Self = Self(0xffe8);
    pub const ALT_L: Self = Self(0xffe9);
    pub const ALT_R: Self = Self(0xffea);
    pub const DELETE: Self = Self(0xffff);

    /// Keysym for a Latin-1 character (X11 maps these one to one).
    #[must_use]
    pub const fn latin1(byte: u8) -> Self {
        Self(byte as u32)
    }
}

impl std::fmt::Display for Keysym {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}
