//! Platform keysym to engine key translation.
//!
//! The platform hands us a keysym plus whatever its locale-aware string
//! lookup produced for the press. Named keys come from a fixed table;
//! anything else falls back to the first looked-up byte so letter
//! shortcuts work on any layout the lookup understands.

use crate::keys::KeyCode;
use crate::keysym::Keysym;

/// Outcome of translating one key press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    /// Engine key, or `None` if the press carries text only.
    pub key: Option<KeyCode>,
    /// Characters for the console and text fields, in order. Empty for
    /// keys like F1 that produce no text.
    pub text: String,
}

/// Translate a key press.
///
/// # Arguments
/// * `keysym` - The platform keysym for the press
/// * `lookup` - The platform's locale-aware string for the press
/// * `verbose` - Warn about keysyms that cannot be translated
///
/// # Returns
/// The engine key and text, or `None` if the press is unrecognized.
#[must_use]
pub fn translate_press(keysym: Keysym, lookup: &str, verbose: bool) -> Option<Translation> {
    let key = resolve(keysym, lookup, verbose)?;
    // Text stops at the first NUL, like the platform's C string.
    let text = match key {
        Some(KeyCode::CONSOLE) => String::new(),
        _ => lookup.split('\0').next().unwrap_or_default().to_owned(),
    };
    Some(Translation { key, text })
}

/// Translate a key release. Releases never produce text.
#[must_use]
pub fn translate_release(keysym: Keysym, lookup: &str, verbose: bool) -> Option<KeyCode> {
    resolve(keysym, lookup, verbose).flatten()
}

/// Table lookup first, then the looked-up string.
///
/// The outer `None` means unrecognized; the inner `None` means the lookup
/// produced text but no usable key byte.
fn resolve(keysym: Keysym, lookup: &str, verbose: bool) -> Option<Option<KeyCode>> {
    tracing::trace!(%keysym, ?lookup, "Translating keysym");

    if let Some(key) = keysym_to_key(keysym) {
        return Some(Some(key));
    }

    if lookup.is_empty() {
        if verbose {
            tracing::warn!(%keysym, "String lookup failed for keysym");
        } else {
            tracing::trace!(%keysym, "Unrecognized keysym");
        }
        return None;
    }

    Some(lookup_byte_to_key(lookup.as_bytes()[0]))
}

/// Map the first byte of a looked-up string to a key.
///
/// Uppercase letters fold to lowercase. With Ctrl held the lookup yields
/// control bytes (Ctrl+A is 1, Ctrl+Z is 26), which map back to letters.
fn lookup_byte_to_key(byte: u8) -> Option<KeyCode> {
    let byte = match byte {
        0 => return None,
        b'A'..=b'Z' => byte.to_ascii_lowercase(),
        1..=26 => byte - 1 + b'a',
        _ => byte,
    };
    Some(KeyCode::ascii(byte))
}

/// Map a named keysym to its engine key.
///
/// Keypad digits alias the keypad navigation keys so the keypad behaves
/// the same with Num Lock on or off. Shifted US-layout digit row symbols
/// map to their digit so bindings ignore Shift.
#[must_use]
pub fn keysym_to_key(keysym: Keysym) -> Option<KeyCode> {
    #[allow(clippy::match_same_arms)]
    let key = match keysym {
        Keysym::KP_PAGE_UP | Keysym::KP_9 => KeyCode::KP_PGUP,
        Keysym::PAGE_UP => KeyCode::PGUP,
        Keysym::KP_PAGE_DOWN | Keysym::KP_3 => KeyCode::KP_PGDN,
        Keysym::PAGE_DOWN => KeyCode::PGDN,
        Keysym::KP_HOME | Keysym::KP_7 => KeyCode::KP_HOME,
        Keysym::HOME => KeyCode::HOME,
        Keysym::KP_END | Keysym::KP_1 => KeyCode::KP_END,
        Keysym::END => KeyCode::END,
        Keysym::KP_LEFT | Keysym::KP_4 => KeyCode::KP_LEFTARROW,
        Keysym::LEFT => KeyCode::LEFTARROW,
        Keysym::KP_RIGHT | Keysym::KP_6 => KeyCode::KP_RIGHTARROW,
        Keysym::RIGHT => KeyCode::RIGHTARROW,
        Keysym::KP_DOWN | Keysym::KP_2 => KeyCode::KP_DOWNARROW,
        Keysym::DOWN => KeyCode::DOWNARROW,
        Keysym::KP_UP | Keysym::KP_8 => KeyCode::KP_UPARROW,
        Keysym::UP => KeyCode::UPARROW,

        // Handheld keyboards report Fn+= for their escape key
        Keysym::ESCAPE | Keysym::EQUAL => KeyCode::ESCAPE,
        Keysym::KP_ENTER => KeyCode::KP_ENTER,
        Keysym::RETURN => KeyCode::ENTER,
        Keysym::TAB => KeyCode::TAB,

        Keysym::F1 => KeyCode::F1,
        Keysym::F2 => KeyCode::F2,
        Keysym::F3 => KeyCode::F3,
        Keysym::F4 => KeyCode::F4,
        Keysym::F5 => KeyCode::F5,
        Keysym::F6 => KeyCode::F6,
        Keysym::F7 => KeyCode::F7,
        Keysym::F8 => KeyCode::F8,
        Keysym::F9 => KeyCode::F9,
        Keysym::F10 => KeyCode::F10,
        Keysym::F11 => KeyCode::F11,
        Keysym::F12 => KeyCode::F12,

        Keysym::BACKSPACE => KeyCode::BACKSPACE,
        Keysym::KP_DELETE | Keysym::KP_DECIMAL => KeyCode::KP_DEL,
        Keysym::DELETE => KeyCode::DEL,
        Keysym::PAUSE => KeyCode::PAUSE,

        Keysym::SHIFT_L | Keysym::SHIFT_R => KeyCode::SHIFT,
        Keysym::EXECUTE | Keysym::CONTROL_L | Keysym::CONTROL_R => KeyCode::CTRL,
        Keysym::ALT_L | Keysym::META_L | Keysym::ALT_R | Keysym::META_R => KeyCode::ALT,

        Keysym::KP_BEGIN => KeyCode::KP_5,
        Keysym::INSERT => KeyCode::INS,
        Keysym::KP_INSERT | Keysym::KP_0 => KeyCode::KP_INS,
        Keysym::KP_MULTIPLY => KeyCode::ascii(b'*'),
        Keysym::KP_ADD => KeyCode::KP_PLUS,
        Keysym::KP_SUBTRACT => KeyCode::KP_MINUS,
        Keysym::KP_DIVIDE => KeyCode::KP_SLASH,

        Keysym::EXCLAM => KeyCode::ascii(b'1'),
        Keysym::AT => KeyCode::ascii(b'2'),
        Keysym::NUMBERSIGN => KeyCode::ascii(b'3'),
        Keysym::DOLLAR => KeyCode::ascii(b'4'),
        Keysym::PERCENT => KeyCode::ascii(b'5'),
        Keysym::ASCIICIRCUM => KeyCode::ascii(b'6'),
        Keysym::AMPERSAND => KeyCode::ascii(b'7'),
        Keysym::ASTERISK => KeyCode::ascii(b'8'),
        Keysym::PARENLEFT => KeyCode::ascii(b'9'),
        Keysym::PARENRIGHT => KeyCode::ascii(b'0'),

        // Handheld keyboards report Fn+Sym as the multi key
        Keysym::TWOSUPERIOR | Keysym::MULTI_KEY => KeyCode::CONSOLE,

        Keysym::SPACE | Keysym::KP_SPACE => KeyCode::SPACE,

        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!(keysym_to_key(Keysym::UP), Some(KeyCode::UPARROW));
        assert_eq!(keysym_to_key(Keysym::F12), Some(KeyCode::F12));
        assert_eq!(keysym_to_key(Keysym::KP_ENTER), Some(KeyCode::KP_ENTER));
        assert_eq!(keysym_to_key(Keysym::BACKSPACE), Some(KeyCode::BACKSPACE));
        assert_eq!(keysym_to_key(Keysym::KP_BEGIN), Some(KeyCode::KP_5));
        assert_eq!(keysym_to_key(Keysym::EXECUTE), Some(KeyCode::CTRL));
    }

    #[test]
    fn test_keypad_digits_alias_navigation() {
        assert_eq!(keysym_to_key(Keysym::KP_9), keysym_to_key(Keysym::KP_PAGE_UP));
        assert_eq!(keysym_to_key(Keysym::KP_0), Some(KeyCode::KP_INS));
        assert_eq!(keysym_to_key(Keysym::KP_DECIMAL), Some(KeyCode::KP_DEL));
    }

    #[test]
    fn test_both_sides_share_a_key() {
        assert_eq!(keysym_to_key(Keysym::SHIFT_L), keysym_to_key(Keysym::SHIFT_R));
        assert_eq!(keysym_to_key(Keysym::META_R), Some(KeyCode::ALT));
    }

    #[test]
    fn test_shifted_digit_row() {
        assert_eq!(keysym_to_key(Keysym::EXCLAM), Some(KeyCode::ascii(b'1')));
        assert_eq!(keysym_to_key(Keysym::PARENRIGHT), Some(KeyCode::ascii(b'0')));
        assert_eq!(keysym_to_key(Keysym::ASTERISK), Some(KeyCode::ascii(b'8')));
    }

    #[test]
    fn test_every_table_entry() {
        let table = [
            (Keysym::KP_PAGE_UP, KeyCode::KP_PGUP),
            (Keysym::KP_9, KeyCode::KP_PGUP),
            (Keysym::PAGE_UP, KeyCode::PGUP),
            (Keysym::KP_PAGE_DOWN, KeyCode::KP_PGDN),
            (Keysym::KP_3, KeyCode::KP_PGDN),
            (Keysym::PAGE_DOWN, KeyCode::PGDN),
            (Keysym::KP_HOME, KeyCode::KP_HOME),
            (Keysym::KP_7, KeyCode::KP_HOME),
            (Keysym::HOME, KeyCode::HOME),
            (Keysym::KP_END, KeyCode::KP_END),
            (Keysym::KP_1, KeyCode::KP_END),
            (Keysym::END, KeyCode::END),
            (Keysym::KP_LEFT, KeyCode::KP_LEFTARROW),
            (Keysym::KP_4, KeyCode::KP_LEFTARROW),
            (Keysym::LEFT, KeyCode::LEFTARROW),
            (Keysym::KP_RIGHT, KeyCode::KP_RIGHTARROW),
            (Keysym::KP_6, KeyCode::KP_RIGHTARROW),
            (Keysym::RIGHT, KeyCode::RIGHTARROW),
            (Keysym::KP_DOWN, KeyCode::KP_DOWNARROW),
            (Keysym::KP_2, KeyCode::KP_DOWNARROW),
            (Keysym::DOWN, KeyCode::DOWNARROW),
            (Keysym::KP_UP, KeyCode::KP_UPARROW),
            (Keysym::KP_8, KeyCode::KP_UPARROW),
            (Keysym::UP, KeyCode::UPARROW),
            (Keysym::ESCAPE, KeyCode::ESCAPE),
            (Keysym::EQUAL, KeyCode::ESCAPE),
            (Keysym::KP_ENTER, KeyCode::KP_ENTER),
            (Keysym::RETURN, KeyCode::ENTER),
            (Keysym::TAB, KeyCode::TAB),
            (Keysym::F1, KeyCode::F1),
            (Keysym::F2, KeyCode::F2),
            (Keysym::F3, KeyCode::F3),
            (Keysym::F4, KeyCode::F4),
            (Keysym::F5, KeyCode::F5),
            (Keysym::F6, KeyCode::F6),
            (Keysym::F7, KeyCode::F7),
            (Keysym::F8, KeyCode::F8),
            (Keysym::F9, KeyCode::F9),
            (Keysym::F10, KeyCode::F10),
            (Keysym::F11, KeyCode::F11),
            (Keysym::F12, KeyCode::F12),
            (Keysym::BACKSPACE, KeyCode::BACKSPACE),
            (Keysym::KP_DELETE, KeyCode::KP_DEL),
            (Keysym::KP_DECIMAL, KeyCode::KP_DEL),
            (Keysym::DELETE, KeyCode::DEL),
            (Keysym::PAUSE, KeyCode::PAUSE),
            (Keysym::SHIFT_L, KeyCode::SHIFT),
            (Keysym::SHIFT_R, KeyCode::SHIFT),
            (Keysym::EXECUTE, KeyCode::CTRL),
            (Keysym::CONTROL_L, KeyCode::CTRL),
            (Keysym::CONTROL_R, KeyCode::CTRL),
            (Keysym::ALT_L, KeyCode::ALT),
            (Keysym::META_L, KeyCode::ALT),
            (Keysym::ALT_R, KeyCode::ALT),
            (Keysym::META_R, KeyCode::ALT),
            (Keysym::KP_BEGIN, KeyCode::KP_5),
            (Keysym::INSERT, KeyCode::INS),
            (Keysym::KP_INSERT, KeyCode::KP_INS),
            (Keysym::KP_0, KeyCode::KP_INS),
            (Keysym::KP_MULTIPLY, KeyCode::ascii(b'*')),
            (Keysym::KP_ADD, KeyCode::KP_PLUS),
            (Keysym::KP_SUBTRACT, KeyCode::KP_MINUS),
            (Keysym::KP_DIVIDE, KeyCode::KP_SLASH),
            (Keysym::EXCLAM, KeyCode::ascii(b'1')),
            (Keysym::AT, KeyCode::ascii(b'2')),
            (Keysym::NUMBERSIGN, KeyCode::ascii(b'3')),
            (Keysym::DOLLAR, KeyCode::ascii(b'4')),
            (Keysym::PERCENT, KeyCode::ascii(b'5')),
            (Keysym::ASCIICIRCUM, KeyCode::ascii(b'6')),
            (Keysym::AMPERSAND, KeyCode::ascii(b'7')),
            (Keysym::ASTERISK, KeyCode::ascii(b'8')),
            (Keysym::PARENLEFT, KeyCode::ascii(b'9')),
            (Keysym::PARENRIGHT, KeyCode::ascii(b'0')),
            (Keysym::TWOSUPERIOR, KeyCode::CONSOLE),
            (Keysym::MULTI_KEY, KeyCode::CONSOLE),
            (Keysym::SPACE, KeyCode::SPACE),
            (Keysym::KP_SPACE, KeyCode::SPACE),
        ];
        for (keysym, key) in table {
            assert_eq!(keysym_to_key(keysym), Some(key), "{keysym}");
        }
    }

    #[test]
    fn test_plain_letters_are_not_in_table() {
        assert_eq!(keysym_to_key(Keysym::latin1(b'a')), None);
        assert_eq!(keysym_to_key(Keysym::latin1(b'Z')), None);
        assert_eq!(keysym_to_key(Keysym(0x1008_ff13)), None);
    }

    #[test]
    fn test_page_up_has_no_text() {
        let t = translate_press(Keysym::PAGE_UP, "", false).unwrap();
        assert_eq!(t.key, Some(KeyCode::PGUP));
        assert!(t.text.is_empty());
    }

    #[test]
    fn test_named_key_keeps_lookup_text() {
        let t = translate_press(Keysym::SPACE, " ", false).unwrap();
        assert_eq!(t.key, Some(KeyCode::SPACE));
        assert_eq!(t.text, " ");
    }

    #[test]
    fn test_console_toggle_never_types() {
        for keysym in [Keysym::TWOSUPERIOR, Keysym::MULTI_KEY] {
            let t = translate_press(keysym, "\u{b2}", false).unwrap();
            assert_eq!(t.key, Some(KeyCode::CONSOLE));
            assert!(t.text.is_empty());
        }
    }

    #[test]
    fn test_letters_fold_to_lowercase() {
        let t = translate_press(Keysym::latin1(b'Q'), "Q", false).unwrap();
        assert_eq!(t.key, Some(KeyCode::ascii(b'q')));
        assert_eq!(t.text, "Q");
    }

    #[test]
    fn test_control_bytes_map_to_letters() {
        for byte in 1..=26_u8 {
            let lookup = char::from(byte).to_string();
            let t = translate_press(Keysym::latin1(b'a' + byte - 1), &lookup, false).unwrap();
            assert_eq!(t.key, Some(KeyCode::ascii(b'a' + byte - 1)));
        }
    }

    #[test]
    fn test_unrecognized_without_lookup() {
        assert_eq!(translate_press(Keysym(0x1008_ff13), "", true), None);
        assert_eq!(translate_release(Keysym(0x1008_ff13), "", false), None);
    }

    #[test]
    fn test_text_stops_at_nul() {
        let t = translate_press(Keysym::latin1(b'x'), "x\0yz", false).unwrap();
        assert_eq!(t.text, "x");
    }

    #[test]
    fn test_release_uses_same_key() {
        assert_eq!(translate_release(Keysym::PAGE_UP, "", false), Some(KeyCode::PGUP));
        assert_eq!(
            translate_release(Keysym::latin1(b'W'), "W", false),
            Some(KeyCode::ascii(b'w'))
        );
    }
}
