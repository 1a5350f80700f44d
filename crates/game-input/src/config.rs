use serde::{Deserialize, Serialize};

/// Input settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Use the mouse at all.
    pub mouse: bool,

    /// Never grab keyboard or pointer. Mouse look still works, but the
    /// cursor can leave the window.
    pub nograb: bool,

    /// The window covers the screen. Windowed clients give up their grab
    /// while the console is open or a map is loading.
    pub fullscreen: bool,

    /// Log keys that cannot be translated.
    pub verbose: bool,

    /// Treat a pointer at the window center as our own warp landing only
    /// while a warp is in flight, instead of on any exact center hit.
    pub strict_recenter: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            nograb: false,
            fullscreen: false,
            verbose: false,
            strict_recenter: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: InputConfig = serde_json::from_str(r#"{"nograb":true}"#).unwrap();
        assert!(cfg.mouse);
        assert!(cfg.nograb);
        assert!(!cfg.strict_recenter);
    }
}
