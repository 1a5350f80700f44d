use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use game_input::InputConfig;

const CONFIG_DIR: &str = "game-input";
const CONFIG_FILE: &str = "config.toml";

/// Where input settings live when `--config` is not given: `game-input/config.toml`
/// in the user's config directory.
#[must_use]
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// Read mouse and grab settings for a replay.
///
/// Keys missing from the file keep their `InputConfig` defaults, and a
/// missing file means mouse input on, grabs enabled and a windowed client.
/// Command-line flags are layered on top by the caller.
///
/// # Errors
///
/// Fails on an unreadable file or a value of the wrong type, such as
/// `mouse = "yes"`.
pub fn load(path: Option<&Path>) -> Result<InputConfig> {
    let path = path.map_or_else(config_path, Path::to_path_buf);

    if !path.exists() {
        tracing::debug!(?path, "No input config, using defaults");
        return Ok(InputConfig::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;

    let config = parse(&contents)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;

    tracing::info!(?path, "Input config loaded");
    Ok(config)
}

fn parse(contents: &str) -> Result<InputConfig> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = load(Some(Path::new("/nonexistent/game-input.toml"))).unwrap();
        assert_eq!(cfg, InputConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = parse("nograb = true\nstrict_recenter = true\n").unwrap();
        assert!(cfg.mouse);
        assert!(cfg.nograb);
        assert!(cfg.strict_recenter);
        assert!(!cfg.fullscreen);
    }

    #[test]
    fn bad_types_are_rejected() {
        assert!(parse("mouse = \"yes\"").is_err());
    }
}
