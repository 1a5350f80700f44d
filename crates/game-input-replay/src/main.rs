use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

mod config;
mod trace;

/// Replay recorded display events through the game input pump.
///
/// Reads a JSON trace of frames and raw display events, runs it through
/// the same pump the client uses against an in-memory display, and
/// prints the resulting engine events as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "game-input-replay", version, about)]
struct Cli {
    /// Trace file (JSON).
    trace: PathBuf,

    /// Path to configuration file (TOML).
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Replay as a fullscreen client.
    #[arg(long)]
    fullscreen: bool,

    /// Replay as a windowed client, overriding the config file.
    #[arg(long, conflicts_with = "fullscreen")]
    windowed: bool,

    /// Never grab keyboard or pointer.
    #[arg(long)]
    nograb: bool,

    /// Disable mouse input.
    #[arg(long)]
    no_mouse: bool,

    /// Only treat center hits as warp landings while a warp is in flight.
    #[arg(long)]
    strict_recenter: bool,

    /// Log keys that cannot be translated.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_and_merge_config(&cli)?;
    let trace = trace::load(&cli.trace)?;

    tracing::info!(
        mouse = cfg.mouse,
        nograb = cfg.nograb,
        fullscreen = cfg.fullscreen,
        strict_recenter = cfg.strict_recenter,
        "Starting replay"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stats = trace::replay(&trace, cfg, &mut out)?;
    out.flush().context("failed to flush output")?;

    tracing::info!(
        frames = stats.frames,
        events = stats.events,
        warps = stats.warps,
        "Replay finished"
    );
    Ok(())
}

/// Load config from file and apply CLI overrides.
fn load_and_merge_config(cli: &Cli) -> Result<game_input::InputConfig> {
    if !cli.trace.exists() {
        bail!("trace file not found: {}", cli.trace.display());
    }

    let mut cfg = config::load(cli.config.as_deref())?;

    if cli.fullscreen {
        cfg.fullscreen = true;
    }
    if cli.windowed {
        cfg.fullscreen = false;
    }
    if cli.nograb {
        cfg.nograb = true;
    }
    if cli.no_mouse {
        cfg.mouse = false;
    }
    if cli.strict_recenter {
        cfg.strict_recenter = true;
    }
    if cli.verbose {
        cfg.verbose = true;
    }

    Ok(cfg)
}
