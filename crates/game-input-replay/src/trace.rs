//! Recorded input traces and their replay.
//!
//! A trace is a JSON document listing frames. Each frame carries the
//! engine time, the client state the capture policy sees, and the raw
//! display events that arrived since the previous frame. A frame may
//! also carry `window` to create or resize the window mid-session:
//!
//! ```json
//! {
//!   "window": { "width": 640, "height": 480 },
//!   "frames": [
//!     { "time": 1000, "client": { "connection": "active" },
//!       "events": [ { "type": "pointer_motion", "x": 330, "y": 240, "time": 990 } ] }
//!   ]
//! }
//! ```

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use game_input::sim::{ManualClock, SimPlatform};
use game_input::{
    CaptureState, ClientState, FrameSummary, InputConfig, InputContext, InputEvent, PointerControl,
    RawEvent,
};
use serde::{Deserialize, Serialize};

/// Window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

fn default_window() -> Option<WindowSize> {
    Some(WindowSize {
        width: 640,
        height: 480,
    })
}

/// A recorded session.
#[derive(Debug, Clone, Deserialize)]
pub struct Trace {
    /// Window size, or `null` to replay without a window.
    #[serde(default = "default_window")]
    pub window: Option<WindowSize>,

    /// Pointer acceleration in effect before the first grab.
    #[serde(default)]
    pub pointer_control: Option<PointerControl>,

    pub frames: Vec<Frame>,
}

/// One frame of a trace.
#[derive(Debug, Clone, Deserialize)]
pub struct Frame {
    /// Engine time at the start of the frame.
    pub time: u64,

    #[serde(default)]
    pub client: ClientState,

    /// Switch fullscreen on or off from this frame on.
    #[serde(default)]
    pub fullscreen: Option<bool>,

    /// Window created or resized at the start of this frame.
    #[serde(default)]
    pub window: Option<WindowSize>,

    #[serde(default)]
    pub events: Vec<RawEvent>,
}

/// Load a trace from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or holds no
/// frames.
pub fn load(path: &Path) -> Result<Trace> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read trace: {}", path.display()))?;
    let trace = parse(&contents).with_context(|| format!("failed to parse trace: {}", path.display()))?;
    tracing::info!(?path, frames = trace.frames.len(), "Trace loaded");
    Ok(trace)
}

fn parse(contents: &str) -> Result<Trace> {
    let trace: Trace = serde_json::from_str(contents)?;
    if trace.frames.is_empty() {
        bail!("trace has no frames");
    }
    Ok(trace)
}

/// One output line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum Line<'a> {
    Event { frame: usize, event: &'a InputEvent },
    Frame { frame: usize, summary: FrameSummary },
    Shutdown {
        capture: CaptureState,
        pointer_control: PointerControl,
    },
}

/// Totals over a whole replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub frames: usize,
    pub events: usize,
    pub warps: usize,
}

/// Replay `trace` through a fresh [`InputContext`], writing one JSON line
/// per engine event and per frame to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn replay<W: Write>(trace: &Trace, config: InputConfig, out: &mut W) -> Result<ReplayStats> {
    let mut platform = match trace.window {
        Some(size) => SimPlatform::new(size.width, size.height),
        None => SimPlatform::headless(),
    };
    if let Some(control) = trace.pointer_control {
        platform = platform.with_pointer_control(control);
    }

    let start = trace.frames.first().map_or(0, |f| f.time);
    let clock = ManualClock::new(start);
    platform.set_time(start);

    let mut ctx = InputContext::new(config.clone());
    ctx.initialize(&mut platform, &clock, config);

    let mut stats = ReplayStats::default();
    let mut events = Vec::new();

    for (index, frame) in trace.frames.iter().enumerate() {
        clock.set(frame.time);
        platform.set_time(frame.time);
        if let Some(fullscreen) = frame.fullscreen {
            ctx.set_fullscreen(fullscreen);
        }
        if let Some(size) = frame.window {
            tracing::debug!(frame = index, ?size, "Window changed");
            platform.set_window(Some((size.width, size.height)));
        }
        for event in &frame.events {
            platform.push_event(event.clone());
        }
        tracing::trace!(
            frame = index,
            queued = platform.pending_events(),
            pointer = ?platform.pointer_position(),
            "Frame events queued"
        );

        events.clear();
        let summary = ctx.pump_frame(&mut platform, &clock, &frame.client, &mut events);
        tracing::debug!(frame = index, ?summary, "Frame pumped");

        for event in &events {
            write_line(out, &Line::Event { frame: index, event })?;
        }
        write_line(out, &Line::Frame { frame: index, summary })?;

        stats.frames += 1;
        stats.events += summary.pushed;
        stats.warps += usize::from(summary.warped);
    }

    ctx.shutdown(&mut platform);
    write_line(
        out,
        &Line::Shutdown {
            capture: ctx.capture_state(),
            pointer_control: platform.current_pointer_control(),
        },
    )?;

    Ok(stats)
}

fn write_line<W: Write>(out: &mut W, line: &Line<'_>) -> Result<()> {
    serde_json::to_writer(&mut *out, line).context("failed to encode output line")?;
    out.write_all(b"\n").context("failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOK_AROUND: &str = r#"{
        "pointer_control": { "accel_numerator": 3, "accel_denominator": 2, "threshold": 5 },
        "frames": [
            { "time": 1000, "client": { "connection": "active" } },
            { "time": 1100, "client": { "connection": "active" },
              "events": [
                { "type": "pointer_motion", "x": 330, "y": 240, "time": 1090 },
                { "type": "key_press", "keysym": 65365, "time": 1095 }
              ] },
            { "time": 1116, "client": { "connection": "active" } },
            { "time": 1132, "client": { "connection": "active", "catchers": "CONSOLE" } }
        ]
    }"#;

    fn lines(out: &[u8]) -> Vec<serde_json::Value> {
        std::str::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn replay_reports_events_and_restores_acceleration() {
        let trace = parse(LOOK_AROUND).unwrap();
        let mut out = Vec::new();
        let stats = replay(&trace, InputConfig::default(), &mut out).unwrap();

        assert_eq!(stats.frames, 4);
        assert_eq!(stats.events, 2);
        assert_eq!(stats.warps, 1);

        let lines = lines(&out);
        let events: Vec<_> = lines.iter().filter_map(|l| l.get("event")).collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"]["type"], "key");
        assert_eq!(events[1]["event"]["type"], "mouse_move");
        assert_eq!(events[1]["event"]["dx"], 20);

        let last = lines.last().unwrap();
        assert_eq!(last["shutdown"]["capture"], "released");
        assert_eq!(last["shutdown"]["pointer_control"]["accel_numerator"], 3);
    }

    #[test]
    fn headless_trace_replays_without_output_events() {
        let trace = parse(
            r#"{ "window": null, "frames": [
                { "time": 0, "events": [ { "type": "button_press", "button": 1, "time": 0 } ] }
            ] }"#,
        )
        .unwrap();
        let mut out = Vec::new();
        let stats = replay(&trace, InputConfig::default(), &mut out).unwrap();
        assert_eq!(stats.events, 0);
    }

    #[test]
    fn window_created_mid_replay_gets_grabbed() {
        let trace = parse(
            r#"{ "window": null, "frames": [
                { "time": 0, "client": { "connection": "active" } },
                { "time": 100, "client": { "connection": "active" },
                  "window": { "width": 800, "height": 600 } },
                { "time": 200, "client": { "connection": "active" },
                  "events": [ { "type": "pointer_motion", "x": 410, "y": 300, "time": 195 } ] },
                { "time": 216, "client": { "connection": "active" } }
            ] }"#,
        )
        .unwrap();
        let mut out = Vec::new();
        let stats = replay(&trace, InputConfig::default(), &mut out).unwrap();

        assert_eq!(stats.warps, 1);
        assert_eq!(stats.events, 1);

        let lines = lines(&out);
        assert!(lines[0]["frame"]["summary"]["capture"].is_null());
        assert_eq!(lines[1]["frame"]["summary"]["capture"], "installed");
        assert_eq!(lines[2]["frame"]["summary"]["warped"], true);
        let moves: Vec<_> = lines.iter().filter_map(|l| l.get("event")).collect();
        assert_eq!(moves[0]["event"]["type"], "mouse_move");
        assert_eq!(moves[0]["event"]["dx"], 20);
    }

    #[test]
    fn empty_trace_is_rejected() {
        assert!(parse(r#"{ "frames": [] }"#).is_err());
    }
}
