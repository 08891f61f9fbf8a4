use std::time::Duration;

pub mod app_core;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod key_handler;
pub mod scheduler;
pub mod tui;

pub use config::PlayerConfig;
pub use controller::{PlaybackController, PlaybackState};
pub use engine::{MediaEngine, MediaEvent, RodioEngine, ScriptedEngine};
pub use error::PlaybackError;
pub use scheduler::{FrameClock, FrameScheduler, FrameToken, ManualScheduler};

// ~60fps
pub const REFRESH_RATE: Duration = Duration::from_millis(16);

pub const CONFIG_DIRECTORY: &str = "sonatina";
pub const LOG_FILE: &str = "sonatina.log";

/// Render a playback position as `m:ss`.
///
/// Minutes are never padded and may exceed 59; seconds always take two
/// digits. Negative and non-finite values render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let seconds = match seconds.is_finite() && seconds > 0.0 {
        true => seconds,
        false => 0.0,
    };

    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;

    format!("{mins}:{secs:02}")
}

/// Strip a `file://` scheme, leaving a plain filesystem path.
pub fn strip_file_scheme(locator: &str) -> &str {
    locator.strip_prefix("file://").unwrap_or(locator)
}

pub fn is_remote_locator(locator: &str) -> bool {
    let lower = locator.to_ascii_lowercase();
    ["http://", "https://", "rtsp://", "ftp://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}
