use std::{env, path::PathBuf, time::Duration};

use asteroid_shooter::compute::FPS;

// Runtime settings (not gameplay tuning).

pub const FRAME: Duration = Duration::from_nanos(1_000_000_000 / FPS as u64);

/// Where tracing output goes; stdout belongs to the game screen.
pub fn log_path() -> PathBuf {
    env::var_os("ASTEROIDS_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("asteroid_shooter.log"))
}

/// `ASTEROIDS_BELL=0` silences the terminal bell.
pub fn bell_enabled() -> bool {
    env::var("ASTEROIDS_BELL")
        .map(|v| v.trim() != "0")
        .unwrap_or(true)
}
