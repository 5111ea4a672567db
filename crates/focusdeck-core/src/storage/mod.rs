mod config;
mod kv;

pub use config::{Config, TimerConfig};
pub use kv::JsonStore;

use std::path::PathBuf;

/// Returns the application data directory, creating it on demand.
///
/// Defaults to `~/.config/focusdeck/`. Set FOCUSDECK_DATA_DIR to use a
/// different location (tests point this at a temp directory).
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("FOCUSDECK_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("focusdeck"),
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
