//! Config and data directory locations

use std::path::PathBuf;

const APP_DIR: &str = "wordle-game";

fn from_env(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
}

/// Directory holding `config.toml`
///
/// Uses `WORDLE_CONFIG_DIR` if set, otherwise the platform config directory
/// (`~/.config/wordle-game` on Linux).
pub fn config_dir() -> PathBuf {
    from_env("WORDLE_CONFIG_DIR").unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    })
}

/// Default directory for statistics, accounts and logs
///
/// Uses `WORDLE_DATA_DIR` if set, otherwise the platform data directory
/// (`~/.local/share/wordle-game` on Linux).
pub fn data_dir() -> PathBuf {
    from_env("WORDLE_DATA_DIR").unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    })
}
