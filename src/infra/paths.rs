// src/infra/paths.rs — XDG-compliant path management
//
// All paths respect the JONODORO_HOME environment variable for isolation.
// When JONODORO_HOME is set, config and the log file live under that directory.
// When unset, config uses ~/.jonodoro/ and the log lives in XDG_DATA_HOME/jonodoro.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Returns the JONODORO_HOME override, if set.
fn jonodoro_home() -> Option<PathBuf> {
    std::env::var_os("JONODORO_HOME").map(PathBuf::from)
}

/// Home directory, falling back to the working directory when none is known.
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration directory: $JONODORO_HOME/ or ~/.jonodoro/
pub fn config_dir() -> PathBuf {
    if let Some(home) = jonodoro_home() {
        return home;
    }
    dirs_home().join(".jonodoro")
}

/// Data directory: $JONODORO_HOME/data/ or ~/.local/share/jonodoro/
pub fn data_dir() -> PathBuf {
    if let Some(home) = jonodoro_home() {
        return home.join("data");
    }
    ProjectDirs::from("", "", "jonodoro")
        .map(|p| p.data_local_dir().to_path_buf())
        .unwrap_or_else(|| config_dir().join("data"))
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default log file used while the TUI owns the terminal
pub fn log_file_path() -> PathBuf {
    data_dir().join("jonodoro.log")
}
