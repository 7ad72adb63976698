// src/infra/logger.rs — Structured logging with tracing

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter from JONODORO_LOG, then RUST_LOG, then `level`.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env("JONODORO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to stderr. Used by commands that do not take over the terminal.
pub fn init_logging(level: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .compact()
        .try_init();
}

/// Log to `path` (appending). Used while the TUI owns the terminal, where
/// anything written to stderr would tear the screen.
pub fn init_file_logging(level: &str, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
