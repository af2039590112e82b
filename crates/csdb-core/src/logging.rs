//! Logging init: file under the XDG state dir, or stderr fallback.

use anyhow::Result;
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,csdb=debug"))
}

/// Initialize structured logging to `~/.local/state/csdb/csdb.log`.
/// On failure (e.g. state dir unwritable), returns Err so the caller can
/// fall back to `init_logging_stderr`.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("csdb")?;
    let log_file_path = xdg_dirs.place_state_file("csdb.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(Mutex::new(file)))
        .with_ansi(false)
        .init();

    tracing::debug!("csdb logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when `init_logging`
/// fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
