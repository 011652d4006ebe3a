//! Diagnostics setup. The board owns the terminal while it runs, so logs are
//! only ever written to a file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const LOG_FILE_ENV: &str = "KANBAN_DEBUG_LOG";

/// Log file named by [`LOG_FILE_ENV`]. An empty value disables logging.
pub fn log_file_path(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Installs a DEBUG-level file subscriber. Without a log file no subscriber
/// is installed and tracing events are dropped.
pub fn init(log_path: Option<&Path>) -> anyhow::Result<()> {
    let Some(log_path) = log_path else {
        return Ok(());
    };

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false)
        .init();

    tracing::info!("Logging to {}", log_path.display());
    Ok(())
}
