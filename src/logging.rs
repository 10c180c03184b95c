//! `tracing` subscriber setup.
//!
//! The filter comes from `RUST_LOG` and defaults to `warn`. Headless commands
//! log to stderr; the TUI owns the terminal, so it only logs when given a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::AppError;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr.
pub fn init_stderr() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(env_filter())
        .try_init();
}

/// Log to a file (truncated on start).
pub fn init_file(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input(format!("Failed to create log file '{}': {e}", path.display()))
    })?;
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(env_filter())
        .try_init();
    Ok(())
}
