//! Structured logging to a file.
//!
//! The terminal belongs to the game screen, so log output goes to
//! ~/.rogue_clone/rogue-clone.log. The filter is read from `ROGUE_CLONE_LOG`
//! (same syntax as `RUST_LOG`) and falls back to `info`.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "ROGUE_CLONE_LOG";

const DEFAULT_FILTER: &str = "info";

static LOGGING_INIT: Once = Once::new();

/// Filter from `ROGUE_CLONE_LOG`, or `info` when unset or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber, appending to `path`.
///
/// Idempotent: only the first successful call installs a subscriber.
pub fn init_logging(path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;
    LOGGING_INIT.call_once(move || {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .compact();

        // Ignore error if a global subscriber is already set (e.g., by a test harness)
        let _ = subscriber.try_init();
    });
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
