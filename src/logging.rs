//! Log sink setup
//!
//! The TUI owns stdout and the alternate screen, so logs only ever go to a
//! file. Without `--log-file` no subscriber is installed and every `tracing`
//! macro is a no-op.

use std::{fs::File, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::error::{ChatError, Result};

/// Filter directive for the given verbosity
#[must_use]
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "chat_mock=debug"
    } else {
        "chat_mock=info"
    }
}

/// Install a global subscriber writing plain text to `path`
///
/// # Errors
/// Returns an error if the file cannot be created or a subscriber is
/// already installed
pub fn init(path: &Path, verbose: bool) -> Result<()> {
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(EnvFilter::new(filter_directive(verbose)))
        .try_init()
        .map_err(|e| ChatError::Logging(e.to_string()))
}
