use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Installs a file-backed `tracing` subscriber when `log_file` is set.
///
/// The picker owns the terminal, so logs never go to stdout or stderr.
/// Without a log file no subscriber is installed and events are dropped.
///
/// # Errors
/// Returns an error when the log file cannot be opened for appending.
pub(crate) fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(log_file) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
