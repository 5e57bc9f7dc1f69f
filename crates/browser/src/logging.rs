//! Application log setup.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Default application log file.
pub const APP_LOG: &str = "browser.log";

/// Create the application log, truncating any previous run.
pub fn open_log_file(path: &Path) -> Result<File> {
    File::create(path)
        .with_context(|| format!("failed to create application log {}", path.display()))
}

/// Install the global subscriber writing to `path`.
///
/// The file is truncated, so it only ever holds the current run. When it
/// cannot be created the subscriber writes to stderr instead. `RUST_LOG`
/// overrides the level picked by `verbose`.
pub fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    let writer = match open_log_file(path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(e) => {
            eprintln!("{:#}; logging to stderr", e);
            BoxMakeWriter::new(io::stderr)
        }
    };

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_is_truncated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(APP_LOG);
        fs::write(&path, "previous run\n").unwrap();

        open_log_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_unwritable_log_falls_back_to_stderr() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join(APP_LOG);

        assert!(open_log_file(&path).is_err());
        // The only test installing the global subscriber.
        assert!(init_logging(&path, false).is_ok());
        assert!(!path.exists());
    }
}
