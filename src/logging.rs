//! Tracing setup
//!
//! The setup screen owns the terminal, so log output goes to a file only.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::{Result, SetupError};

const DEFAULT_FILTER: &str = "notes_setup=info";

/// Split a log path into an existing directory and a file name, creating
/// the directory when needed
pub fn prepare_log_path(path: &Path) -> Result<(PathBuf, String)> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| SetupError::LogFile {
            path: path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "missing file name"),
        })?
        .to_string();

    std::fs::create_dir_all(&directory).map_err(|source| SetupError::LogFile {
        path: path.display().to_string(),
        source,
    })?;

    Ok((directory, file_name))
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn init_logging(log_file: &Path) -> Result<WorkerGuard> {
    // Set default log level to INFO if not specified
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (directory, file_name) = prepare_log_path(log_file)?;
    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter),
        )
        .init();

    Ok(guard)
}
