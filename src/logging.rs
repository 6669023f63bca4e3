//! Logging setup.
//!
//! Writes tracing output to stdout and to a per-launch file under the
//! appdeck logs directory, keeping only the most recent launches around.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// How many launch logs to keep, counting the one being created.
const KEEP_LOG_FILES: usize = 6;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Errors raised while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The logs directory could not be resolved or created.
    #[error(transparent)]
    Dir(#[from] app_dirs::AppDirError),
    /// Old log files could not be enumerated or removed.
    #[error("Failed to prune logs under {path}: {source}")]
    Prune {
        /// Directory or file the pruning failed on.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The launch timestamp could not be formatted.
    #[error("Failed to format log file name: {0}")]
    FormatTime(#[from] time::error::Format),
    /// Another global subscriber is already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber. Subsequent calls are no-ops.
///
/// Failures are returned so callers can degrade to stderr without aborting
/// startup.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let dir = app_dirs::logs_dir()?;
    prune_old_logs(&dir, KEEP_LOG_FILES.saturating_sub(1))?;
    let file_name = log_file_name(now())?;
    let (file_writer, guard) = tracing_appender::non_blocking(rolling::never(&dir, &file_name));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer));
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    tracing::info!("Logging to {}", dir.join(file_name).display());
    Ok(())
}

fn log_file_name(now: OffsetDateTime) -> Result<String, time::error::Format> {
    const STAMP: &[FormatItem<'_>] =
        format_description!("[year][month][day]-[hour][minute][second]");
    Ok(format!("appdeck-{}.log", now.format(STAMP)?))
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Remove the oldest `.log` files until at most `keep` remain.
fn prune_old_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let entries = fs::read_dir(dir).map_err(|source| LoggingError::Prune {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut logs: Vec<(SystemTime, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect();
    logs.sort_by_key(|(modified, _)| *modified);

    let excess = logs.len().saturating_sub(keep);
    for (_, path) in logs.into_iter().take(excess) {
        fs::remove_file(&path).map_err(|source| LoggingError::Prune { path, source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{thread, time::Duration};
    use tempfile::tempdir;

    #[test]
    fn file_name_carries_the_launch_stamp() {
        let fixed = OffsetDateTime::from_unix_timestamp(1_750_000_000).unwrap();
        assert_eq!(log_file_name(fixed).unwrap(), "appdeck-20250615-150640.log");
    }

    #[test]
    fn pruning_keeps_the_newest_files() {
        let dir = tempdir().unwrap();
        for index in 0..8 {
            fs::write(dir.path().join(format!("appdeck-{index}.log")), "x").unwrap();
            thread::sleep(Duration::from_millis(10));
        }
        fs::write(dir.path().join("notes.txt"), "kept").unwrap();

        prune_old_logs(dir.path(), 5).unwrap();

        let mut remaining: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().into_string().unwrap())
            .collect();
        remaining.sort();
        assert_eq!(
            remaining,
            vec![
                "appdeck-3.log",
                "appdeck-4.log",
                "appdeck-5.log",
                "appdeck-6.log",
                "appdeck-7.log",
                "notes.txt",
            ]
        );
    }
}
