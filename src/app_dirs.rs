//! Application directory helpers anchored to a single `.appdeck` folder.
//!
//! Config and log files live under the OS config directory by default. The
//! `APPDECK_CONFIG_HOME` environment variable or a scoped [`ConfigBaseGuard`]
//! relocates them for tests and portable installs.

use std::{
    path::PathBuf,
    sync::{LazyLock, Mutex, MutexGuard},
};

use directories::BaseDirs;
use thiserror::Error;

/// Directory name under the OS config root.
pub const APP_DIR_NAME: &str = ".appdeck";

/// Environment variable overriding the base directory.
pub const CONFIG_HOME_ENV: &str = "APPDECK_CONFIG_HOME";

static CONFIG_BASE_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> =
    LazyLock::new(|| Mutex::new(None));
static OVERRIDE_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Errors raised while resolving or creating application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No OS base directory could be resolved.
    #[error("No suitable base directory available for application files")]
    NoBaseDir,
    /// The directory could not be created.
    #[error("Failed to create application directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Root `.appdeck` directory, created on first use.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    ensure_dir(base.join(APP_DIR_NAME))
}

/// Log directory under the root, created on first use.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    let root = app_root_dir()?;
    ensure_dir(root.join("logs"))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    let overridden = CONFIG_BASE_OVERRIDE
        .lock()
        .unwrap_or_else(|err| err.into_inner())
        .clone();
    if let Some(path) = overridden {
        return Some(path);
    }
    if let Ok(path) = std::env::var(CONFIG_HOME_ENV) {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Scoped override of the base directory.
///
/// Holding the guard also serializes callers, so concurrent tests cannot
/// interleave their overrides.
pub struct ConfigBaseGuard {
    _serial: MutexGuard<'static, ()>,
}

impl ConfigBaseGuard {
    /// Route application directories under `base` until the guard drops.
    pub fn set(base: PathBuf) -> Self {
        let serial = OVERRIDE_SERIAL.lock().unwrap_or_else(|err| err.into_inner());
        *CONFIG_BASE_OVERRIDE
            .lock()
            .unwrap_or_else(|err| err.into_inner()) = Some(base);
        Self { _serial: serial }
    }
}

impl Drop for ConfigBaseGuard {
    fn drop(&mut self) {
        *CONFIG_BASE_OVERRIDE
            .lock()
            .unwrap_or_else(|err| err.into_inner()) = None;
    }
}
