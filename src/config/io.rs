use std::path::{Path, PathBuf};

use tracing::info;

use crate::app_dirs;

use super::types::{ConfigError, DeckConfig};

/// File name inside the appdeck directory.
pub(super) const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the configuration file path, creating the parent directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, falling back to defaults when missing.
pub fn load_or_default() -> Result<DeckConfig, ConfigError> {
    let path = config_path()?;
    load_from(&path)
}

pub(super) fn load_from(path: &Path) -> Result<DeckConfig, ConfigError> {
    if !path.exists() {
        return Ok(DeckConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist configuration, replacing the previous file.
pub fn save(config: &DeckConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    let text = toml::to_string_pretty(config)?;
    std::fs::write(&path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Configuration saved to {}", path.display());
    Ok(())
}
