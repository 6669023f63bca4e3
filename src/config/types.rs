use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs::AppDirError;
use crate::apps::DeckEntry;

use super::defaults;

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be resolved or created.
    #[error(transparent)]
    AppDir(#[from] AppDirError),
    /// Failed reading the config file.
    #[error("Failed to read config {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed writing the config file.
    #[error("Failed to write config {path}: {source}")]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this version.
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// Failed turning the settings back into TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Screen size class reported by the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenClass {
    /// Phone-sized layouts.
    #[default]
    Compact,
    /// Tablet-sized layouts.
    Large,
    /// Desktop and large-tablet layouts.
    ExtraLarge,
}

impl ScreenClass {
    /// True for the largest layout class.
    pub fn is_extra_large(self) -> bool {
        matches!(self, ScreenClass::ExtraLarge)
    }
}

/// Injected device environment: layout class plus drop hit paddings.
///
/// Drop regions are easier to hit on roomy layouts when they reach past the
/// drawn icon; the paddings say by how much.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Layout class the shell runs under.
    #[serde(default)]
    pub screen: ScreenClass,
    /// Expansion applied to the top, bottom and right edges.
    #[serde(default = "defaults::outer_hit_padding")]
    pub outer_hit_padding: f32,
    /// Expansion applied to the left edge.
    #[serde(default = "defaults::inner_hit_padding")]
    pub inner_hit_padding: f32,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            screen: ScreenClass::default(),
            outer_hit_padding: defaults::outer_hit_padding(),
            inner_hit_padding: defaults::inner_hit_padding(),
        }
    }
}

/// Everything appdeck persists between launches.
///
/// Config keys (TOML): `drag_tint`, `device`, `entries`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// RGBA overlay applied to dragged previews hovering the info target.
    #[serde(default = "defaults::drag_tint")]
    pub drag_tint: [u8; 4],
    /// Device environment the shell was configured for.
    #[serde(default)]
    pub device: DeviceProfile,
    /// Dock entries in display order.
    #[serde(default = "defaults::entries")]
    pub entries: Vec<DeckEntry>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            drag_tint: defaults::drag_tint(),
            device: DeviceProfile::default(),
            entries: defaults::entries(),
        }
    }
}
