//! Persistent application settings stored as TOML under the `.pagedeck` root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Number of pages seeded when no order has been persisted yet.
pub const DEFAULT_PAGE_COUNT: usize = 20;

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application config directory could not be prepared.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file was not valid TOML.
    #[error("Failed to parse config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize settings for writing.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Failed to create the parent directory for the config file.
    #[error("Failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How the deck lays out its pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckLayout {
    Vertical,
    Horizontal,
    #[default]
    Grid,
}

impl DeckLayout {
    pub const ALL: [DeckLayout; 3] = [
        DeckLayout::Vertical,
        DeckLayout::Horizontal,
        DeckLayout::Grid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeckLayout::Vertical => "Vertical",
            DeckLayout::Horizontal => "Horizontal",
            DeckLayout::Grid => "Grid",
        }
    }
}

/// Interaction and navigation tuning options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionOptions {
    /// Wrap keyboard targeting past the first/last page instead of stopping.
    #[serde(default)]
    pub wrap_keyboard_targeting: bool,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            wrap_keyboard_targeting: false,
        }
    }
}

/// Deck seeding and persisted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSettings {
    /// Deck size used when no order has been persisted.
    #[serde(default = "default_page_count")]
    pub page_count: usize,
    /// Page ids in their last committed order; empty means "seed fresh".
    #[serde(default)]
    pub order: Vec<String>,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            page_count: default_page_count(),
            order: Vec::new(),
        }
    }
}

/// Aggregate application settings persisted between launches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub layout: DeckLayout,
    #[serde(default)]
    pub deck: DeckSettings,
    #[serde(default)]
    pub controls: InteractionOptions,
}

/// Resolve the configuration file path, ensuring the app root exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir()?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from_path(&config_path()?)
}

/// Load configuration from a specific path; a missing file yields defaults.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist configuration to disk, overwriting any previous contents.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to_path(config, &config_path()?)
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn default_page_count() -> usize {
    DEFAULT_PAGE_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.deck.page_count, DEFAULT_PAGE_COUNT);
        assert_eq!(config.layout, DeckLayout::Grid);
        assert!(!config.controls.wrap_keyboard_targeting);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let config = load_from_path(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn saved_order_and_layout_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.layout = DeckLayout::Horizontal;
        config.deck.order = vec!["3".into(), "1".into(), "2".into()];
        config.controls.wrap_keyboard_targeting = true;

        save_to_path(&config, &path).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "layout = 12").unwrap();
        let error = load_from_path(&path).unwrap_err();
        assert!(matches!(error, ConfigError::ParseToml { .. }));
    }
}
