use crate::types::field::{Field, SortDirection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing browser configuration, persisted as songbook.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub sort: SortConfig,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("songbook.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.catalog.music_dir.as_os_str().is_empty() {
            errors.push("catalog.music_dir must not be empty".to_string());
        }

        if self.search.suggestion_limit == 0 {
            errors.push("search.suggestion_limit must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            catalog: CatalogConfig {
                music_dir: if self.catalog.music_dir.as_os_str().is_empty() {
                    defaults.catalog.music_dir
                } else {
                    self.catalog.music_dir.clone()
                },
                json_path: self.catalog.json_path.clone(),
            },
            search: SearchSettings {
                suggestion_limit: if self.search.suggestion_limit == 0 {
                    defaults.search.suggestion_limit
                } else {
                    self.search.suggestion_limit
                },
            },
            sort: self.sort,
        }
    }
}

/// Where the song records come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory of per-artist YAML files.
    #[serde(default = "default_music_dir")]
    pub music_dir: PathBuf,
    /// Flattened `search.json` export. Takes precedence over `music_dir` when set.
    #[serde(default)]
    pub json_path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            music_dir: default_music_dir(),
            json_path: None,
        }
    }
}

fn default_music_dir() -> PathBuf {
    PathBuf::from("music")
}

/// Autocomplete settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

fn default_suggestion_limit() -> usize {
    50
}

/// Initial ordering of the result table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    #[serde(default = "default_sort_field")]
    pub field: Field,
    #[serde(default = "default_sort_direction")]
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            field: default_sort_field(),
            direction: default_sort_direction(),
        }
    }
}

fn default_sort_field() -> Field {
    Field::Release
}

fn default_sort_direction() -> SortDirection {
    SortDirection::Descending
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
