//! Loading of [`BoardSettings`] from `board.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::BoardSettings;

/// Environment variable that overrides the settings file location
pub const CONFIG_ENV_VAR: &str = "WEEK_BOARD_CONFIG";
const CONFIG_FILE_NAME: &str = "board.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid settings in {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    /// Use the env override, else the per-user config directory.
    pub fn new() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .or_else(default_config_path);
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read settings. A missing file yields defaults.
    pub fn load(&self) -> Result<BoardSettings> {
        let Some(path) = self.path.as_deref() else {
            return Ok(BoardSettings::default());
        };
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(BoardSettings::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = parse_settings(&data, path)?;
        Ok(settings)
    }

    /// Like [`Self::load`] but never fails; problems are logged and defaults used.
    pub fn load_or_default(&self) -> BoardSettings {
        self.load().unwrap_or_else(|err| {
            log::warn!("Falling back to default board settings: {:#}", err);
            BoardSettings::default()
        })
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Ken24T", "WeekBoard")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn parse_settings(data: &str, path: &Path) -> Result<BoardSettings, SettingsError> {
    let mut settings: BoardSettings = toml::from_str(data).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    settings.validate().map_err(|reason| SettingsError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;

    // Relative seed paths are resolved against the settings file
    if let (Some(seed), Some(dir)) = (settings.seed_path.as_ref(), path.parent()) {
        if seed.is_relative() {
            settings.seed_path = Some(dir.join(seed));
        }
    }
    Ok(settings)
}
