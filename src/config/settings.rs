//! Configuration settings for catbot.
//!
//! Settings are loaded from `~/.catbot/config.yaml`. Every key is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::Paths;
use crate::error::{CatbotError, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Where tasks are kept.
    pub storage: StorageConfig,
}

/// General application settings.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color output setting.
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Decide whether to color, given whether stdout is a terminal.
    #[must_use]
    pub const fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Task file override. Defaults to `~/.catbot/tasks.txt`.
    pub tasks_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatbotError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        // An empty file deserializes as YAML null
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            CatbotError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// The task file to use: the configured one, or the default under `paths`.
    #[must_use]
    pub fn tasks_file(&self, paths: &Paths) -> PathBuf {
        self.storage
            .tasks_file
            .clone()
            .unwrap_or_else(|| paths.tasks_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert!(config.storage.tasks_file.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_path(&temp_dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "general:\n  color: never\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.general.color, ColorSetting::Never);
        assert!(config.storage.tasks_file.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "general:\n  color: purple\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, CatbotError::Config(_)));
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "general:\n  color: always\nstorage:\n  tasks_file: /tmp/my-tasks.txt\n",
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.general.color, ColorSetting::Always);
        assert_eq!(
            config.storage.tasks_file,
            Some(PathBuf::from("/tmp/my-tasks.txt"))
        );
    }

    #[test]
    fn test_tasks_file_override() {
        let paths = Paths::with_root(PathBuf::from("/home/me/.catbot"));

        let config = Config::default();
        assert_eq!(config.tasks_file(&paths), paths.tasks_file);

        let mut config = Config::default();
        config.storage.tasks_file = Some(PathBuf::from("/data/tasks.txt"));
        assert_eq!(config.tasks_file(&paths), PathBuf::from("/data/tasks.txt"));
    }

    #[test]
    fn test_color_setting() {
        assert!(ColorSetting::Auto.enabled(true));
        assert!(!ColorSetting::Auto.enabled(false));
        assert!(ColorSetting::Always.enabled(false));
        assert!(!ColorSetting::Never.enabled(true));
    }
}
