//! Loading and saving config.ini.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read or parse the config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write the config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// A value is out of range or malformed
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create the config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from `~/.ignlayer/config.ini`.
    ///
    /// Missing file means defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults. Keys present in the file
    /// override the defaults one by one.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to `~/.ignlayer/config.ini`.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }
}

/// Config directory (`~/.ignlayer`).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ignlayer")
}

/// Config file path (`~/.ignlayer/config.ini`).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DPI, DEFAULT_TIMEOUT_SECS};
    use crate::tile::LayerKind;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert!(config.provider.api_key.is_none());
        assert_eq!(config.provider.layer, LayerKind::Standard);
        assert_eq!(config.provider.host, "gpp3-wxs.ign.fr");
        assert_eq!(config.provider.referer, "http://localhost/IGN/");
        assert_eq!(config.provider.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(config.cache.directory.ends_with("ignlayer"));
        assert_eq!(config.display.dpi, DEFAULT_DPI);
        assert!(!config.display.high_density());
        assert_eq!(config.pyramid.native_zoom, 15);
        assert_eq!(config.pyramid.min_zoom, 12);
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigFile::load_from(&temp_dir.path().join("missing.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sub").join("config.ini");

        let mut config = ConfigFile::default();
        config.provider.api_key = Some("abc123".to_string());
        config.provider.layer = LayerKind::Aerial;
        config.provider.timeout = 0;
        config.cache.directory = temp_dir.path().join("tiles");
        config.display.dpi = 480;
        config.pyramid.min_zoom = 13;

        config.save_to(&path).unwrap();
        let loaded = ConfigFile::load_from(&path).unwrap();

        assert_eq!(loaded, config);
        assert!(loaded.display.high_density());
        assert!(loaded.provider.timeout_duration().is_none());
    }

    #[test]
    fn test_paths() {
        assert!(config_directory().ends_with(".ignlayer"));
        assert!(config_file_path().ends_with(".ignlayer/config.ini"));
    }
}
