//! User configuration stored in `~/.ignlayer/config.ini`.
//!
//! # Example
//!
//! ```ignore
//! use ignlayer::config::ConfigFile;
//!
//! let config = ConfigFile::load()?;
//! println!("cache: {}", config.cache.directory.display());
//! ```

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    default_cache_directory, CacheSettings, ConfigFile, DisplaySettings, ProviderSettings,
    PyramidSettings, DEFAULT_DPI, DEFAULT_TIMEOUT_SECS, HIGH_DENSITY_DPI, MAX_ZOOM_OUT_LEVELS,
};
