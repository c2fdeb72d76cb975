//! Common types and utilities shared across CLI commands.

use std::path::Path;

use clap::ValueEnum;
use ignlayer::config::ConfigFile;
use ignlayer::logging::{default_log_dir, default_log_file, init_logging, LoggingGuard};
use ignlayer::tile::LayerKind;

use crate::error::CliError;

/// Map layer selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LayerArg {
    /// Topographic map scans
    Standard,
    /// Aerial orthophotos
    Aerial,
}

impl From<LayerArg> for LayerKind {
    fn from(layer: LayerArg) -> Self {
        match layer {
            LayerArg::Standard => LayerKind::Standard,
            LayerArg::Aerial => LayerKind::Aerial,
        }
    }
}

/// Load configuration from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let config = match path {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    Ok(config)
}

/// Start file and terminal logging.
pub fn start_logging() -> Result<LoggingGuard, CliError> {
    init_logging(&default_log_dir(), default_log_file())
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}

/// Format a byte count for humans.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
