//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use ignlayer::config::ConfigFileError;
use ignlayer::facade::SetupError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be read or written
    Config(ConfigFileError),
    /// Tile provider could not be built
    Setup(SetupError),
    /// Invalid command-line argument
    InvalidArgument(String),
    /// No tile could be produced
    NoTile { col: u32, row: u32, zoom: u8 },
    /// Failed to write output file
    FileWrite { path: PathBuf, error: std::io::Error },
    /// Failed to inspect the disk cache
    CacheStats(std::io::Error),
}

impl CliError {
    /// Exit the process with an error message and code 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Setup(SetupError::Provider(_)) => {
                eprintln!();
                eprintln!("Make sure that:");
                eprintln!("  1. api_key is set in the [provider] section of the config file");
                eprintln!("     (run `ignlayer init` to create it) or passed with --api-key");
                eprintln!("  2. The key is allowed for the configured referer");
            }
            CliError::NoTile { .. } => {
                eprintln!();
                eprintln!("Common causes:");
                eprintln!("  1. No network connection or the WMTS server is unreachable");
                eprintln!("  2. The API key is invalid or not allowed for this referer");
                eprintln!("  3. The tile lies outside the layer's coverage");
                eprintln!("Run with RUST_LOG=debug for details.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Setup(e) => write!(f, "{}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::NoTile { col, row, zoom } => write!(
                f,
                "No tile available for col={}, row={}, zoom={}",
                col, row, zoom
            ),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path.display(), error)
            }
            CliError::CacheStats(e) => write!(f, "Failed to read disk cache: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Setup(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            CliError::CacheStats(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<SetupError> for CliError {
    fn from(e: SetupError) -> Self {
        CliError::Setup(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tile_message() {
        let err = CliError::NoTile {
            col: 543,
            row: 370,
            zoom: 16,
        };
        assert_eq!(
            err.to_string(),
            "No tile available for col=543, row=370, zoom=16"
        );
    }

    #[test]
    fn test_file_write_has_source() {
        use std::error::Error;

        let err = CliError::FileWrite {
            path: PathBuf::from("/tmp/out.jpg"),
            error: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/out.jpg"));
        assert!(err.source().is_some());
    }
}
