//! Init command - create the configuration file.

use std::path::Path;

use ignlayer::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the init command.
pub fn run(force: bool) -> Result<(), CliError> {
    let path = config_file_path();
    let created = write_default(&path, force)?;

    if created {
        println!("Configuration file: {}", path.display());
        println!();
        println!("Set api_key in the [provider] section before fetching tiles.");
        println!("CLI arguments override config file values when specified.");
    } else {
        println!("Configuration file already exists: {}", path.display());
        println!("Use --force to overwrite it with defaults.");
    }
    Ok(())
}

/// Write the default configuration to `path` unless it exists.
///
/// Returns whether the file was written.
fn write_default(path: &Path, force: bool) -> Result<bool, CliError> {
    if path.exists() && !force {
        return Ok(false);
    }
    ConfigFile::default().save_to(path)?;
    Ok(true)
}
