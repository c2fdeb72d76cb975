//! Cache management CLI commands.

use std::path::PathBuf;

use clap::Subcommand;
use ignlayer::cache::{DiskTileStore, StoreStats};

use super::common::{format_size, load_config};
use crate::error::CliError;

/// Cache action subcommands.
#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Show disk cache statistics
    Stats {
        /// Configuration file (default ~/.ignlayer/config.ini)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Run a cache subcommand.
pub fn run(action: CacheAction) -> Result<(), CliError> {
    match action {
        CacheAction::Stats { config } => {
            let config = load_config(config.as_deref())?;
            let cache_dir = &config.cache.directory;
            println!("Disk cache: {}", cache_dir.display());

            let stats = if cache_dir.exists() {
                DiskTileStore::new(cache_dir)
                    .and_then(|store| store.stats())
                    .map_err(CliError::CacheStats)?
            } else {
                StoreStats::default()
            };

            println!("  Tiles: {}", stats.records);
            println!("  Size:  {}", format_size(stats.bytes));
            Ok(())
        }
    }
}
