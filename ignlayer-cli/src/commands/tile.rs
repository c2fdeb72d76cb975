//! Tile command - produce one tile and save it.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use ignlayer::config::ConfigFile;
use ignlayer::facade::{IgnTileProvider, TileProvider};
use tracing::info;

use super::common::{load_config, start_logging, LayerArg};
use crate::error::CliError;

/// Arguments for the tile command.
#[derive(Debug, Args)]
pub struct TileArgs {
    /// Tile column
    #[arg(long)]
    pub col: u32,

    /// Tile row
    #[arg(long)]
    pub row: u32,

    /// Zoom level
    #[arg(long)]
    pub zoom: u8,

    /// Output image file
    #[arg(long, short)]
    pub output: PathBuf,

    /// Map layer (default from config)
    #[arg(long, value_enum)]
    pub layer: Option<LayerArg>,

    /// Géoportail API key (default from config)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Configuration file (default ~/.ignlayer/config.ini)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tile cache directory (default from config)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Display density in DPI (default from config)
    #[arg(long)]
    pub dpi: Option<u32>,
}

/// Apply command-line overrides on top of the loaded configuration.
fn apply_overrides(mut config: ConfigFile, args: &TileArgs) -> ConfigFile {
    if let Some(layer) = args.layer {
        config.provider.layer = layer.into();
    }
    if let Some(key) = &args.api_key {
        config.provider.api_key = Some(key.clone());
    }
    if let Some(dir) = &args.cache_dir {
        config.cache.directory = dir.clone();
    }
    if let Some(dpi) = args.dpi {
        config.display.dpi = dpi;
    }
    config
}

/// Run the tile command.
pub fn run(args: TileArgs) -> Result<(), CliError> {
    let _logging = start_logging()?;

    let config = apply_overrides(load_config(args.config.as_deref())?, &args);
    let provider = IgnTileProvider::from_config(&config)?;

    let tile = provider.get_tile(args.col, args.row, args.zoom);
    if tile.is_no_tile() {
        return Err(CliError::NoTile {
            col: args.col,
            row: args.row,
            zoom: args.zoom,
        });
    }

    fs::write(&args.output, &tile.data).map_err(|error| CliError::FileWrite {
        path: args.output.clone(),
        error,
    })?;

    let stats = provider.stats();
    info!(%stats, "tile written");

    println!(
        "Tile {}/{}/{} ({}, {}x{} px) written to {}",
        args.zoom,
        args.col,
        args.row,
        provider.layer(),
        tile.width,
        tile.height,
        args.output.display()
    );
    println!(
        "  {} fetched, {} synthesized, {} from cache",
        stats.fetches, stats.syntheses, stats.cache_hits
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ignlayer::tile::LayerKind;

    fn args() -> TileArgs {
        TileArgs {
            col: 543,
            row: 370,
            zoom: 16,
            output: PathBuf::from("out.jpg"),
            layer: None,
            api_key: None,
            config: None,
            cache_dir: None,
            dpi: None,
        }
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = ConfigFile::default();
        assert_eq!(apply_overrides(config.clone(), &args()), config);
    }

    #[test]
    fn test_overrides_win() {
        let args = TileArgs {
            layer: Some(LayerArg::Aerial),
            api_key: Some("cli-key".to_string()),
            cache_dir: Some(PathBuf::from("/tmp/tiles")),
            dpi: Some(480),
            ..args()
        };

        let config = apply_overrides(ConfigFile::default(), &args);
        assert_eq!(config.provider.layer, LayerKind::Aerial);
        assert_eq!(config.provider.api_key.as_deref(), Some("cli-key"));
        assert_eq!(config.cache.directory, PathBuf::from("/tmp/tiles"));
        assert!(config.display.high_density());
    }
}
