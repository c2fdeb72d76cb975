//! IGNLayer CLI - Command-line interface
//!
//! Fetches and synthesizes map tiles through the same pyramid the library
//! offers to rendering hosts, and manages the configuration and disk cache.

mod commands;
mod error;

use clap::{Parser, Subcommand};

use commands::cache::CacheAction;
use commands::locate::LocateArgs;
use commands::tile::TileArgs;

#[derive(Parser)]
#[command(name = "ignlayer")]
#[command(version = ignlayer::VERSION)]
#[command(about = "Topographic map tiles from the IGN Géoportail, at every zoom level")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce one tile and write it to a file
    Tile(TileArgs),
    /// Show which tile contains a location
    Locate(LocateArgs),
    /// Create the configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Disk cache management
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tile(args) => commands::tile::run(args),
        Commands::Locate(args) => commands::locate::run(args),
        Commands::Init { force } => commands::init::run(force),
        Commands::Cache { action } => commands::cache::run(action),
    };

    if let Err(e) = result {
        e.exit();
    }
}
