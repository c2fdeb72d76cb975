//! Locate command - show the tile containing a location.

use clap::Args;
use ignlayer::coord::{locate, tile_origin};

use crate::error::CliError;

/// Northern and southern limit of the Mercator tile grid.
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Arguments for the locate command.
#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Zoom level
    #[arg(long, default_value = "15")]
    pub zoom: u8,
}

fn validate(args: &LocateArgs) -> Result<(), CliError> {
    if !args.lat.is_finite() || args.lat.abs() >= MAX_LATITUDE {
        return Err(CliError::InvalidArgument(format!(
            "latitude {} is outside ±{:.4}",
            args.lat, MAX_LATITUDE
        )));
    }
    if !args.lon.is_finite() || !(-180.0..180.0).contains(&args.lon) {
        return Err(CliError::InvalidArgument(format!(
            "longitude {} is outside [-180, 180)",
            args.lon
        )));
    }
    if args.zoom > 30 {
        return Err(CliError::InvalidArgument(format!(
            "zoom {} is above 30",
            args.zoom
        )));
    }
    Ok(())
}

/// Run the locate command.
pub fn run(args: LocateArgs) -> Result<(), CliError> {
    validate(&args)?;

    let location = locate(args.lat, args.lon, args.zoom);
    let (north, west) = tile_origin(location.col, location.row, location.zoom);

    println!("Location: {}, {}", args.lat, args.lon);
    println!(
        "  Tile:   col={}, row={}, zoom={}",
        location.col, location.row, location.zoom
    );
    println!("  Pixel:  x={:.1}, y={:.1}", location.x, location.y);
    println!("  Corner: {:.6}, {:.6} (north-west)", north, west);
    Ok(())
}
