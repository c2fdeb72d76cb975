//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and the WMTS `PM` tile matrix set used by the upstream tile service.
//!
//! The projection is spherical Mercator with its origin moved to the
//! north-west corner of the world square: x grows eastward from the
//! antimeridian and y grows southward from the northern Mercator limit, both
//! in meters.


use std::f64::consts::PI;

use crate::tile::TILE_PIXEL_DIM;

/// Earth radius used by the spherical Mercator projection, in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the circumference of the projected world square, in meters.
const HALF_WORLD: f64 = EARTH_RADIUS * PI;

/// Tile and in-tile pixel position of a geographic point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLocation {
    /// Tile column (west to east)
    pub col: u32,
    /// Tile row (north to south)
    pub row: u32,
    /// Zoom level
    pub zoom: u8,
    /// Horizontal pixel offset inside the tile (0..256)
    pub x: f64,
    /// Vertical pixel offset inside the tile (0..256)
    pub y: f64,
}

/// Projects a longitude onto the WMTS x axis.
///
/// # Arguments
///
/// * `lon` - Longitude in degrees
///
/// # Returns
///
/// Distance in meters from the western edge of the world square.
#[inline]
pub fn lon_to_x(lon: f64) -> f64 {
    EARTH_RADIUS * lon.to_radians() + HALF_WORLD
}

/// Projects a latitude onto the WMTS y axis.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees
///
/// # Returns
///
/// Distance in meters from the northern edge of the world square, growing
/// southward.
#[inline]
pub fn lat_to_y(lat: f64) -> f64 {
    let mercator = EARTH_RADIUS * (lat.to_radians() / 2.0 + PI / 4.0).tan().ln();
    HALF_WORLD - mercator
}

/// Ground distance covered by one tile side at the given zoom level, in meters.
#[inline]
pub fn tile_dimension(zoom: u8) -> f64 {
    2.0 * HALF_WORLD / 2.0_f64.powi(zoom as i32)
}

/// Index of the tile column containing the longitude.
#[inline]
pub fn lon_to_column(lon: f64, zoom: u8) -> u32 {
    (lon_to_x(lon) / tile_dimension(zoom)).floor() as u32
}

/// Index of the tile row containing the latitude.
#[inline]
pub fn lat_to_row(lat: f64, zoom: u8) -> u32 {
    (lat_to_y(lat) / tile_dimension(zoom)).floor() as u32
}

/// Pixel position of a point inside the tile that contains it.
///
/// Returns `(x, y)` in pixels of a standard 256×256 tile, measured from the
/// tile's top-left corner.
#[inline]
pub fn pixel_offset(lat: f64, lon: f64, zoom: u8) -> (f64, f64) {
    let tile = tile_dimension(zoom);
    let px = TILE_PIXEL_DIM as f64;
    let x = lon_to_x(lon) / tile * px - lon_to_column(lon, zoom) as f64 * px;
    let y = lat_to_y(lat) / tile * px - lat_to_row(lat, zoom) as f64 * px;
    (x, y)
}

/// Locates a geographic point in the tile grid.
pub fn locate(lat: f64, lon: f64, zoom: u8) -> TileLocation {
    let (x, y) = pixel_offset(lat, lon, zoom);
    TileLocation {
        col: lon_to_column(lon, zoom),
        row: lat_to_row(lat, zoom),
        zoom,
        x,
        y,
    }
}

/// Converts tile coordinates back to geographic coordinates.
///
/// Returns the `(latitude, longitude)` of the tile's north-west corner.
pub fn tile_origin(col: u32, row: u32, zoom: u8) -> (f64, f64) {
    let tile = tile_dimension(zoom);
    let x = col as f64 * tile - HALF_WORLD;
    let y = HALF_WORLD - row as f64 * tile;

    let lon = (x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
    (lat, lon)
}
