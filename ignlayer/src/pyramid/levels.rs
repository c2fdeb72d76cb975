//! Zoom level classification.

use crate::tile::TILE_PIXEL_DIM;

/// Default lower native zoom level.
pub const DEFAULT_NATIVE_ZOOM: u8 = 15;

/// Default lowest synthesized zoom level.
pub const DEFAULT_MIN_ZOOM: u8 = 12;

/// Largest allowed distance between the minimum and native zoom levels.
///
/// Four levels already produce 4096 px composites built from 256 fetches.
pub const MAX_ZOOM_OUT_LEVELS: u8 = 4;

/// How a tile at a given zoom level is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomClass {
    /// Fetched from the upstream service as-is.
    Native,
    /// Lower native level on a high-density display: four tiles of the upper
    /// native level composited into one 512 px tile.
    HighDensityNative,
    /// Below the native levels: four children composited into a
    /// `factor · 256` px tile.
    ZoomOut {
        /// Linear scale relative to a standard tile, `2^(native - zoom)`
        factor: u32,
    },
    /// One level above the upper native level: a magnified parent quadrant.
    ZoomIn,
    /// No imagery can be produced; a placeholder is served.
    OutOfRange,
}

impl ZoomClass {
    /// Pixel side length of tiles in this class.
    pub fn tile_dim(&self, high_density: bool) -> u32 {
        match self {
            ZoomClass::Native | ZoomClass::ZoomIn => TILE_PIXEL_DIM,
            ZoomClass::HighDensityNative => 2 * TILE_PIXEL_DIM,
            ZoomClass::ZoomOut { factor } => factor * TILE_PIXEL_DIM,
            ZoomClass::OutOfRange if high_density => 2 * TILE_PIXEL_DIM,
            ZoomClass::OutOfRange => TILE_PIXEL_DIM,
        }
    }
}

/// The zoom range served by the pyramid.
///
/// ```text
/// min_zoom ..< native      ZoomOut
/// native                    Native (HighDensityNative on dense displays)
/// native + 1                Native
/// native + 2                ZoomIn
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PyramidLevels {
    native_zoom: u8,
    min_zoom: u8,
}

impl PyramidLevels {
    /// Create levels from the lower native zoom and the lowest synthesized
    /// zoom.
    ///
    /// `min_zoom` is clamped into
    /// `native_zoom - MAX_ZOOM_OUT_LEVELS ..= native_zoom`.
    pub fn new(native_zoom: u8, min_zoom: u8) -> Self {
        let floor = native_zoom.saturating_sub(MAX_ZOOM_OUT_LEVELS);
        Self {
            native_zoom,
            min_zoom: min_zoom.clamp(floor, native_zoom),
        }
    }

    /// Lower native zoom level.
    pub fn native_low(&self) -> u8 {
        self.native_zoom
    }

    /// Upper native zoom level.
    pub fn native_high(&self) -> u8 {
        self.native_zoom.saturating_add(1)
    }

    /// Lowest zoom level that is synthesized.
    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    /// Highest zoom level that is synthesized.
    pub fn max_zoom(&self) -> u8 {
        self.native_zoom.saturating_add(2)
    }

    /// Whether `zoom` is one of the two native levels.
    pub fn is_native(&self, zoom: u8) -> bool {
        zoom == self.native_low() || zoom == self.native_high()
    }

    /// Classify `zoom` for a display of the given density.
    pub fn classify(&self, zoom: u8, high_density: bool) -> ZoomClass {
        if zoom == self.native_low() {
            if high_density {
                ZoomClass::HighDensityNative
            } else {
                ZoomClass::Native
            }
        } else if zoom == self.native_high() {
            ZoomClass::Native
        } else if zoom >= self.min_zoom && zoom < self.native_low() {
            ZoomClass::ZoomOut {
                factor: 1 << (self.native_low() - zoom),
            }
        } else if zoom == self.max_zoom() {
            ZoomClass::ZoomIn
        } else {
            ZoomClass::OutOfRange
        }
    }
}

impl Default for PyramidLevels {
    fn default() -> Self {
        Self::new(DEFAULT_NATIVE_ZOOM, DEFAULT_MIN_ZOOM)
    }
}
