//! Encoded tile payload.

use super::TILE_PIXEL_DIM;

/// Encoded tile image (JPEG or PNG bytes) with its pixel dimensions.
///
/// Dimensions are reported separately from the bytes so the rendering host
/// can tell a standard 256×256 tile from a composite that covers more ground
/// and must be scaled down on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileImage {
    /// Encoded image bytes
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl TileImage {
    /// Create a tile image with explicit dimensions.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Create a square tile image `dim` pixels on a side.
    pub fn square(data: Vec<u8>, dim: u32) -> Self {
        Self::new(data, dim, dim)
    }

    /// Scale of this tile relative to a standard tile (1 for 256×256).
    pub fn factor(&self) -> u32 {
        self.width / TILE_PIXEL_DIM
    }
}
