//! Host-facing tile provider.
//!
//! The rendering host asks for tiles by column, row, and zoom and receives
//! either an encoded image or [`Tile::NO_TILE`], meaning "leave this square
//! blank for now". Errors never reach the host.

mod async_provider;
mod provider;

pub use async_provider::AsyncTileProvider;
pub use provider::{IgnTileProvider, SetupError};

/// A tile handed to the rendering host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Encoded JPEG or PNG bytes
    pub data: Vec<u8>,
}

impl Tile {
    /// Sentinel for "no tile available": zero-sized with no data.
    pub const NO_TILE: Tile = Tile {
        width: 0,
        height: 0,
        data: Vec::new(),
    };

    /// Whether this is the [`Tile::NO_TILE`] sentinel.
    pub fn is_no_tile(&self) -> bool {
        self.width == 0 && self.height == 0 && self.data.is_empty()
    }
}

impl From<crate::tile::TileImage> for Tile {
    fn from(image: crate::tile::TileImage) -> Self {
        Self {
            width: image.width,
            height: image.height,
            data: image.data,
        }
    }
}

/// Capability offered to the rendering host.
///
/// Called concurrently from many host threads; implementations may block.
pub trait TileProvider: Send + Sync {
    /// Produce the tile at `(col, row)` for `zoom`, or [`Tile::NO_TILE`].
    fn get_tile(&self, col: u32, row: u32, zoom: u8) -> Tile;
}
