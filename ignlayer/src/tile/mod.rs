//! Tile identity and payload types.
//!
//! A [`TileKey`] names one tile of the pyramid and is the identity used for
//! caching and locking. A [`TileImage`] is the encoded result handed back to
//! the rendering host together with its true pixel dimensions.

mod error;
mod key;
mod payload;

pub use error::TileError;
pub use key::{LayerKind, TileKey};
pub use payload::TileImage;

/// Side length of a standard tile in pixels.
pub const TILE_PIXEL_DIM: u32 = 256;
