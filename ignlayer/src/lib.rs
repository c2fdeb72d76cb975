//! IGNLayer - Topographic map tiles from a two-level WMTS source
//!
//! This library serves raster map tiles to a rendering host for every zoom
//! level of a tile pyramid whose upstream service only provides imagery at two
//! adjacent native zoom levels. Other levels are synthesized locally by
//! compositing (zoom-out) or cropping (zoom-in) native tiles, and every
//! produced tile is cached on disk.
//!
//! # Architecture
//!
//! ```text
//! Host ──► TileProvider::get_tile ──► TilePyramidSynthesizer::resolve
//!                                        │
//!            ┌───────────────┬───────────┼──────────────┬──────────────┐
//!            ▼               ▼           ▼              ▼              ▼
//!       TileKeyLock     TileStore    TileSource     compose::*    (recursion to
//!       (per key)       (disk)       (WMTS/HTTP)    (raster ops)   adjacent zoom)
//! ```

pub mod cache;
pub mod compose;
pub mod config;
pub mod coord;
pub mod facade;
pub mod logging;
pub mod provider;
pub mod pyramid;
pub mod tile;

/// Library version, used in CLI banners and the HTTP user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
