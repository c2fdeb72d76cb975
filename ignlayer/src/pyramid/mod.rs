//! Tile pyramid synthesis.
//!
//! The upstream service only has imagery at two adjacent zoom levels. This
//! module produces tiles for the surrounding levels:
//!
//! ```text
//! zoom 12 ─┐
//! zoom 13  ├─ ZoomOut: 2×2 children of zoom+1 pasted into one larger tile
//! zoom 14 ─┘
//! zoom 15 ─┐
//! zoom 16 ─┴─ Native: fetched (zoom 15 is a 2×2 composite of zoom 16 on
//!             high-density displays)
//! zoom 17 ─── ZoomIn: one quadrant of the zoom 16 parent, magnified
//! ```
//!
//! Every produced tile is written to the store and every production runs
//! under the tile key's lock, so concurrent requests for one key cause a
//! single fetch or synthesis.

mod levels;
mod stats;
mod synthesizer;


pub use levels::{
    PyramidLevels, ZoomClass, DEFAULT_MIN_ZOOM, DEFAULT_NATIVE_ZOOM, MAX_ZOOM_OUT_LEVELS,
};
pub use stats::{PyramidStats, PyramidStatsSnapshot};
pub use synthesizer::TilePyramidSynthesizer;
