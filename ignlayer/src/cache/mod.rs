//! Tile cache: per-key locking and the persistent tile store.
//!
//! # Architecture
//!
//! ```text
//! TilePyramidSynthesizer
//!        │
//!        ├──► TileKeyLock::acquire(key)   (one producer per key)
//!        │
//!        └──► TileStore                    (one file per CacheKey)
//!               └── DiskTileStore ──► <cache_dir>/[ortho-]z{zoom}[_hr]-r{row}-c{col}.jpg
//! ```
//!
//! The store performs no locking of its own; callers hold the key's lock
//! around every check-then-write sequence.

mod lock;
mod path;
mod store;

pub use lock::{TileKeyLock, TileLockGuard};
pub use path::{cache_file_name, cache_path, CacheKey, TileVariant};
pub use store::{DiskTileStore, StoreStats, TileStore};
