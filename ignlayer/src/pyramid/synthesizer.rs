//! Recursive tile resolution.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{CacheKey, TileKeyLock, TileStore};
use crate::compose::{self, placeholder, PlaceholderStyle, TileFormat};
use crate::provider::TileSource;
use crate::tile::{TileError, TileImage, TileKey, TILE_PIXEL_DIM};

use super::levels::{PyramidLevels, ZoomClass};
use super::stats::{PyramidStats, PyramidStatsSnapshot};

/// Produces tiles for every zoom level of the pyramid.
///
/// Resolution is synchronous and may block on network I/O; call it from a
/// thread that is allowed to block. Recursion into neighbouring levels runs
/// on the calling thread.
pub struct TilePyramidSynthesizer {
    source: Arc<dyn TileSource>,
    store: Arc<dyn TileStore>,
    locks: TileKeyLock,
    levels: PyramidLevels,
    high_density: bool,
    placeholder_style: PlaceholderStyle,
    stats: PyramidStats,
}

impl TilePyramidSynthesizer {
    /// Create a synthesizer.
    ///
    /// # Arguments
    ///
    /// * `source` - Upstream imagery for the native levels
    /// * `store` - Persistent cache for every produced tile
    /// * `levels` - Native and synthesized zoom range
    /// * `high_density` - Whether the display is high density (dpi >= 480)
    pub fn new(
        source: Arc<dyn TileSource>,
        store: Arc<dyn TileStore>,
        levels: PyramidLevels,
        high_density: bool,
    ) -> Self {
        Self {
            source,
            store,
            locks: TileKeyLock::new(),
            levels,
            high_density,
            placeholder_style: PlaceholderStyle::for_density(high_density),
            stats: PyramidStats::new(),
        }
    }

    /// Replace the placeholder drawing style.
    pub fn with_placeholder_style(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Zoom range served.
    pub fn levels(&self) -> PyramidLevels {
        self.levels
    }

    /// Whether tiles are produced for a high-density display.
    pub fn high_density(&self) -> bool {
        self.high_density
    }

    /// Current counter values.
    pub fn stats(&self) -> PyramidStatsSnapshot {
        self.stats.snapshot()
    }

    /// Number of distinct tile keys locked so far.
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }

    /// Produce the tile for `key`.
    ///
    /// Zoom levels outside the pyramid yield a placeholder that is never
    /// stored. Any error means no tile is available right now; nothing is
    /// cached for a failed key, so a later call starts over.
    pub fn resolve(&self, key: &TileKey) -> Result<TileImage, TileError> {
        self.resolve_for(key, self.high_density)
    }

    fn resolve_for(&self, key: &TileKey, high_density: bool) -> Result<TileImage, TileError> {
        let class = self.levels.classify(key.zoom(), high_density);
        if class == ZoomClass::OutOfRange {
            debug!(key = %key, "zoom outside pyramid, serving placeholder");
            self.stats.record_placeholder();
            return placeholder(key, &self.placeholder_style);
        }

        let record = match class {
            ZoomClass::HighDensityNative => CacheKey::high_density(*key),
            _ => CacheKey::standard(*key),
        };
        let dim = class.tile_dim(high_density);

        let _guard = self.locks.acquire(key);

        if self.store.exists(&record) {
            match self.store.read(&record) {
                Ok(data) => {
                    debug!(record = %record, "cache hit");
                    self.stats.record_cache_hit();
                    return Ok(TileImage::square(data, dim));
                }
                Err(e) => {
                    warn!(record = %record, error = %e, "unreadable cache record, rebuilding");
                }
            }
        }

        let data = match class {
            ZoomClass::Native => self.fetch(key)?,
            ZoomClass::HighDensityNative => self.composite(key, dim)?,
            ZoomClass::ZoomOut { .. } => self.composite(key, dim)?,
            ZoomClass::ZoomIn => self.magnify_quadrant(key)?,
            ZoomClass::OutOfRange => return placeholder(key, &self.placeholder_style),
        };

        if let Err(e) = self.store.write(&record, &data) {
            warn!(record = %record, error = %e, "failed to store tile");
            self.stats.record_store_write_failure();
        }

        Ok(TileImage::square(data, dim))
    }

    /// Fetch a native tile. The body must decode as an image before it is
    /// handed back for storing; the bytes themselves are passed through.
    fn fetch(&self, key: &TileKey) -> Result<Vec<u8>, TileError> {
        let data = match self.source.fetch(key) {
            Ok(data) => data,
            Err(e) => {
                warn!(key = %key, error = %e, "fetch failed");
                self.stats.record_fetch_failure();
                return Err(e.into());
            }
        };

        if let Err(e) = compose::decode(&data) {
            warn!(key = %key, bytes = data.len(), error = %e, "fetched body is not an image");
            self.stats.record_fetch_failure();
            return Err(e);
        }

        info!(key = %key, bytes = data.len(), source = self.source.name(), "fetched tile");
        self.stats.record_fetch();
        Ok(data)
    }

    /// Paste the four children of `key` into a `dim`×`dim` JPEG.
    fn composite(&self, key: &TileKey, dim: u32) -> Result<Vec<u8>, TileError> {
        let half = dim / 2;
        let mut canvas = compose::new_canvas(dim, dim);

        for child in key.children() {
            // Children are always the standard variant
            let tile = self.resolve_for(&child, false)?;
            let image = compose::decode(&tile.data)?;
            let (qx, qy) = child.quadrant();
            compose::paste_at(&mut canvas, &image, qx * half, qy * half);
        }

        let data = compose::encode(&canvas, TileFormat::Jpeg)?;
        info!(key = %key, dim, "composited tile");
        self.stats.record_synthesis();
        Ok(data)
    }

    /// Crop this key's quadrant out of its parent and magnify it to a
    /// standard tile.
    ///
    /// Only called for `ZoomIn` keys, which sit two levels above the lower
    /// native zoom and so always have a parent.
    fn magnify_quadrant(&self, key: &TileKey) -> Result<Vec<u8>, TileError> {
        let Some(parent) = key.parent() else {
            return Err(TileError::NoParent(*key));
        };
        let tile = self.resolve_for(&parent, false)?;
        let image = compose::decode(&tile.data)?;

        let half = image.width() / 2;
        let (qx, qy) = key.quadrant();
        let quadrant = compose::crop(&image, qx * half, qy * half, half, half);
        let magnified = compose::magnify(&quadrant, TILE_PIXEL_DIM, TILE_PIXEL_DIM);

        let data = compose::encode(&magnified, TileFormat::Jpeg)?;
        info!(key = %key, parent = %parent, "magnified tile");
        self.stats.record_synthesis();
        Ok(data)
    }
}
