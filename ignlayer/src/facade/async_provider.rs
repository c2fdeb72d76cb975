//! Async adapter for tokio hosts.

use std::sync::Arc;

use tracing::error;

use super::{Tile, TileProvider};

/// Runs a blocking [`TileProvider`] on tokio's blocking thread pool.
///
/// Resolution may block on network I/O and on other requests for the same
/// key, so it must never run on an async worker thread.
pub struct AsyncTileProvider<P: TileProvider + 'static> {
    inner: Arc<P>,
}

impl<P: TileProvider + 'static> Clone for AsyncTileProvider<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: TileProvider + 'static> AsyncTileProvider<P> {
    pub fn new(inner: Arc<P>) -> Self {
        Self { inner }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &Arc<P> {
        &self.inner
    }

    /// Produce the tile at `(col, row)` for `zoom`, or [`Tile::NO_TILE`].
    ///
    /// Must be called within a tokio runtime.
    pub async fn get_tile(&self, col: u32, row: u32, zoom: u8) -> Tile {
        let inner = Arc::clone(&self.inner);
        match tokio::task::spawn_blocking(move || inner.get_tile(col, row, zoom)).await {
            Ok(tile) => tile,
            Err(e) => {
                error!(col, row, zoom, error = %e, "tile task failed");
                Tile::NO_TILE
            }
        }
    }
}
