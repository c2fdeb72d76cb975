//! Provider traits and errors.

use thiserror::Error;

use crate::tile::TileKey;

/// Errors raised while fetching a tile from the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Connection failure, timeout, or non-success HTTP status.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The requested zoom level has no upstream imagery.
    #[error("Unsupported zoom level: {0}")]
    UnsupportedZoom(u8),

    /// Provider configuration is incomplete.
    #[error("Invalid provider configuration: {0}")]
    InvalidConfig(String),
}

/// Source of native-level tile imagery.
///
/// Implementations must be thread-safe: the pyramid synthesizer calls
/// `fetch` from whichever host thread is resolving a tile.
pub trait TileSource: Send + Sync {
    /// Download the encoded image for a native-level tile.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::UnsupportedZoom` when `key` is not at a native
    /// zoom level, or `ProviderError::HttpError` when the request fails.
    fn fetch(&self, key: &TileKey) -> Result<Vec<u8>, ProviderError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this source has imagery at `zoom`.
    fn supports_zoom(&self, zoom: u8) -> bool;
}
