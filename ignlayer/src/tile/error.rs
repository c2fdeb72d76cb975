//! Error types for tile resolution.

use thiserror::Error;

use crate::provider::ProviderError;

use super::TileKey;

/// Errors that can prevent a tile from being produced.
///
/// Every variant is recovered locally: the affected tile (and any composite
/// that depends on it) resolves to no tile, and the next request for the same
/// key starts over because failures are never cached.
#[derive(Debug, Error)]
pub enum TileError {
    /// Upstream fetch failed (connection, timeout, or non-success status).
    #[error("Network error: {0}")]
    Network(#[from] ProviderError),

    /// Bytes could not be parsed as an image.
    #[error("Decode error: {0}")]
    Decode(#[source] image::ImageError),

    /// An image could not be encoded.
    #[error("Encode error: {0}")]
    Encode(String),

    /// A tile at zoom 0 was asked for its parent.
    #[error("{0} has no parent tile")]
    NoParent(TileKey),

    /// Cache read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
