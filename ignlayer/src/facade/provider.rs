//! Synchronous tile provider backed by the pyramid synthesizer.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use super::{Tile, TileProvider};
use crate::cache::DiskTileStore;
use crate::config::ConfigFile;
use crate::provider::{ProviderError, ReqwestClient, WmtsConfig, WmtsProvider};
use crate::pyramid::{PyramidStatsSnapshot, TilePyramidSynthesizer};
use crate::tile::{LayerKind, TileKey};

/// Errors raised while wiring a provider from configuration.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The upstream provider could not be configured.
    #[error("Provider setup failed: {0}")]
    Provider(#[from] ProviderError),

    /// The cache directory could not be created.
    #[error("Cannot open tile cache at {path}: {source}")]
    Cache {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Tile provider for one map layer.
pub struct IgnTileProvider {
    layer: LayerKind,
    synthesizer: Arc<TilePyramidSynthesizer>,
}

impl IgnTileProvider {
    /// Serve `layer` through an existing synthesizer.
    pub fn new(synthesizer: Arc<TilePyramidSynthesizer>, layer: LayerKind) -> Self {
        Self { layer, synthesizer }
    }

    /// Build the full stack from configuration: HTTP client, WMTS source,
    /// disk store, and synthesizer.
    ///
    /// # Errors
    ///
    /// Fails if the API key is missing, the HTTP client cannot be built, or
    /// the cache directory cannot be created.
    pub fn from_config(config: &ConfigFile) -> Result<Self, SetupError> {
        let api_key = config.provider.api_key.clone().ok_or_else(|| {
            ProviderError::InvalidConfig("provider.api_key is not set".to_string())
        })?;

        let client = ReqwestClient::with_timeout(config.provider.timeout_duration())?;
        let wmts = WmtsConfig::new(api_key)
            .with_host(config.provider.host.clone())
            .with_referer(config.provider.referer.clone())
            .with_native_zoom(config.pyramid.native_zoom);
        let source = WmtsProvider::new(client, wmts)?;

        let directory = config.cache.directory.clone();
        let store = DiskTileStore::new(&directory).map_err(|source| SetupError::Cache {
            path: directory.clone(),
            source,
        })?;

        let levels = config.pyramid.levels();
        let high_density = config.display.high_density();
        info!(
            layer = %config.provider.layer,
            cache = %directory.display(),
            min_zoom = levels.min_zoom(),
            max_zoom = levels.max_zoom(),
            high_density,
            "tile provider ready"
        );

        let synthesizer =
            TilePyramidSynthesizer::new(Arc::new(source), Arc::new(store), levels, high_density);
        Ok(Self::new(Arc::new(synthesizer), config.provider.layer))
    }

    /// Layer served.
    pub fn layer(&self) -> LayerKind {
        self.layer
    }

    /// The synthesizer behind this provider.
    pub fn synthesizer(&self) -> &Arc<TilePyramidSynthesizer> {
        &self.synthesizer
    }

    /// Synthesis counters.
    pub fn stats(&self) -> PyramidStatsSnapshot {
        self.synthesizer.stats()
    }
}

impl TileProvider for IgnTileProvider {
    fn get_tile(&self, col: u32, row: u32, zoom: u8) -> Tile {
        let key = TileKey::new(self.layer, col, row, zoom);
        match self.synthesizer.resolve(&key) {
            Ok(image) => image.into(),
            Err(e) => {
                warn!(key = %key, error = %e, "no tile");
                Tile::NO_TILE
            }
        }
    }
}
