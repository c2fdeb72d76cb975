//! Settings structs for each configuration section.

use std::path::PathBuf;
use std::time::Duration;

use crate::provider::{DEFAULT_HOST, DEFAULT_REFERER};
use crate::pyramid::{PyramidLevels, DEFAULT_MIN_ZOOM, DEFAULT_NATIVE_ZOOM};
use crate::tile::LayerKind;

pub use crate::pyramid::MAX_ZOOM_OUT_LEVELS;

/// Default fetch timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default display density.
pub const DEFAULT_DPI: u32 = 160;

/// Display density from which 512 px tiles are served.
pub const HIGH_DENSITY_DPI: u32 = 480;


/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFile {
    /// Upstream WMTS settings
    pub provider: ProviderSettings,
    /// Disk cache settings
    pub cache: CacheSettings,
    /// Display settings
    pub display: DisplaySettings,
    /// Pyramid zoom range
    pub pyramid: PyramidSettings,
}

/// `[provider]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Géoportail API key; required to fetch tiles
    pub api_key: Option<String>,
    /// Map layer to serve
    pub layer: LayerKind,
    /// WMTS host
    pub host: String,
    /// `Referer` header value
    pub referer: String,
    /// Fetch timeout in seconds, 0 for none
    pub timeout: u64,
}

impl ProviderSettings {
    /// Fetch timeout, `None` when disabled.
    pub fn timeout_duration(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            layer: LayerKind::Standard,
            host: DEFAULT_HOST.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `[cache]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// Directory holding one file per cached tile
    pub directory: PathBuf,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            directory: default_cache_directory(),
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Display density in dots per inch
    pub dpi: u32,
}

impl DisplaySettings {
    /// Whether the display gets 512 px tiles.
    pub fn high_density(&self) -> bool {
        self.dpi >= HIGH_DENSITY_DPI
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI }
    }
}

/// `[pyramid]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyramidSettings {
    /// Lower native zoom level
    pub native_zoom: u8,
    /// Lowest synthesized zoom level
    pub min_zoom: u8,
}

impl PyramidSettings {
    pub fn levels(&self) -> PyramidLevels {
        PyramidLevels::new(self.native_zoom, self.min_zoom)
    }
}

impl Default for PyramidSettings {
    fn default() -> Self {
        Self {
            native_zoom: DEFAULT_NATIVE_ZOOM,
            min_zoom: DEFAULT_MIN_ZOOM,
        }
    }
}

/// Platform cache directory for tiles (`~/.cache/ignlayer` on Linux).
pub fn default_cache_directory() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ignlayer")
}
