//! Tile key types.
//!
//! Provides the `TileKey` type that identifies one tile of the pyramid for
//! caching, locking, and fetching.

use std::fmt;
use std::str::FromStr;

/// Map layer served by the upstream WMTS service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayerKind {
    /// Standard topographic map scans
    #[default]
    Standard,
    /// Aerial orthophotography
    Aerial,
}

impl LayerKind {
    /// WMTS `LAYER` parameter value for this layer.
    pub fn code(&self) -> &'static str {
        match self {
            LayerKind::Standard => "GEOGRAPHICALGRIDSYSTEMS.MAPS",
            LayerKind::Aerial => "ORTHOIMAGERY.ORTHOPHOTOS",
        }
    }

    /// Configuration name of this layer.
    pub fn name(&self) -> &'static str {
        match self {
            LayerKind::Standard => "standard",
            LayerKind::Aerial => "aerial",
        }
    }

    /// Prefix used in cache file names.
    pub(crate) fn cache_prefix(&self) -> &'static str {
        match self {
            LayerKind::Standard => "",
            LayerKind::Aerial => "ortho-",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "map" | "maps" => Ok(LayerKind::Standard),
            "aerial" | "ortho" | "orthophoto" => Ok(LayerKind::Aerial),
            other => Err(format!("unknown layer '{}'", other)),
        }
    }
}

/// Identity of one tile in the pyramid.
///
/// Two keys are equal iff layer, zoom, column, and row are all equal.
///
/// # Note
///
/// Column and row are unsigned indices in the WMTS `PM` tile matrix:
/// - Column increases eastward
/// - Row increases southward
///
/// # Example
///
/// ```
/// use ignlayer::tile::{LayerKind, TileKey};
///
/// let key = TileKey::new(LayerKind::Standard, 543, 370, 16);
/// assert_eq!(key.col(), 543);
/// assert_eq!(key.row(), 370);
/// assert_eq!(key.zoom(), 16);
/// assert_eq!(key.to_string(), "z16-r370-c543");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    layer: LayerKind,
    zoom: u8,
    col: u32,
    row: u32,
}

impl TileKey {
    /// Create a new tile key.
    ///
    /// # Arguments
    ///
    /// * `layer` - Map layer
    /// * `col` - Tile column
    /// * `row` - Tile row
    /// * `zoom` - Zoom level
    pub fn new(layer: LayerKind, col: u32, row: u32, zoom: u8) -> Self {
        Self {
            layer,
            zoom,
            col,
            row,
        }
    }

    /// Get the map layer.
    pub fn layer(&self) -> LayerKind {
        self.layer
    }

    /// Get the zoom level.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Get the tile column.
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Get the tile row.
    pub fn row(&self) -> u32 {
        self.row
    }

    /// The four tiles one zoom level deeper that cover this tile.
    ///
    /// Returned in row-major order: top-left, top-right, bottom-left,
    /// bottom-right.
    pub fn children(&self) -> [TileKey; 4] {
        let zoom = self.zoom + 1;
        let (c, r) = (self.col * 2, self.row * 2);
        [
            TileKey::new(self.layer, c, r, zoom),
            TileKey::new(self.layer, c + 1, r, zoom),
            TileKey::new(self.layer, c, r + 1, zoom),
            TileKey::new(self.layer, c + 1, r + 1, zoom),
        ]
    }

    /// The tile one zoom level up that contains this tile.
    ///
    /// Returns `None` at zoom 0.
    pub fn parent(&self) -> Option<TileKey> {
        let zoom = self.zoom.checked_sub(1)?;
        Some(TileKey::new(self.layer, self.col / 2, self.row / 2, zoom))
    }

    /// Position of this tile inside its parent as `(col % 2, row % 2)`.
    pub fn quadrant(&self) -> (u32, u32) {
        (self.col % 2, self.row % 2)
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}z{}-r{}-c{}",
            self.layer.cache_prefix(),
            self.zoom,
            self.row,
            self.col
        )
    }
}
