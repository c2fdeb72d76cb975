//! Cache record naming.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::tile::TileKey;

/// Rendering of a tile stored in the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileVariant {
    /// The tile as served to normal-density displays
    #[default]
    Standard,
    /// 512 px composite served to high-density displays
    HighDensity,
}

/// Identity of one cache record.
///
/// The high-density composite at the lower native level and the plain tile
/// at the same key are different images, so they are stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub key: TileKey,
    pub variant: TileVariant,
}

impl CacheKey {
    /// Standard variant of `key`.
    pub fn standard(key: TileKey) -> Self {
        Self {
            key,
            variant: TileVariant::Standard,
        }
    }

    /// High-density variant of `key`.
    pub fn high_density(key: TileKey) -> Self {
        Self {
            key,
            variant: TileVariant::HighDensity,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cache_file_name(self))
    }
}

/// File name of a cache record.
///
/// ```text
/// [ortho-]z{zoom}[_hr]-r{row}-c{col}.jpg
/// ```
///
/// # Example
///
/// ```
/// use ignlayer::cache::{cache_file_name, CacheKey};
/// use ignlayer::tile::{LayerKind, TileKey};
///
/// let key = TileKey::new(LayerKind::Aerial, 543, 370, 15);
/// assert_eq!(cache_file_name(&CacheKey::standard(key)), "ortho-z15-r370-c543.jpg");
/// assert_eq!(cache_file_name(&CacheKey::high_density(key)), "ortho-z15_hr-r370-c543.jpg");
/// ```
pub fn cache_file_name(cache_key: &CacheKey) -> String {
    let key = &cache_key.key;
    let suffix = match cache_key.variant {
        TileVariant::Standard => "",
        TileVariant::HighDensity => "_hr",
    };
    format!(
        "{}z{}{}-r{}-c{}.jpg",
        key.layer().cache_prefix(),
        key.zoom(),
        suffix,
        key.row(),
        key.col()
    )
}

/// Full path of a cache record inside `cache_dir`.
pub fn cache_path(cache_dir: &Path, cache_key: &CacheKey) -> PathBuf {
    cache_dir.join(cache_file_name(cache_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::LayerKind;

    #[test]
    fn test_standard_layer_name() {
        let key = TileKey::new(LayerKind::Standard, 543, 370, 16);
        assert_eq!(cache_file_name(&CacheKey::standard(key)), "z16-r370-c543.jpg");
    }

    #[test]
    fn test_high_density_name() {
        let key = TileKey::new(LayerKind::Standard, 271, 185, 15);
        assert_eq!(
            cache_file_name(&CacheKey::high_density(key)),
            "z15_hr-r185-c271.jpg"
        );
    }

    #[test]
    fn test_names_are_distinct_per_identity() {
        let key = TileKey::new(LayerKind::Standard, 1, 2, 15);
        let names = [
            cache_file_name(&CacheKey::standard(key)),
            cache_file_name(&CacheKey::high_density(key)),
            cache_file_name(&CacheKey::standard(TileKey::new(LayerKind::Aerial, 1, 2, 15))),
            cache_file_name(&CacheKey::standard(TileKey::new(LayerKind::Standard, 2, 1, 15))),
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_cache_path_is_flat() {
        let key = CacheKey::standard(TileKey::new(LayerKind::Standard, 3, 4, 14));
        assert_eq!(
            cache_path(Path::new("/cache"), &key),
            PathBuf::from("/cache/z14-r4-c3.jpg")
        );
        assert_eq!(key.to_string(), "z14-r4-c3.jpg");
    }
}
