//! Persistent tile store.
//!
//! Records are plain files in a single flat directory, named by
//! [`cache_file_name`](super::cache_file_name). A record is written once and
//! never invalidated, so the store survives restarts and grows without bound.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::path::{cache_path, CacheKey};

/// Aggregate size of a tile store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of cache records.
    pub records: u64,
    /// Total size of all records in bytes.
    pub bytes: u64,
}

impl fmt::Display for StoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tiles, {} bytes", self.records, self.bytes)
    }
}

/// Keyed storage for encoded tile images.
///
/// Implementations perform no locking: callers hold the tile key's lock for
/// the duration of any check-then-write sequence. Implementations must be
/// `Send + Sync` because the pyramid resolves tiles on many host threads.
pub trait TileStore: Send + Sync {
    /// Whether a record exists for `key`.
    fn exists(&self, key: &CacheKey) -> bool;

    /// Read the full contents of the record for `key`.
    fn read(&self, key: &CacheKey) -> io::Result<Vec<u8>>;

    /// Create the record for `key`.
    ///
    /// Records are write-once: callers write a key only after `exists`
    /// reported a miss while holding the key's lock.
    fn write(&self, key: &CacheKey, data: &[u8]) -> io::Result<()>;
}

/// Tile store backed by a directory on the local file system.
#[derive(Debug, Clone)]
pub struct DiskTileStore {
    directory: PathBuf,
}

impl DiskTileStore {
    /// Open a store rooted at `directory`, creating the directory if needed.
    pub fn new(directory: impl Into<PathBuf>) -> io::Result<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;
        Ok(Self { directory })
    }

    /// Root directory of the store.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the record for `key`.
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        cache_path(&self.directory, key)
    }

    /// Count records and total bytes currently in the store.
    ///
    /// Leftover temporary files from interrupted writes are not counted.
    pub fn stats(&self) -> io::Result<StoreStats> {
        let mut stats = StoreStats::default();
        for entry in fs::read_dir(&self.directory)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("jpg") {
                continue;
            }
            let metadata = entry.metadata()?;
            if metadata.is_file() {
                stats.records += 1;
                stats.bytes += metadata.len();
            }
        }
        Ok(stats)
    }
}

impl TileStore for DiskTileStore {
    fn exists(&self, key: &CacheKey) -> bool {
        self.path_for(key).is_file()
    }

    fn read(&self, key: &CacheKey) -> io::Result<Vec<u8>> {
        fs::read(self.path_for(key))
    }

    fn write(&self, key: &CacheKey, data: &[u8]) -> io::Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("jpg.tmp");

        // Rename is atomic on the same file system; a crash mid-write leaves
        // only the temporary file behind.
        fs::write(&tmp, data)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        debug!(record = %key, bytes = data.len(), "tile stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{LayerKind, TileKey};
    use tempfile::TempDir;

    fn key(col: u32) -> CacheKey {
        CacheKey::standard(TileKey::new(LayerKind::Standard, col, 370, 16))
    }

    #[test]
    fn test_new_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("tiles");

        let store = DiskTileStore::new(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(store.directory(), dir.as_path());
    }

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let store = DiskTileStore::new(temp.path()).unwrap();

        assert!(!store.exists(&key(1)));
        store.write(&key(1), &[1, 2, 3]).unwrap();

        assert!(store.exists(&key(1)));
        assert_eq!(store.read(&key(1)).unwrap(), vec![1, 2, 3]);
        assert!(temp.path().join("z16-r370-c1.jpg").is_file());
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let store = DiskTileStore::new(temp.path()).unwrap();
        store.write(&key(1), &[9; 64]).unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["z16-r370-c1.jpg".to_string()]);
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = DiskTileStore::new(temp.path()).unwrap();
        let err = store.read(&key(42)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_records_survive_reopen() {
        let temp = TempDir::new().unwrap();
        DiskTileStore::new(temp.path())
            .unwrap()
            .write(&key(5), &[7, 7, 7])
            .unwrap();

        let reopened = DiskTileStore::new(temp.path()).unwrap();
        assert_eq!(reopened.read(&key(5)).unwrap(), vec![7, 7, 7]);
    }

    #[test]
    fn test_variants_stored_separately() {
        let temp = TempDir::new().unwrap();
        let store = DiskTileStore::new(temp.path()).unwrap();
        let tile = TileKey::new(LayerKind::Standard, 10, 10, 15);

        store.write(&CacheKey::standard(tile), &[1]).unwrap();
        assert!(!store.exists(&CacheKey::high_density(tile)));

        store.write(&CacheKey::high_density(tile), &[2]).unwrap();
        assert_eq!(store.read(&CacheKey::standard(tile)).unwrap(), vec![1]);
        assert_eq!(store.read(&CacheKey::high_density(tile)).unwrap(), vec![2]);
    }

    #[test]
    fn test_stats() {
        let temp = TempDir::new().unwrap();
        let store = DiskTileStore::new(temp.path()).unwrap();
        assert_eq!(store.stats().unwrap(), StoreStats::default());

        store.write(&key(1), &[0; 10]).unwrap();
        store.write(&key(2), &[0; 5]).unwrap();
        fs::write(temp.path().join("z16-r370-c3.jpg.tmp"), [0; 100]).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.records, 2);
        assert_eq!(stats.bytes, 15);
        assert_eq!(stats.to_string(), "2 tiles, 15 bytes");
    }
}
