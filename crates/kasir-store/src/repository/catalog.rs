//! # Catalog Repository
//!
//! Loads and saves the item catalog as a pretty-printed JSON array.
//!
//! ## File Format
//! ```json
//! [
//!   {
//!     "code": "A1",
//!     "name": "Pen",
//!     "price": 2000.0,
//!     "stock": 10
//!   }
//! ]
//! ```
//!
//! ## Snapshot Semantics
//! ```text
//! save(&catalog)
//!      │
//!      ▼
//! catalog.json.tmp  ← full catalog written + flushed
//!      │
//!      ▼  rename
//! catalog.json      ← replaced in one step; never half-written
//! ```

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use kasir_core::Catalog;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// Repository for the catalog file.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    path: PathBuf,
}

impl CatalogRepository {
    /// Creates a repository over `path`. Nothing is touched until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CatalogRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the catalog.
    ///
    /// A missing file is not an error: an empty catalog is written and
    /// returned.
    pub fn load(&self) -> StoreResult<Catalog> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Catalog file missing, creating empty catalog");
            let empty = Catalog::new();
            self.save(&empty)?;
            return Ok(empty);
        }

        let file = File::open(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let catalog: Catalog = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StoreError::catalog(&self.path, e))?;

        debug!(path = %self.path.display(), items = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Writes the whole catalog, replacing the previous file.
    pub fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        let tmp_path = self.path.with_extension("json.tmp");

        {
            let file = File::create(&tmp_path).map_err(|e| StoreError::io(&tmp_path, e))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, catalog)
                .map_err(|e| StoreError::catalog(&tmp_path, e))?;
            writer
                .write_all(b"\n")
                .and_then(|_| writer.flush())
                .map_err(|e| StoreError::io(&tmp_path, e))?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), items = catalog.len(), "Catalog saved");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kasir_core::{Item, Money};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty_and_creates_it() {
        let dir = TempDir::new().unwrap();
        let repo = CatalogRepository::new(dir.path().join("catalog.json"));

        let catalog = repo.load().unwrap();

        assert!(catalog.is_empty());
        assert!(repo.path().exists());
        assert_eq!(fs::read_to_string(repo.path()).unwrap().trim(), "[]");
    }

    #[test]
    fn test_add_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let repo = CatalogRepository::new(dir.path().join("catalog.json"));

        let mut catalog = repo.load().unwrap();
        catalog.add("A1", "Pen", Money::from_major(2000), 10).unwrap();
        repo.save(&catalog).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.items(), &[Item::new("A1", "Pen", Money::from_major(2000), 10)]);
    }

    #[test]
    fn test_save_preserves_order_and_fractional_prices() {
        let dir = TempDir::new().unwrap();
        let repo = CatalogRepository::new(dir.path().join("catalog.json"));

        let mut catalog = Catalog::new();
        catalog.add("Z9", "Zipper", Money::from_minor(1_200_050), 1).unwrap();
        catalog.add("A1", "Pen", Money::from_major(2000), 0).unwrap();
        repo.save(&catalog).unwrap();

        assert_eq!(repo.load().unwrap(), catalog);
        assert!(!dir.path().join("catalog.json.tmp").exists());
    }

    #[test]
    fn test_reads_plain_number_prices() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"code": "K01", "name": "Kopi", "price": 3500, "stock": 4}]"#,
        )
        .unwrap();

        let catalog = CatalogRepository::new(&path).load().unwrap();
        assert_eq!(catalog.find_by_code("k01").unwrap().price, Money::from_major(3500));
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{ not json").unwrap();

        let err = CatalogRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Catalog { .. }));
    }
}
