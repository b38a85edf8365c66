//! # Store Handle
//!
//! Data directory configuration and the entry point to both repositories.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Store Layout                                   │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(data_dir) ← Configure file names                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::open(config) ← Create data dir                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data_dir>/                                                           │
//! │  ├── catalog.json       ◄── store.catalog()  (snapshot, full rewrite)  │
//! │  └── transactions.csv   ◄── store.ledger()   (append-only)             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use kasir_core::{next_transaction_id, Catalog, PaidSale, Receipt};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::repository::catalog::CatalogRepository;
use crate::repository::ledger::LedgerRepository;

/// Default catalog file name.
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// Default ledger file name.
pub const DEFAULT_LEDGER_FILE: &str = "transactions.csv";

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use kasir_store::StoreConfig;
///
/// let config = StoreConfig::new("./data").ledger_file("sales.csv");
/// assert!(config.ledger_path().ends_with("sales.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding both files. Created on open.
    pub data_dir: PathBuf,

    /// Catalog file name inside `data_dir`.
    /// Default: `catalog.json`
    pub catalog_file: String,

    /// Ledger file name inside `data_dir`.
    /// Default: `transactions.csv`
    pub ledger_file: String,
}

impl StoreConfig {
    /// Creates a configuration with default file names.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            catalog_file: DEFAULT_CATALOG_FILE.to_string(),
            ledger_file: DEFAULT_LEDGER_FILE.to_string(),
        }
    }

    /// Sets the catalog file name.
    pub fn catalog_file(mut self, name: impl Into<String>) -> Self {
        self.catalog_file = name.into();
        self
    }

    /// Sets the ledger file name.
    pub fn ledger_file(mut self, name: impl Into<String>) -> Self {
        self.ledger_file = name.into();
        self
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(&self.ledger_file)
    }
}

// =============================================================================
// Store
// =============================================================================

/// Handle providing repository access over one data directory.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    /// Opens the store, creating the data directory if needed.
    ///
    /// The files themselves are created lazily: the catalog on first load,
    /// the ledger on first read or append.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(data_dir = %config.data_dir.display(), "Opening store");

        fs::create_dir_all(&config.data_dir).map_err(|e| StoreError::io(&config.data_dir, e))?;

        Ok(Store { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the catalog repository.
    pub fn catalog(&self) -> CatalogRepository {
        CatalogRepository::new(self.config.catalog_path())
    }

    /// Returns the ledger repository.
    pub fn ledger(&self) -> LedgerRepository {
        LedgerRepository::new(self.config.ledger_path())
    }

    /// Commits a paid sale.
    ///
    /// ## What This Does
    /// ```text
    /// 1. next id  ── TRX + YYYYMMDDHHMMSS (+ -NN if the second is taken)
    /// 2. withdraw ── on a copy of the catalog; fails if stock shrank
    /// 3. ledger   ── header if needed, one row per cart line
    /// 4. catalog  ── full snapshot with the new stock
    /// 5. swap     ── caller's catalog replaced by the saved copy
    /// ```
    ///
    /// If any step fails the caller's `catalog` is left untouched. A failure
    /// in step 4 leaves the ledger rows written; there is no rollback.
    pub fn commit_sale(
        &self,
        catalog: &mut Catalog,
        sale: PaidSale,
        now: NaiveDateTime,
    ) -> StoreResult<Receipt> {
        let ledger = self.ledger();
        let last_id = ledger.last_transaction_id()?;
        let transaction_id = next_transaction_id(now, last_id.as_deref());

        let mut updated = catalog.clone();
        let receipt = sale.commit(&mut updated, transaction_id, now)?;

        ledger.append(&receipt.transaction.ledger_rows())?;
        self.catalog().save(&updated)?;
        *catalog = updated;

        info!(
            transaction_id = %receipt.transaction.transaction_id,
            lines = receipt.transaction.lines.len(),
            total = %receipt.transaction.total,
            change = %receipt.change,
            "Sale committed"
        );

        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
