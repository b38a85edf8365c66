//! # kasir-store: File Storage Layer for Kasir POS
//!
//! This crate provides file access for the Kasir POS system: a JSON catalog
//! rewritten in full on every save, and an append-only CSV ledger.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir POS Data Flow                              │
//! │                                                                         │
//! │  Menu action (sale, add item, report)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     kasir-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────────────────────┐   │   │
//! │  │   │    Store      │    │  Repositories                      │   │   │
//! │  │   │  (store.rs)   │───►│  CatalogRepository (catalog.json)  │   │   │
//! │  │   │  commit_sale  │    │  LedgerRepository  (transactions)  │   │   │
//! │  │   └───────────────┘    └───────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data_dir>/catalog.json, <data_dir>/transactions.csv                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Data directory configuration and the `Store` handle
//! - [`error`] - Store error types
//! - [`repository`] - Catalog and ledger repositories
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kasir_store::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::new("./data"))?;
//! let catalog = store.catalog().load()?;
//! let summary = store.ledger().aggregate()?;
//! println!("{} items, {} transactions", catalog.len(), summary.transaction_count);
//! # Ok::<(), kasir_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreConfig, DEFAULT_CATALOG_FILE, DEFAULT_LEDGER_FILE};

// Repository re-exports for convenience
pub use repository::catalog::CatalogRepository;
pub use repository::ledger::LedgerRepository;
