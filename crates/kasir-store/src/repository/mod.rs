//! # Repository Module
//!
//! File repository implementations for Kasir POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Menu action                                                           │
//! │       │                                                                 │
//! │       │  store.catalog().save(&catalog)                                │
//! │       │  store.ledger().recent(10)                                     │
//! │       ▼                                                                 │
//! │  CatalogRepository            LedgerRepository                         │
//! │  ├── load()                   ├── ensure_initialized()                 │
//! │  └── save(&catalog)           ├── append(&rows)                        │
//! │                               ├── read_all() / recent(n)               │
//! │                               └── aggregate()                          │
//! │       │                              │                                  │
//! │       ▼                              ▼                                  │
//! │  catalog.json                 transactions.csv                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`catalog::CatalogRepository`] - Catalog snapshot load/save
//! - [`ledger::LedgerRepository`] - Append-only sale ledger

pub mod catalog;
pub mod ledger;
