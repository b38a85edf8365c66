//! # kasir-core: Pure Business Logic for Kasir POS
//!
//! This crate is the **heart** of Kasir POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/cli)                           │   │
//! │  │    Menu ──► Item forms ──► Sale prompts ──► Reports             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kasir-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │  ledger   │  │   │
//! │  │   │  Catalog  │  │   Money   │  │   Cart    │  │ Revenue   │  │   │
//! │  │   │   Item    │  │ rounding  │  │ PaidSale  │  │ TRX ids   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kasir-store (File Layer)                     │   │
//! │  │              catalog.json, transactions.csv                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, CartLine, Transaction, LedgerRow)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Item lookup, add, price/stock updates, search
//! - [`cart`] - The sale state machine
//! - [`ledger`] - Revenue summary and transaction identifiers
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::{Cart, Catalog, Money};
//!
//! let mut catalog = Catalog::new();
//! catalog.add("A1", "Pen", Money::from_major(2000), 5).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_line(catalog.find_by_code("a1").unwrap(), 3).unwrap();
//!
//! let pending = cart.checkout().unwrap();
//! assert_eq!(pending.change_for(Money::from_major(10_000)).unwrap(), Money::from_major(4000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, PaidSale, PendingPayment, Receipt};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{next_transaction_id, RevenueSummary};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix of every transaction identifier.
pub const TRANSACTION_ID_PREFIX: &str = "TRX";
