//! # Domain Types
//!
//! Core domain types used throughout Kasir POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    CartLine     │   │   Transaction   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (unique)  │──►│  code           │──►│  transaction_id │       │
//! │  │  name           │   │  name  (frozen) │   │  timestamp      │       │
//! │  │  price          │   │  unit_price     │   │  lines          │       │
//! │  │  stock          │   │  quantity       │   │  total          │       │
//! │  └─────────────────┘   └─────────────────┘   └────────┬────────┘       │
//! │                                                       │ one per line   │
//! │                                              ┌────────▼────────┐       │
//! │                                              │    LedgerRow    │       │
//! │                                              │  (CSV record)   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Format of ledger timestamps, e.g. `2026-10-18 14:03:59`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Item
// =============================================================================

/// A sellable item in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Business identifier, unique case-insensitively.
    pub code: String,

    /// Display name shown to the cashier.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Units on hand. Never negative.
    pub stock: i64,
}

impl Item {
    /// Creates a new item.
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money, stock: i64) -> Self {
        Item {
            code: code.into(),
            name: name.into(),
            price,
            stock,
        }
    }

    /// Case-insensitive exact match on the item code.
    pub fn has_code(&self, code: &str) -> bool {
        self.code.trim().eq_ignore_ascii_case(code.trim())
    }

    /// Case-insensitive substring match on code or name.
    ///
    /// `keyword` must already be lowercased.
    pub(crate) fn matches_keyword(&self, keyword: &str) -> bool {
        self.code.to_lowercase().contains(keyword) || self.name.to_lowercase().contains(keyword)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the cart being built.
/// Uses snapshot pattern to freeze item data at the moment it was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Item code (frozen).
    pub code: String,
    /// Item name (frozen).
    pub name: String,
    /// Quantity, always >= 1.
    pub quantity: i64,
    /// Unit price at the time of adding (frozen).
    pub unit_price: Money,
}

impl CartLine {
    /// Creates a line from an item, freezing its code, name and price.
    pub fn from_item(item: &Item, quantity: i64) -> Self {
        CartLine {
            code: item.code.clone(),
            name: item.name.clone(),
            quantity,
            unit_price: item.price,
        }
    }

    /// Line total (unit price × quantity).
    ///
    /// Saturates on overflow; a [`crate::Cart`] never holds a line whose
    /// subtotal does not fit.
    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Line total, or `None` if it does not fit in [`Money`].
    pub fn checked_subtotal(&self) -> Option<Money> {
        self.unit_price.checked_multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A committed sale. Immutable once written to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub transaction_id: String,
    pub timestamp: NaiveDateTime,
    pub lines: Vec<CartLine>,
    pub total: Money,
}

impl Transaction {
    /// Expands the transaction into one ledger row per line.
    ///
    /// Every row repeats the id, timestamp and total of the transaction.
    pub fn ledger_rows(&self) -> Vec<LedgerRow> {
        self.lines
            .iter()
            .map(|line| LedgerRow {
                timestamp: self.timestamp,
                transaction_id: self.transaction_id.clone(),
                code: line.code.clone(),
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                subtotal: line.subtotal(),
                transaction_total: self.total,
            })
            .collect()
    }
}

// =============================================================================
// Ledger Row
// =============================================================================

/// One line of the append-only ledger file.
///
/// Field order is the column order of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub transaction_id: String,
    pub code: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub subtotal: Money,
    pub transaction_total: Money,
}

/// Column names, in file order.
pub const LEDGER_HEADER: [&str; 8] = [
    "timestamp",
    "transaction_id",
    "code",
    "name",
    "quantity",
    "unit_price",
    "subtotal",
    "transaction_total",
];

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_item_code_match_is_case_insensitive() {
        let item = Item::new("A1", "Pen", Money::from_major(2000), 10);
        assert!(item.has_code("a1"));
        assert!(item.has_code(" A1 "));
        assert!(!item.has_code("A"));
    }

    #[test]
    fn test_cart_line_snapshot() {
        let mut item = Item::new("A1", "Pen", Money::from_major(2000), 10);
        let line = CartLine::from_item(&item, 3);
        item.price = Money::from_major(9999);

        assert_eq!(line.unit_price, Money::from_major(2000));
        assert_eq!(line.subtotal(), Money::from_major(6000));
    }

    #[test]
    fn test_ledger_rows_share_id_and_total() {
        let pen = Item::new("A1", "Pen", Money::from_major(2000), 10);
        let book = Item::new("B2", "Book", Money::from_major(5500), 4);
        let lines = vec![CartLine::from_item(&pen, 2), CartLine::from_item(&book, 1)];
        let trx = Transaction {
            transaction_id: "TRX20260131120000".to_string(),
            timestamp: noon(),
            total: lines.iter().map(CartLine::subtotal).sum(),
            lines,
        };

        let rows = trx.ledger_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.transaction_id == "TRX20260131120000"));
        assert!(rows.iter().all(|r| r.transaction_total == Money::from_major(9500)));
        assert_eq!(rows[1].subtotal, Money::from_major(5500));
    }
}
