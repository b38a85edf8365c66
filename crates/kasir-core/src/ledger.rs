//! # Ledger Math
//!
//! Pure functions over ledger rows: revenue summary, recent history, and
//! transaction identifiers.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::money::Money;
use crate::types::LedgerRow;
use crate::TRANSACTION_ID_PREFIX;

// =============================================================================
// Revenue Summary
// =============================================================================

/// Aggregate figures over the whole ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevenueSummary {
    /// Number of distinct transaction ids.
    pub transaction_count: usize,
    /// Sum of each transaction's total, counted once per transaction.
    pub total_revenue: Money,
}

impl RevenueSummary {
    /// Aggregates the ledger.
    ///
    /// Every row of a transaction repeats the same `transaction_total`, so
    /// the total is taken from the first row seen for each id only.
    ///
    /// ```text
    /// TRX1  A1  total 10   ──► counted
    /// TRX1  B2  total 10   ──► skipped (same id)
    /// TRX1  C3  total 10   ──► skipped
    /// TRX2  A1  total 25   ──► counted
    ///                          = 2 transactions, revenue 35
    /// ```
    pub fn from_rows(rows: &[LedgerRow]) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut total_revenue = Money::zero();

        for row in rows {
            if seen.insert(row.transaction_id.as_str()) {
                total_revenue += row.transaction_total;
            }
        }

        RevenueSummary {
            transaction_count: seen.len(),
            total_revenue,
        }
    }
}

/// The last `n` rows, oldest first.
pub fn recent(rows: &[LedgerRow], n: usize) -> &[LedgerRow] {
    &rows[rows.len().saturating_sub(n)..]
}

// =============================================================================
// Transaction Identifiers
// =============================================================================

/// Builds the identifier for a transaction committed at `now`.
///
/// ## Format
/// `TRX` + `YYYYMMDDHHMMSS`, e.g. `TRX20261018093000`.
///
/// When `last_id` (the newest id in the ledger) was issued in the same
/// second, a two-digit sequence is appended so ids stay unique and still
/// sort in commit order:
///
/// ```text
/// TRX20261018093000      first in that second
/// TRX20261018093000-02   second
/// TRX20261018093000-03   third
/// TRX20261018093001      next second
/// ```
///
/// The sequence is at least two digits wide, so ids within one second sort
/// as text only up to `-99`; `-100` sorts before `-99`. Ledger order, not id
/// order, is the commit order.
pub fn next_transaction_id(now: NaiveDateTime, last_id: Option<&str>) -> String {
    let base = format!("{}{}", TRANSACTION_ID_PREFIX, now.format("%Y%m%d%H%M%S"));

    let previous_seq = last_id.and_then(|last| {
        let rest = last.strip_prefix(base.as_str())?;
        if rest.is_empty() {
            Some(1)
        } else {
            rest.strip_prefix('-')?.parse::<u32>().ok()
        }
    });

    match previous_seq {
        Some(seq) => format!("{}-{:02}", base, seq.saturating_add(1)),
        None => base,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
