//! # Report Commands
//!
//! Menu options 6 (transaction history) and 7 (revenue summary). Both read
//! the ledger from disk each time; nothing is cached.

use std::io::{BufRead, Write};

use kasir_core::TIMESTAMP_FORMAT;
use tracing::debug;

use crate::console::Prompter;
use crate::error::AppResult;
use crate::state::AppState;

/// Menu option 6. Shows the last `history_limit` ledger rows, oldest first.
pub fn show_history<R: BufRead, W: Write>(
    state: &AppState,
    p: &mut Prompter<R, W>,
) -> AppResult<()> {
    let rows = state.store.ledger().recent(state.config.history_limit)?;
    if rows.is_empty() {
        return p.warn("No transactions yet.");
    }

    p.title("TRANSACTION HISTORY")?;
    for row in &rows {
        writeln!(
            p.out(),
            "{} {} {:<10} x{:<4} {:>12}",
            row.timestamp.format(TIMESTAMP_FORMAT),
            row.transaction_id,
            row.code,
            row.quantity,
            state.config.format_amount(row.subtotal)
        )?;
    }
    Ok(())
}

/// Menu option 7.
pub fn show_revenue<R: BufRead, W: Write>(
    state: &AppState,
    p: &mut Prompter<R, W>,
) -> AppResult<()> {
    let summary = state.store.ledger().aggregate()?;
    debug!(
        transactions = summary.transaction_count,
        revenue = %summary.total_revenue,
        "Revenue aggregated"
    );

    p.title("REVENUE SUMMARY")?;
    writeln!(p.out(), "Transactions  : {}", summary.transaction_count)?;
    writeln!(
        p.out(),
        "Total revenue : {}",
        state.config.format_currency(summary.total_revenue)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use kasir_core::{LedgerRow, Money};
    use tempfile::TempDir;

    fn at(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, minute, 0)
            .unwrap()
    }

    fn row(minute: u32, id: &str, code: &str, subtotal: i64, total: i64) -> LedgerRow {
        LedgerRow {
            timestamp: at(minute),
            transaction_id: id.to_string(),
            code: code.to_string(),
            name: code.to_string(),
            quantity: 1,
            unit_price: Money::from_major(subtotal),
            subtotal: Money::from_major(subtotal),
            transaction_total: Money::from_major(total),
        }
    }

    #[test]
    fn test_history_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let state = empty_state(&dir);
        let mut p = scripted("");

        show_history(&state, &mut p).unwrap();

        assert_eq!(output(p), "[!] No transactions yet.\n");
    }

    #[test]
    fn test_history_shows_last_rows_only() {
        let dir = TempDir::new().unwrap();
        let mut state = empty_state(&dir);
        state.config.history_limit = 2;
        state
            .store
            .ledger()
            .append(&[
                row(1, "TRX20261018090100", "A1", 1000, 1000),
                row(2, "TRX20261018090200", "B2", 2000, 5000),
                row(2, "TRX20261018090200", "C3", 3000, 5000),
            ])
            .unwrap();
        let mut p = scripted("");

        show_history(&state, &mut p).unwrap();

        let out = output(p);
        assert!(!out.contains("TRX20261018090100"));
        assert!(out.contains("2026-10-18 09:02:00 TRX20261018090200 B2"));
        assert!(out.contains("3.000"));
        assert_eq!(out.matches("TRX20261018090200").count(), 2);
    }

    #[test]
    fn test_revenue_counts_each_transaction_once() {
        let dir = TempDir::new().unwrap();
        let state = empty_state(&dir);
        state
            .store
            .ledger()
            .append(&[
                row(1, "TRX1", "A1", 3, 10),
                row(1, "TRX1", "B2", 3, 10),
                row(1, "TRX1", "C3", 4, 10),
            ])
            .unwrap();
        let mut p = scripted("");

        show_revenue(&state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("Transactions  : 1"));
        assert!(out.contains("Total revenue : Rp10"));
    }

    #[test]
    fn test_revenue_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let state = empty_state(&dir);
        let mut p = scripted("");

        show_revenue(&state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("Transactions  : 0"));
        assert!(out.contains("Total revenue : Rp0"));
    }
}
