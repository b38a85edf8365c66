//! # Sale Command
//!
//! Menu option 5: build a cart, take payment, commit.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sale Flow                                            │
//! │                                                                         │
//! │  Item code (DONE to finish): A1                                        │
//! │  Pen | Price Rp5.000 | Stock 5      ◄── stock left for THIS cart       │
//! │  Qty: 3                                                                 │
//! │    + Pen x3 = Rp15.000                                                  │
//! │  Item code (DONE to finish): DONE                                      │
//! │       │                                                                 │
//! │       ├── cart empty ──► [!] Cart is empty, transaction cancelled      │
//! │       ▼                                                                 │
//! │  Total Rp15.000 | Pay: 20000        ◄── re-asked while below total     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.commit_sale ──► ledger rows + catalog.json                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [✓] Transaction TRX20261018093000 complete | Change Rp5.000           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is written until the payment is accepted. Closing stdin in the
//! middle of a sale drops the cart.

use std::io::{BufRead, Write};

use chrono::NaiveDateTime;
use kasir_core::Cart;
use tracing::{debug, warn};

use super::catalog::item_detail;
use crate::console::Prompter;
use crate::error::AppResult;
use crate::state::AppState;

/// Runs one sale. `clock` is read once, when the sale is committed.
pub fn process_sale<R: BufRead, W: Write>(
    state: &mut AppState,
    p: &mut Prompter<R, W>,
    clock: impl FnOnce() -> NaiveDateTime,
) -> AppResult<()> {
    p.title("SALE TRANSACTION")?;

    let config = &state.config;
    let code_prompt = format!("Item code ({} to finish): ", config.done_keyword);
    let mut cart = Cart::new();

    loop {
        let code = p.ask(&code_prompt)?.to_uppercase();
        if code == config.done_keyword {
            break;
        }

        let item = match state.catalog.find_by_code(&code) {
            Some(item) => item,
            None => {
                p.warn(format!("Item not found: {}", code))?;
                continue;
            }
        };
        writeln!(p.out(), "{}", item_detail(config, item, cart.available(item)))?;

        let quantity = p.int("Qty: ", "quantity", Some(1), None)?;
        match cart.add_line(item, quantity) {
            Ok(line) => {
                debug!(code = %line.code, quantity = line.quantity, "Cart line added");
                writeln!(
                    p.out(),
                    "  + {} x{} = {}",
                    line.name,
                    line.quantity,
                    config.format_currency(line.subtotal())
                )?;
            }
            Err(err) => {
                warn!(error = %err, "Cart line rejected");
                p.warn(err)?;
            }
        }
    }

    let pending = cart.checkout()?;

    let payment_prompt = format!("Total {} | Pay: ", config.format_currency(pending.total()));
    let payment = p.money(&payment_prompt, "payment", Some(pending.total()))?;
    let paid = pending.pay(payment)?;

    let receipt = state.store.commit_sale(&mut state.catalog, paid, clock())?;

    p.success(format!(
        "Transaction {} complete | Change {}",
        receipt.transaction.transaction_id,
        config.format_currency(receipt.change)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::testing::*;
    use chrono::NaiveDate;
    use kasir_core::Money;
    use tempfile::TempDir;

    fn at_0930() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_exact_payment_gives_zero_change() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let mut p = scripted("A1\n2\nb2\n2\nDONE\n15000\n");

        process_sale(&mut state, &mut p, at_0930).unwrap();

        let out = output(p);
        assert!(out.contains("Total Rp15.000 | Pay: "));
        assert!(out.contains("[✓] Transaction TRX20261018093000 complete | Change Rp0"));

        let rows = state.store.ledger().read_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.transaction_id == "TRX20261018093000"));
        assert!(rows.iter().all(|r| r.transaction_total == Money::from_major(15_000)));
        assert_eq!(rows[1].code, "B2");

        let on_disk = state.store.catalog().load().unwrap();
        assert_eq!(on_disk.find_by_code("A1").unwrap().stock, 3);
        assert_eq!(on_disk.find_by_code("B2").unwrap().stock, 8);
    }

    #[test]
    fn test_repeated_code_checked_against_remaining_stock() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let mut p = scripted("A1\n3\nA1\n3\nDONE\n20000\n");

        process_sale(&mut state, &mut p, at_0930).unwrap();

        let out = output(p);
        assert!(out.contains("Pen | Price Rp5.000 | Stock 2"));
        assert!(out.contains("[!] Insufficient stock for A1: available 2, requested 3"));
        assert!(out.contains("Change Rp5.000"));

        assert_eq!(state.store.ledger().read_all().unwrap().len(), 1);
        assert_eq!(
            state.store.catalog().load().unwrap().find_by_code("A1").unwrap().stock,
            2
        );
    }

    #[test]
    fn test_empty_cart_cancels_without_writing() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let before = state.catalog.clone();
        let mut p = scripted("DONE\n");

        let err = process_sale(&mut state, &mut p, at_0930).unwrap_err();

        assert_eq!(err.code, ErrorCode::CartError);
        assert!(!state.store.config().ledger_path().exists());
        assert_eq!(state.store.catalog().load().unwrap(), before);
    }

    #[test]
    fn test_unknown_code_and_short_payment_reprompt() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let mut p = scripted("ZZ\nA1\n0\n1\ndone\n1000\n5000\n");

        process_sale(&mut state, &mut p, at_0930).unwrap();

        let out = output(p);
        assert!(out.contains("[!] Item not found: ZZ"));
        assert!(out.contains("[!] quantity must be at least 1"));
        assert!(out.contains("[!] payment must be at least 5000.00"));
        assert!(out.contains("Change Rp0"));
    }

    #[test]
    fn test_closed_input_drops_cart() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let before = state.catalog.clone();
        let mut p = scripted("A1\n1\n");

        let err = process_sale(&mut state, &mut p, at_0930).unwrap_err();

        assert!(err.is_fatal());
        assert_eq!(state.catalog, before);
        assert!(!state.store.config().ledger_path().exists());
    }

    #[test]
    fn test_second_sale_same_second_gets_suffix() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);

        let mut p = scripted("B2\n1\nDONE\n2500\n");
        process_sale(&mut state, &mut p, at_0930).unwrap();
        let mut p = scripted("B2\n1\nDONE\n2500\n");
        process_sale(&mut state, &mut p, at_0930).unwrap();

        assert!(output(p).contains("Transaction TRX20261018093000-02 complete"));
        assert_eq!(state.catalog.find_by_code("B2").unwrap().stock, 8);
    }

    #[test]
    fn test_oversized_line_is_rejected_and_sale_continues() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        state
            .update_catalog(|c| {
                c.add("G1", "Gold", Money::from_major(100_000_000_000_000), 1000)
                    .map(|_| ())
            })
            .unwrap();
        let mut p = scripted("G1\n1000\nB2\n1\nDONE\n2500\n");

        process_sale(&mut state, &mut p, at_0930).unwrap();

        let out = output(p);
        assert!(out.contains("[!] Amount too large for G1 x1000"));
        assert!(out.contains("Change Rp0"));

        let rows = state.store.ledger().read_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "B2");
        assert_eq!(state.catalog.find_by_code("G1").unwrap().stock, 1000);
    }
}
