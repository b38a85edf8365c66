//! # Cart & Sale Flow
//!
//! The transaction core: building a cart against live stock, taking payment,
//! and turning the paid cart into a committed [`Transaction`].
//!
//! ## Sale States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale State Machine                                │
//! │                                                                         │
//! │   COLLECTING            Cart                                            │
//! │     │  add_line() ──► line appended, quantity reserved                  │
//! │     │                                                                   │
//! │     │  checkout()                                                       │
//! │     ├──────────────► Err(EmptyCart)  ══► ABORTED (nothing persisted)    │
//! │     ▼                                                                   │
//! │   AWAITING_PAYMENT      PendingPayment                                  │
//! │     │  change_for(p) ─► Err(PaymentBelowTotal) → ask again              │
//! │     │  pay(p)                                                           │
//! │     ▼                                                                   │
//! │   PAID                  PaidSale                                        │
//! │     │  commit(&mut catalog, id, now)                                    │
//! │     ▼                                                                   │
//! │   COMMITTED             Receipt { transaction, payment, change }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reservations
//! The catalog is NOT touched while collecting. Each accepted line reserves
//! its quantity; later lines see `stock - reserved`. Adding the same code
//! twice draws from the same pool. Reservations become real stock
//! withdrawals only in [`PaidSale::commit`].

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLine, Item, Transaction};
use crate::validation::validate_quantity;

fn reservation_key(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

// =============================================================================
// Cart (COLLECTING)
// =============================================================================

/// The cart being built for one sale.
///
/// ## Invariants
/// - Every line has quantity >= 1
/// - For every code, reserved quantity <= stock at the time each line was added
/// - Lines are never removed (cancel by finishing with an empty cart)
/// - Every subtotal and the running total fit in [`Money`]
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    reserved: BTreeMap<String, i64>,
    total: Money,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of `code` already taken by earlier lines.
    pub fn reserved(&self, code: &str) -> i64 {
        self.reserved
            .get(&reservation_key(code))
            .copied()
            .unwrap_or(0)
    }

    /// Units of `item` still available to this cart.
    pub fn available(&self, item: &Item) -> i64 {
        item.stock - self.reserved(&item.code)
    }

    /// Sum of all line subtotals.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Appends a line for `item`, freezing its name and price.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] if `quantity < 1`
    /// - [`CoreError::InsufficientStock`] if `quantity` exceeds what is left
    ///   after earlier lines; the cart is unchanged
    /// - [`CoreError::AmountTooLarge`] if the subtotal or the new total
    ///   overflows; the cart is unchanged
    pub fn add_line(&mut self, item: &Item, quantity: i64) -> CoreResult<&CartLine> {
        validate_quantity(quantity)?;

        let available = self.available(item);
        if quantity > available {
            return Err(CoreError::InsufficientStock {
                code: item.code.clone(),
                available,
                requested: quantity,
            });
        }

        let line = CartLine::from_item(item, quantity);
        let total = line
            .checked_subtotal()
            .and_then(|subtotal| self.total.checked_add(subtotal))
            .ok_or_else(|| CoreError::AmountTooLarge {
                code: item.code.clone(),
                quantity,
            })?;

        *self.reserved.entry(reservation_key(&item.code)).or_insert(0) += quantity;
        self.total = total;
        self.lines.push(line);
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Closes the cart and moves to payment.
    ///
    /// ## Errors
    /// [`CoreError::EmptyCart`] if no line was added. The sale is aborted.
    pub fn checkout(self) -> CoreResult<PendingPayment> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        let total = self.total();
        Ok(PendingPayment { cart: self, total })
    }
}

// =============================================================================
// Pending Payment (AWAITING_PAYMENT)
// =============================================================================

/// A non-empty cart waiting for the customer's money.
#[derive(Debug, Clone)]
pub struct PendingPayment {
    cart: Cart,
    total: Money,
}

impl PendingPayment {
    pub fn total(&self) -> Money {
        self.total
    }

    /// Change due for `payment`, or an error if it does not cover the total.
    pub fn change_for(&self, payment: Money) -> CoreResult<Money> {
        if payment < self.total {
            return Err(CoreError::PaymentBelowTotal {
                total: self.total,
                tendered: payment,
            });
        }
        Ok(payment - self.total)
    }

    /// Accepts `payment`. The change is always >= 0.
    pub fn pay(self, payment: Money) -> CoreResult<PaidSale> {
        let change = self.change_for(payment)?;
        Ok(PaidSale {
            cart: self.cart,
            total: self.total,
            payment,
            change,
        })
    }
}

// =============================================================================
// Paid Sale (ready to commit)
// =============================================================================

/// A paid cart that has not been written anywhere yet.
#[derive(Debug, Clone)]
pub struct PaidSale {
    cart: Cart,
    total: Money,
    payment: Money,
    change: Money,
}

impl PaidSale {
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn change(&self) -> Money {
        self.change
    }

    /// Withdraws the reserved stock from `catalog` and builds the transaction.
    ///
    /// All reservations are checked before any item is touched, so on error
    /// the catalog is exactly as it was.
    pub fn commit(
        self,
        catalog: &mut Catalog,
        transaction_id: String,
        timestamp: NaiveDateTime,
    ) -> CoreResult<Receipt> {
        for (code, quantity) in &self.cart.reserved {
            let item = catalog
                .find_by_code(code)
                .ok_or_else(|| CoreError::ItemNotFound(code.clone()))?;
            if item.stock < *quantity {
                return Err(CoreError::InsufficientStock {
                    code: item.code.clone(),
                    available: item.stock,
                    requested: *quantity,
                });
            }
        }

        for (code, quantity) in &self.cart.reserved {
            catalog.withdraw(code, *quantity)?;
        }

        Ok(Receipt {
            transaction: Transaction {
                transaction_id,
                timestamp,
                lines: self.cart.lines,
                total: self.total,
            },
            payment: self.payment,
            change: self.change,
        })
    }
}

/// Outcome of a committed sale, shown to the cashier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub transaction: Transaction,
    pub payment: Money,
    pub change: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
