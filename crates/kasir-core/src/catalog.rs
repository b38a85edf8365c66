//! # Catalog
//!
//! The in-memory list of sellable items and the rules for changing it.
//!
//! ## Ownership
//! ```text
//! CatalogRepository::load() ──► Catalog ──► AppState (owned)
//!                                  │
//!                  &mut borrowed by each menu action
//!                                  │
//!                                  ▼
//!                     CatalogRepository::save(&catalog)
//! ```
//!
//! Every mutation here either succeeds completely or returns an error with
//! the catalog unchanged. Persisting is the caller's job.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Item;
use crate::validation::{validate_code, validate_item_name, validate_price, validate_stock};

/// Ordered collection of items, serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Case-insensitive exact match on code.
    pub fn find_by_code(&self, code: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.has_code(code))
    }

    fn find_by_code_mut(&mut self, code: &str) -> CoreResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.has_code(code))
            .ok_or_else(|| CoreError::ItemNotFound(code.trim().to_string()))
    }

    /// Adds a new item at the end of the catalog.
    ///
    /// ## Errors
    /// - [`CoreError::DuplicateCode`] if the code exists in any letter case
    /// - [`CoreError::Validation`] for an empty code/name or negative price/stock
    pub fn add(&mut self, code: &str, name: &str, price: Money, stock: i64) -> CoreResult<&Item> {
        let code = code.trim();
        validate_code(code)?;
        validate_item_name(name)?;
        validate_price(price)?;
        validate_stock(stock)?;

        if self.find_by_code(code).is_some() {
            return Err(CoreError::DuplicateCode(code.to_string()));
        }

        self.items.push(Item::new(code, name.trim(), price, stock));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Replaces the price of an item.
    pub fn update_price(&mut self, code: &str, price: Money) -> CoreResult<&Item> {
        validate_price(price)?;
        let item = self.find_by_code_mut(code)?;
        item.price = price;
        Ok(&*item)
    }

    /// Adjusts stock by `delta` (positive to restock, negative to write off).
    ///
    /// ## Errors
    /// [`CoreError::NegativeStock`] if the result would drop below zero; the
    /// item is left as it was.
    pub fn update_stock(&mut self, code: &str, delta: i64) -> CoreResult<&Item> {
        let item = self.find_by_code_mut(code)?;
        let new_stock = item
            .stock
            .checked_add(delta)
            .filter(|stock| *stock >= 0)
            .ok_or_else(|| CoreError::NegativeStock {
                code: item.code.clone(),
                current: item.stock,
                delta,
            })?;

        item.stock = new_stock;
        Ok(&*item)
    }

    /// Case-insensitive substring search on code or name, in catalog order.
    pub fn search(&self, keyword: &str) -> Vec<&Item> {
        let keyword = keyword.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches_keyword(&keyword))
            .collect()
    }

    /// Takes `quantity` units out of stock for a committed sale.
    ///
    /// Checked again here because the catalog may have been reloaded since
    /// the cart was built.
    pub(crate) fn withdraw(&mut self, code: &str, quantity: i64) -> CoreResult<()> {
        let item = self.find_by_code_mut(code)?;
        if item.stock < quantity {
            return Err(CoreError::InsufficientStock {
                code: item.code.clone(),
                available: item.stock,
                requested: quantity,
            });
        }
        item.stock -= quantity;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
