//! # Catalog Commands
//!
//! Menu options 1-4: list, add, update, search.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Update Item Flow                                     │
//! │                                                                         │
//! │  Item code: a1 ──► upper-cased ──► find_by_code("A1")                  │
//! │       │                                 │                               │
//! │       │                                 ▼ None ──► [!] Item not found  │
//! │       ▼                                                                 │
//! │  Pen | Price Rp5.000 | Stock 5                                         │
//! │  1) Update price   2) Update stock                                     │
//! │       │                    │                                            │
//! │       ▼                    ▼                                            │
//! │  New price >= 0       Stock change (+/-)                               │
//! │       │                    │  5 + (-6) < 0 ──► [!] cannot go negative  │
//! │       ▼                    ▼                                            │
//! │  update_catalog: copy ─► change ─► save catalog.json ─► swap in        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use kasir_core::validation::{validate_code, validate_item_name};
use kasir_core::{CoreError, Item, Money};
use tracing::{debug, info};

use crate::console::Prompter;
use crate::error::{AppError, AppResult};
use crate::state::{AppState, ConfigState};

const TABLE_WIDTH: usize = 65;

/// `Pen | Price Rp5.000 | Stock 5`
pub fn item_detail(config: &ConfigState, item: &Item, stock: i64) -> String {
    format!(
        "{} | Price {} | Stock {}",
        item.name,
        config.format_currency(item.price),
        stock
    )
}

fn print_items<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    config: &ConfigState,
    items: &[&Item],
) -> AppResult<()> {
    let out = p.out();
    writeln!(
        out,
        "{:<4} {:<10} {:<25} {:>12} {:>6}",
        "No", "Code", "Name", "Price", "Stock"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;
    for (index, item) in items.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<10} {:<25} {:>12} {:>6}",
            index + 1,
            item.code,
            item.name,
            config.format_amount(item.price),
            item.stock
        )?;
    }
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;
    Ok(())
}

/// Menu option 1.
pub fn list_items<R: BufRead, W: Write>(
    state: &AppState,
    p: &mut Prompter<R, W>,
) -> AppResult<()> {
    if state.catalog.is_empty() {
        return p.warn("No items registered yet.");
    }

    p.title("ITEM LIST")?;
    let items: Vec<&Item> = state.catalog.items().iter().collect();
    print_items(p, &state.config, &items)
}

/// Menu option 2.
///
/// Codes are upper-cased. The done keyword can't be used as a code since it
/// could never be sold.
pub fn add_item<R: BufRead, W: Write>(
    state: &mut AppState,
    p: &mut Prompter<R, W>,
) -> AppResult<()> {
    p.title("ADD ITEM")?;

    let code = p.ask_until("Item code: ", |answer| {
        validate_code(answer)?;
        Ok(answer.to_uppercase())
    })?;
    if code == state.config.done_keyword {
        return Err(AppError::validation(format!(
            "'{}' is reserved for finishing a sale",
            code
        )));
    }
    if state.catalog.find_by_code(&code).is_some() {
        return Err(CoreError::DuplicateCode(code).into());
    }

    let name = p.ask_until("Item name: ", |answer| {
        validate_item_name(answer)?;
        Ok(answer.to_string())
    })?;
    let price = p.money("Price: ", "price", Some(Money::zero()))?;
    let stock = p.int("Initial stock: ", "stock", Some(0), None)?;

    let item = state.update_catalog(|catalog| catalog.add(&code, &name, price, stock).cloned())?;

    info!(code = %item.code, price = %item.price, stock = item.stock, "Item added");
    p.success("Item added.")
}

/// Menu option 3.
pub fn update_item<R: BufRead, W: Write>(
    state: &mut AppState,
    p: &mut Prompter<R, W>,
) -> AppResult<()> {
    p.title("UPDATE ITEM")?;

    let code = p.non_empty("Item code: ", "code")?.to_uppercase();
    let item = state
        .catalog
        .find_by_code(&code)
        .ok_or_else(|| CoreError::ItemNotFound(code.clone()))?;

    writeln!(p.out(), "{}", item_detail(&state.config, item, item.stock))?;
    writeln!(p.out(), "1) Update price")?;
    writeln!(p.out(), "2) Update stock")?;

    let updated = match p.int("Choose: ", "option", Some(1), Some(2))? {
        1 => {
            let price = p.money("New price: ", "price", Some(Money::zero()))?;
            state.update_catalog(|catalog| catalog.update_price(&code, price).cloned())?
        }
        _ => {
            let delta = p.int("Stock change (+/-): ", "stock change", None, None)?;
            state.update_catalog(|catalog| catalog.update_stock(&code, delta).cloned())?
        }
    };

    info!(code = %updated.code, price = %updated.price, stock = updated.stock, "Item updated");
    p.success("Item updated.")?;
    writeln!(p.out(), "{}", item_detail(&state.config, &updated, updated.stock))?;
    Ok(())
}

/// Menu option 4.
pub fn search_items<R: BufRead, W: Write>(
    state: &AppState,
    p: &mut Prompter<R, W>,
) -> AppResult<()> {
    let keyword = p.non_empty("Search code/name: ", "keyword")?;
    let results = state.catalog.search(&keyword);

    debug!(keyword = %keyword, count = results.len(), "Search complete");

    if results.is_empty() {
        return p.warn("No matching items.");
    }

    p.title("SEARCH RESULTS")?;
    print_items(p, &state.config, &results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::testing::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let state = empty_state(&dir);
        let mut p = scripted("");

        list_items(&state, &mut p).unwrap();

        assert_eq!(output(p), "[!] No items registered yet.\n");
    }

    #[test]
    fn test_list_shows_grouped_prices() {
        let dir = TempDir::new().unwrap();
        let state = stocked_state(&dir);
        let mut p = scripted("");

        list_items(&state, &mut p).unwrap();

        let out = output(p);
        assert!(out.contains("=== ITEM LIST ==="));
        let pen = out.lines().find(|l| l.contains("Pen")).unwrap();
        assert!(pen.starts_with("1    A1"));
        assert!(pen.contains("5.000"));
        assert!(pen.ends_with("     5"));
    }

    #[test]
    fn test_add_upper_cases_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let mut p = scripted("c3\nInk\n1500\n20\n");

        add_item(&mut state, &mut p).unwrap();

        let expected = Item::new("C3", "Ink", Money::from_major(1500), 20);
        assert_eq!(state.catalog.find_by_code("C3"), Some(&expected));
        let on_disk = state.store.catalog().load().unwrap();
        assert_eq!(on_disk.items().last(), Some(&expected));
        assert!(output(p).contains("[✓] Item added."));
    }

    #[test]
    fn test_add_duplicate_any_case_rejected() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let before = state.catalog.clone();
        let mut p = scripted("a1\n");

        let err = add_item(&mut state, &mut p).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Item code 'A1' already exists");
        assert_eq!(state.catalog, before);
        assert_eq!(state.store.catalog().load().unwrap(), before);
    }

    #[test]
    fn test_add_rejects_done_keyword() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let mut p = scripted("done\n");

        let err = add_item(&mut state, &mut p).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(state.catalog.find_by_code("DONE").is_none());
    }

    #[test]
    fn test_add_reprompts_invalid_fields() {
        let dir = TempDir::new().unwrap();
        let mut state = empty_state(&dir);
        let mut p = scripted("   \nK01\n\nKopi\n-5\nabc\n3500.5\n-1\n4\n");

        add_item(&mut state, &mut p).unwrap();

        let item = state.catalog.find_by_code("K01").unwrap();
        assert_eq!(item.name, "Kopi");
        assert_eq!(item.price, Money::from_minor(350_050));
        assert_eq!(item.stock, 4);

        let out = output(p);
        assert!(out.contains("[!] code is required"));
        assert!(out.contains("[!] name is required"));
        assert!(out.contains("[!] price must be at least 0.00"));
        assert!(out.contains("[!] stock must be at least 0"));
    }

    #[test]
    fn test_add_accepts_code_with_space() {
        let dir = TempDir::new().unwrap();
        let mut state = empty_state(&dir);
        let mut p = scripted("a 1\nAir mineral\n3000\n12\n");

        add_item(&mut state, &mut p).unwrap();

        assert_eq!(state.catalog.find_by_code("a 1").unwrap().code, "A 1");
        assert_eq!(state.store.catalog().load().unwrap().len(), 1);
    }

    #[test]
    fn test_update_price() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let mut p = scripted("a1\n1\n6000\n");

        update_item(&mut state, &mut p).unwrap();

        assert_eq!(
            state.store.catalog().load().unwrap().find_by_code("A1").unwrap().price,
            Money::from_major(6000)
        );
        let out = output(p);
        assert!(out.contains("Pen | Price Rp5.000 | Stock 5"));
        assert!(out.contains("Pen | Price Rp6.000 | Stock 5"));
    }

    #[test]
    fn test_update_stock_restock() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let mut p = scripted("A1\n2\n+3\n");

        update_item(&mut state, &mut p).unwrap();

        assert_eq!(state.catalog.find_by_code("A1").unwrap().stock, 8);
    }

    #[test]
    fn test_update_stock_below_zero_rejected() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let mut p = scripted("A1\n2\n-6\n");

        let err = update_item(&mut state, &mut p).unwrap_err();

        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert_eq!(state.catalog.find_by_code("A1").unwrap().stock, 5);
        assert_eq!(
            state.store.catalog().load().unwrap().find_by_code("A1").unwrap().stock,
            5
        );
    }

    #[test]
    fn test_update_unknown_code() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let mut p = scripted("zz\n");

        let err = update_item(&mut state, &mut p).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not found: ZZ");
    }

    #[test]
    fn test_search() {
        let dir = TempDir::new().unwrap();
        let state = stocked_state(&dir);

        let mut p = scripted("note\n");
        search_items(&state, &mut p).unwrap();
        let out = output(p);
        assert!(out.contains("Notebook"));
        assert!(!out.contains("Pen "));

        let mut p = scripted("xyz\n");
        search_items(&state, &mut p).unwrap();
        assert!(output(p).contains("[!] No matching items."));
    }
}
