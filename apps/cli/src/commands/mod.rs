//! # Menu Commands Module
//!
//! The numbered menu and the actions behind it.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (menu loop, dispatch)
//! ├── catalog.rs  ◄─── 1 list, 2 add, 3 update, 4 search
//! ├── sale.rs     ◄─── 5 sale transaction
//! └── report.rs   ◄─── 6 history, 7 revenue
//! ```
//!
//! ## How the Loop Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Menu Loop                                            │
//! │                                                                         │
//! │  ┌──► header (store, version, clock, item count) + options             │
//! │  │         │                                                            │
//! │  │         ▼                                                            │
//! │  │    "Choose menu: " ──► MenuChoice::parse                             │
//! │  │         │                   │                                        │
//! │  │         │                   ▼ None ──► [!] Invalid menu choice ──┐  │
//! │  │         ▼                                                        │  │
//! │  │    dispatch(choice) -> AppResult<Flow>                           │  │
//! │  │         │                                                        │  │
//! │  │         ├── Err(e) ──► log + "[!] {e}" ──────────────────────────┤  │
//! │  │         ├── Ok(Continue) ────────────────────────────────────────┤  │
//! │  │         └── Ok(Exit) / input closed ──► return                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod report;
pub mod sale;

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDateTime};
use tracing::{error, info, warn};

use crate::console::Prompter;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::state::AppState;

/// A menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListItems,
    AddItem,
    UpdateItem,
    SearchItems,
    Sale,
    History,
    Revenue,
    Exit,
}

impl MenuChoice {
    /// Options in display order.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::ListItems,
        MenuChoice::AddItem,
        MenuChoice::UpdateItem,
        MenuChoice::SearchItems,
        MenuChoice::Sale,
        MenuChoice::History,
        MenuChoice::Revenue,
        MenuChoice::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key() == input.trim())
    }

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::ListItems => "1",
            MenuChoice::AddItem => "2",
            MenuChoice::UpdateItem => "3",
            MenuChoice::SearchItems => "4",
            MenuChoice::Sale => "5",
            MenuChoice::History => "6",
            MenuChoice::Revenue => "7",
            MenuChoice::Exit => "0",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ListItems => "List items          - Show every item",
            MenuChoice::AddItem => "Add item            - Register a new item",
            MenuChoice::UpdateItem => "Update item         - Change price / stock",
            MenuChoice::SearchItems => "Search items        - Find by code or name",
            MenuChoice::Sale => "Sale transaction    - Run the till",
            MenuChoice::History => "Transaction history - Latest ledger rows",
            MenuChoice::Revenue => "Revenue summary     - Total sales",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// What the loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Prints the header and the option list.
pub fn render_header<R: BufRead, W: Write>(
    state: &AppState,
    p: &mut Prompter<R, W>,
    now: NaiveDateTime,
) -> AppResult<()> {
    p.rule()?;
    let out = p.out();
    writeln!(out, "{} v{}", state.config.store_name, state.config.version)?;
    writeln!(out, "{}", now.format("%d %B %Y %H:%M:%S"))?;
    writeln!(out, "Registered items: {}", state.catalog.len())?;
    p.rule()?;
    for choice in MenuChoice::ALL {
        writeln!(p.out(), "{}) {}", choice.key(), choice.label())?;
    }
    p.rule()
}

/// Runs one menu action.
pub fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    state: &mut AppState,
    p: &mut Prompter<R, W>,
) -> AppResult<Flow> {
    match choice {
        MenuChoice::ListItems => catalog::list_items(state, p)?,
        MenuChoice::AddItem => catalog::add_item(state, p)?,
        MenuChoice::UpdateItem => catalog::update_item(state, p)?,
        MenuChoice::SearchItems => catalog::search_items(state, p)?,
        MenuChoice::Sale => {
            let sold = sale::process_sale(state, p, || Local::now().naive_local());
            let reloaded = state.reload_catalog();
            sold?;
            reloaded?;
        }
        MenuChoice::History => report::show_history(state, p)?,
        MenuChoice::Revenue => report::show_revenue(state, p)?,
        MenuChoice::Exit => {
            if p.confirm("Exit? (y/n): ")? {
                return Ok(Flow::Exit);
            }
        }
    }
    Ok(Flow::Continue)
}

/// Runs the menu until the operator exits or input closes.
pub fn run_menu<R: BufRead, W: Write>(
    state: &mut AppState,
    p: &mut Prompter<R, W>,
) -> AppResult<()> {
    loop {
        render_header(state, p, Local::now().naive_local())?;

        let outcome = p
            .non_empty("Choose menu: ", "menu choice")
            .and_then(|answer| match MenuChoice::parse(&answer) {
                Some(choice) => dispatch(choice, state, p),
                None => p.warn("Invalid menu choice.").map(|_| Flow::Continue),
            });

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                info!("Operator exited");
                writeln!(p.out(), "Thank you!")?;
                return Ok(());
            }
            Err(err) if err.is_fatal() => {
                info!(reason = %err, "Input closed, leaving menu");
                return Ok(());
            }
            Err(err) => {
                log_failure(&err);
                p.warn(&err)?;
            }
        }
    }
}

fn log_failure(err: &AppError) {
    match err.code {
        ErrorCode::StorageError | ErrorCode::ConfigError => {
            error!(code = err.code.as_str(), message = %err.message, "Menu action failed")
        }
        _ => warn!(code = err.code.as_str(), message = %err.message, "Menu action rejected"),
    }
}
