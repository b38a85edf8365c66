//! # Kasir Console Library
//!
//! Core library for the Kasir POS console application.
//! `run()` is what the `kasir` binary calls.
//!
//! ## Module Organization
//! ```text
//! kasir_cli_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── console.rs      ◄─── Prompter: prompts, re-prompt loops
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (store + catalog + config)
//! │   └── config.rs   ◄─── ConfigState and command-line flags
//! ├── commands/
//! │   ├── mod.rs      ◄─── Menu loop and dispatch
//! │   ├── catalog.rs  ◄─── List/add/update/search items
//! │   ├── sale.rs     ◄─── Sale transaction
//! │   └── report.rs   ◄─── History and revenue
//! └── error.rs        ◄─── AppError for menu actions
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use console::Prompter;
use error::AppResult;
use state::{AppState, Args, ConfigState};

/// Runs the console application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn,kasir=info; RUST_LOG overrides                      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → kasir.toml → KASIR_* env → --data-dir                  │
/// │                                                                         │
/// │  3. Open Store ───────────────────────────────────────────────────────► │
/// │     • create data dir, load catalog.json (created empty if missing)     │
/// │                                                                         │
/// │  4. Menu Loop ────────────────────────────────────────────────────────► │
/// │     • until "0" + "y", or stdin closes                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let args = Args::parse();
    let config = ConfigState::load(&args)?;

    info!(
        version = %config.version,
        data_dir = %config.data_dir.display(),
        "Starting Kasir POS"
    );

    let mut state = AppState::open(config)?;
    info!(items = state.catalog.len(), "Catalog loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    commands::run_menu(&mut state, &mut prompter)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kasir_store=trace` - Trace the file layer only
/// - Default: WARN, INFO for kasir crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,kasir=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
