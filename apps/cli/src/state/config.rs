//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--data-dir`)
//! 2. Environment variables (`KASIR_*`, e.g. `KASIR_HISTORY_LIMIT=20`)
//! 3. Config file (`--config <path>`, else `./kasir.toml` if present)
//! 4. Defaults (this file)
//!
//! ## Example `kasir.toml`
//! ```toml
//! store_name = "Toko Makmur"
//! data_dir = "/var/lib/kasir"
//! currency_symbol = "Rp"
//! thousands_separator = "."
//! history_limit = 10
//! done_keyword = "DONE"
//! ```

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use kasir_core::Money;
use kasir_store::{StoreConfig, DEFAULT_CATALOG_FILE, DEFAULT_LEDGER_FILE};
use serde::Deserialize;

use crate::error::{AppError, AppResult, ErrorCode};

/// Config file looked up in the working directory when `--config` is absent.
const DEFAULT_CONFIG_NAME: &str = "kasir";

/// Prefix of environment overrides.
const ENV_PREFIX: &str = "KASIR";

/// Command-line flags.
#[derive(Debug, Default, Parser)]
#[command(name = "kasir", version, about = "Kasir POS: items, sales and revenue at the counter")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the directory holding catalog.json and transactions.csv.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Application configuration.
///
/// Read-only after startup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigState {
    /// Store name (shown in the menu header)
    pub store_name: String,

    /// Application version, always the crate version
    #[serde(skip_deserializing)]
    pub version: String,

    /// Directory holding the catalog and ledger files
    pub data_dir: PathBuf,

    pub catalog_file: String,

    pub ledger_file: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Thousands separator (for display)
    pub thousands_separator: String,

    /// Rows shown by the transaction history
    pub history_limit: usize,

    /// Entered at the item code prompt to finish a sale
    pub done_keyword: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Kasir POS"
    /// - Data: platform data dir, else `./data`
    /// - Currency: Rp with `.` grouping
    /// - History: last 10 rows
    fn default() -> Self {
        ConfigState {
            store_name: "Kasir POS".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: default_data_dir(),
            catalog_file: DEFAULT_CATALOG_FILE.to_string(),
            ledger_file: DEFAULT_LEDGER_FILE.to_string(),
            currency_symbol: "Rp".to_string(),
            thousands_separator: ".".to_string(),
            history_limit: 10,
            done_keyword: "DONE".to_string(),
        }
    }
}

/// Determines the data directory based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/id.kasir.kasir-pos`
/// - **Windows**: `%APPDATA%\kasir\kasir-pos\data`
/// - **Linux**: `~/.local/share/kasir-pos`
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("id", "kasir", "kasir-pos")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("data"))
}

impl ConfigState {
    /// Loads configuration from all sources.
    pub fn load(args: &Args) -> AppResult<Self> {
        Self::from_sources(args, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_sources(args: &Args, env: config::Environment) -> AppResult<Self> {
        let mut builder = config::Config::builder();
        builder = match &args.config {
            Some(path) => builder.add_source(config::File::from(path.as_path())),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };
        builder = builder.add_source(env.try_parsing(true));
        let mut settings: ConfigState = builder.build()?.try_deserialize()?;

        if let Some(data_dir) = &args.data_dir {
            settings.data_dir = data_dir.clone();
        }

        settings.normalize()?;
        Ok(settings)
    }

    fn normalize(&mut self) -> AppResult<()> {
        self.done_keyword = self.done_keyword.trim().to_uppercase();
        if self.done_keyword.is_empty() {
            return Err(AppError::new(ErrorCode::ConfigError, "done_keyword must not be empty"));
        }
        if self.history_limit == 0 {
            return Err(AppError::new(ErrorCode::ConfigError, "history_limit must be at least 1"));
        }
        Ok(())
    }

    /// File layout for the store.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_dir)
            .catalog_file(&self.catalog_file)
            .ledger_file(&self.ledger_file)
    }

    /// Rounds to whole units and groups thousands, without the symbol.
    pub fn format_amount(&self, amount: Money) -> String {
        amount.format_grouped(&self.thousands_separator)
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_cli_lib::state::ConfigState;
    /// use kasir_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_major(15_000)), "Rp15.000");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let grouped = self.format_amount(amount);
        match grouped.strip_prefix('-') {
            Some(digits) => format!("-{}{}", self.currency_symbol, digits),
            None => format!("{}{}", self.currency_symbol, grouped),
        }
    }
}
