//! # State Module
//!
//! Everything a menu action needs, owned in one place and passed by `&mut`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  run()                                                                 │
//! │    ConfigState::load(&args)                                            │
//! │    AppState::open(config)                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │    Store     │  │   Catalog    │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  catalog()   │  │  in-memory   │  │  store_name      │              │
//! │  │  ledger()    │  │  copy of     │  │  currency        │              │
//! │  │  commit_sale │  │  catalog.json│  │  done_keyword    │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  Single-threaded: the menu loop is the only owner, no locks.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{Args, ConfigState};

use kasir_core::{Catalog, CoreResult};
use kasir_store::Store;
use tracing::debug;

use crate::error::AppResult;

/// Application state threaded through every menu action.
#[derive(Debug)]
pub struct AppState {
    pub store: Store,
    pub catalog: Catalog,
    pub config: ConfigState,
}

impl AppState {
    /// Opens the data directory and loads the catalog.
    pub fn open(config: ConfigState) -> AppResult<Self> {
        let store = Store::open(config.store_config())?;
        let catalog = store.catalog().load()?;

        Ok(AppState {
            store,
            catalog,
            config,
        })
    }

    /// Replaces the in-memory catalog with what is on disk.
    pub fn reload_catalog(&mut self) -> AppResult<()> {
        self.catalog = self.store.catalog().load()?;
        debug!(items = self.catalog.len(), "Catalog reloaded");
        Ok(())
    }

    /// Applies `change` to a copy of the catalog, saves it, then swaps it in.
    ///
    /// The in-memory catalog only changes once the file has been written.
    pub fn update_catalog<T>(
        &mut self,
        change: impl FnOnce(&mut Catalog) -> CoreResult<T>,
    ) -> AppResult<T> {
        let mut updated = self.catalog.clone();
        let result = change(&mut updated)?;
        self.store.catalog().save(&updated)?;
        self.catalog = updated;
        Ok(result)
    }
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::io::Cursor;
    use std::path::PathBuf;

    use kasir_core::Money;
    use tempfile::TempDir;

    use super::{AppState, ConfigState};
    use crate::console::Prompter;

    pub type ScriptedPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    /// Fresh state over a temp data dir, with `A1 Pen 5000 x5` and
    /// `B2 Notebook 2500 x10` in the catalog.
    pub fn stocked_state(dir: &TempDir) -> AppState {
        let config = ConfigState {
            data_dir: dir.path().join("data"),
            ..ConfigState::default()
        };
        let mut state = AppState::open(config).unwrap();
        state
            .update_catalog(|c| {
                c.add("A1", "Pen", Money::from_major(5000), 5)?;
                c.add("B2", "Notebook", Money::from_major(2500), 10)?;
                Ok(())
            })
            .unwrap();
        state
    }

    pub fn empty_state(dir: &TempDir) -> AppState {
        let config = ConfigState {
            data_dir: PathBuf::from(dir.path()),
            ..ConfigState::default()
        };
        AppState::open(config).unwrap()
    }

    pub fn scripted(input: &str) -> ScriptedPrompter {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    pub fn output(prompter: ScriptedPrompter) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use crate::error::AppError;
    use kasir_core::{CoreError, Money};
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let state = empty_state(&dir);

        assert!(state.catalog.is_empty());
        assert!(dir.path().join("catalog.json").exists());
    }

    #[test]
    fn test_update_catalog_persists() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);

        state
            .update_catalog(|c| c.update_price("a1", Money::from_major(6000)).map(|_| ()))
            .unwrap();

        let on_disk = state.store.catalog().load().unwrap();
        assert_eq!(on_disk.find_by_code("A1").unwrap().price, Money::from_major(6000));
    }

    #[test]
    fn test_failed_update_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut state = stocked_state(&dir);
        let before = state.catalog.clone();

        let err = state
            .update_catalog(|c| c.update_stock("A1", -6).map(|_| ()))
            .unwrap_err();

        assert_eq!(
            err,
            AppError::from(CoreError::NegativeStock {
                code: "A1".into(),
                current: 5,
                delta: -6
            })
        );
        assert_eq!(state.catalog, before);
        assert_eq!(state.store.catalog().load().unwrap(), before);
    }
}
