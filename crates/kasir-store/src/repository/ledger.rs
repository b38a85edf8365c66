//! # Ledger Repository
//!
//! Append-only CSV log of sold lines.
//!
//! ## File Format
//! ```text
//! timestamp,transaction_id,code,name,quantity,unit_price,subtotal,transaction_total
//! 2026-10-18 09:30:00,TRX20261018093000,A1,Pen,3,2000.0,6000.0,11500.0
//! 2026-10-18 09:30:00,TRX20261018093000,B2,Notebook,1,5500.0,5500.0,11500.0
//! ```
//!
//! The header is written once, when the file is created. Rows are only ever
//! appended; nothing here rewrites or deletes a row.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use kasir_core::ledger::{recent, RevenueSummary};
use kasir_core::{LedgerRow, LEDGER_HEADER};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// Repository for the ledger file.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Creates a repository over `path`. Nothing is touched until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LedgerRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with its header row if it is missing or empty.
    ///
    /// Idempotent. Returns `true` when the header was written by this call.
    pub fn ensure_initialized(&self) -> StoreResult<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.len() > 0 => return Ok(false),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::io(&self.path, e)),
        }

        let mut writer =
            csv::Writer::from_path(&self.path).map_err(|e| StoreError::ledger(&self.path, e))?;
        writer
            .write_record(LEDGER_HEADER)
            .map_err(|e| StoreError::ledger(&self.path, e))?;
        writer.flush().map_err(|e| StoreError::io(&self.path, e))?;

        info!(path = %self.path.display(), "Ledger file created");
        Ok(true)
    }

    /// Appends all rows of one transaction through a single writer.
    ///
    /// The file handle lives only for this call and is flushed before
    /// returning, on success and on error alike.
    pub fn append(&self, rows: &[LedgerRow]) -> StoreResult<()> {
        self.ensure_initialized()?;

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        let written = rows
            .iter()
            .try_for_each(|row| writer.serialize(row))
            .map_err(|e| StoreError::ledger(&self.path, e));
        let flushed = writer.flush().map_err(|e| StoreError::io(&self.path, e));
        written?;
        flushed?;

        debug!(path = %self.path.display(), rows = rows.len(), "Ledger rows appended");
        Ok(())
    }

    /// Reads every row, oldest first.
    pub fn read_all(&self) -> StoreResult<Vec<LedgerRow>> {
        self.ensure_initialized()?;

        let file = File::open(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let mut reader = csv::Reader::from_reader(file);

        reader
            .deserialize()
            .collect::<Result<Vec<LedgerRow>, _>>()
            .map_err(|e| StoreError::ledger(&self.path, e))
    }

    /// The last `n` rows, oldest first.
    pub fn recent(&self, n: usize) -> StoreResult<Vec<LedgerRow>> {
        let rows = self.read_all()?;
        Ok(recent(&rows, n).to_vec())
    }

    /// Transaction count and revenue over the whole ledger.
    pub fn aggregate(&self) -> StoreResult<RevenueSummary> {
        let rows = self.read_all()?;
        Ok(RevenueSummary::from_rows(&rows))
    }

    /// Identifier of the newest row, if any.
    pub fn last_transaction_id(&self) -> StoreResult<Option<String>> {
        let rows = self.read_all()?;
        Ok(rows.into_iter().last().map(|row| row.transaction_id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
