//! The CSV ledger: a padded header plus ordered data rows.
//!
//! Row order is preserved across load and save; rows are mutated in place,
//! never reordered or deleted. The identifier index is built once after
//! load and not maintained incrementally.

mod row;
mod store;

pub use row::Row;
pub use store::{load_ledger, save_ledger};

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("ledger file '{0}' is empty (missing header record)")]
    EmptyLedger(String),
}

/// In-memory ledger: header columns plus all data rows in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Ledger {
    pub async fn load(path: &Path) -> Result<Self, LedgerError> {
        store::load_ledger(path).await
    }

    pub async fn save(&self, path: &Path) -> Result<(), LedgerError> {
        store::save_ledger(self, path).await
    }

    /// Build the identifier-to-row-position map.
    ///
    /// Duplicate identifiers collapse to the last occurrence; earlier
    /// duplicate rows stay in `rows` but are unreachable through the index.
    pub fn build_index(&self) -> HashMap<String, usize> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.identifier().to_string(), i))
            .collect()
    }
}
