//! The sync pipeline: a strict linear sequence of Backup, Load, Reconcile,
//! Save. Any stage failure aborts the remaining stages; nothing is written
//! to the ledger unless every prior stage succeeded.

use crate::backup::{make_backup, BackupError};
use crate::config::SyncConfig;
use crate::ledger::{Ledger, LedgerError};
use crate::reconcile::{reconcile_folders, ReconcileError, ReconcileOutcome};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Backup error: {0}")]
    Backup(#[from] BackupError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Reconcile error: {0}")]
    Reconcile(#[from] ReconcileError),
}

/// Result of a completed sync run
#[derive(Debug)]
pub struct SyncOutcome {
    /// Where the pre-run copy of the ledger was written
    pub backup_path: PathBuf,

    /// Counters and unmatched identifiers from the reconciliation pass
    pub reconcile: ReconcileOutcome,
}

/// Run one full sync: backup the ledger, load it, reconcile it against the
/// configured class folders, and save it back atomically.
///
/// State flows through the stages as explicit values; there is no shared
/// mutable context. The caller owns reporting on the returned outcome.
pub async fn run(config: &SyncConfig) -> Result<SyncOutcome, SyncError> {
    let backup_path = make_backup(&config.ledger_path, &config.backup_dir).await?;

    let mut ledger = Ledger::load(&config.ledger_path).await?;

    let reconcile = reconcile_folders(&mut ledger, &config.class_folders).await?;

    ledger.save(&config.ledger_path).await?;

    info!(
        updated = reconcile.counters.iter().map(|(_, c)| c).sum::<u64>(),
        unmatched = reconcile.not_found.len(),
        "Sync complete"
    );

    Ok(SyncOutcome {
        backup_path,
        reconcile,
    })
}
