use crate::utils::{backup_timestamp, compute_file_hash};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::info;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backup verification failed: '{backup}' does not match '{source_path}'")]
    VerificationFailed { source_path: String, backup: String },
}

/// Copy the ledger into the backup directory before any mutation.
///
/// The copy is named `<stem>_backup_<YYYYMMDDHHMMSS><ext>` and the backup
/// directory is created (with parents) if absent. The copy is verified by
/// SHA-256 against the source; a mismatch is fatal.
///
/// Returns the path of the backup file.
pub async fn make_backup(ledger_path: &Path, backup_dir: &Path) -> Result<PathBuf, BackupError> {
    let backup_path = backup_dir.join(backup_file_name(ledger_path));

    fs::create_dir_all(backup_dir).await?;
    fs::copy(ledger_path, &backup_path).await?;

    let source_hash = compute_file_hash(ledger_path).await?;
    let backup_hash = compute_file_hash(&backup_path).await?;
    if source_hash != backup_hash {
        return Err(BackupError::VerificationFailed {
            source_path: ledger_path.display().to_string(),
            backup: backup_path.display().to_string(),
        });
    }

    info!(path = %backup_path.display(), "Backup created");

    Ok(backup_path)
}

/// Timestamped backup file name derived from the ledger file name
fn backup_file_name(ledger_path: &Path) -> String {
    let stem = ledger_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ledger".to_string());
    let extension = ledger_path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    format!("{stem}_backup_{}{extension}", backup_timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_backup_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let ledger = temp.path().join("tracker.csv");
        fs::write(&ledger, "id,name,status\ncatA,x,Extracted\n")
            .await
            .unwrap();

        let backup_dir = temp.path().join("backups");
        let backup = make_backup(&ledger, &backup_dir).await.unwrap();

        let original = fs::read(&ledger).await.unwrap();
        let copied = fs::read(&backup).await.unwrap();
        assert_eq!(original, copied);
    }

    #[tokio::test]
    async fn test_backup_name_carries_stem_and_extension() {
        let temp = TempDir::new().unwrap();
        let ledger = temp.path().join("tracker.csv");
        fs::write(&ledger, "id\n").await.unwrap();

        let backup = make_backup(&ledger, &temp.path().join("backups"))
            .await
            .unwrap();

        let name = backup.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("tracker_backup_"));
        assert!(name.ends_with(".csv"));
        // stem + "_backup_" + 14-digit timestamp + ".csv"
        assert_eq!(name.len(), "tracker_backup_".len() + 14 + 4);
    }

    #[tokio::test]
    async fn test_backup_creates_nested_backup_dir() {
        let temp = TempDir::new().unwrap();
        let ledger = temp.path().join("tracker.csv");
        fs::write(&ledger, "id\n").await.unwrap();

        let backup_dir = temp.path().join("deep/nested/backups");
        let backup = make_backup(&ledger, &backup_dir).await.unwrap();

        assert!(backup_dir.is_dir());
        assert!(backup.exists());
    }

    #[tokio::test]
    async fn test_backup_missing_source_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result = make_backup(&temp.path().join("absent.csv"), &temp.path().join("b")).await;
        assert!(matches!(result, Err(BackupError::Io(_))));
    }
}
