use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracker_sync::{ClassFolder, SyncConfig};

/// Create a temporary directory for a test
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a CSV ledger file and return its path
pub async fn write_ledger(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("tracker.csv");
    tokio::fs::write(&path, content)
        .await
        .expect("Failed to write ledger");
    path
}

/// Create a class folder containing the given (empty) image files
pub async fn create_class_folder(dir: &Path, name: &str, files: &[&str]) -> PathBuf {
    let folder = dir.join(name);
    tokio::fs::create_dir_all(&folder)
        .await
        .expect("Failed to create class folder");
    for file in files {
        tokio::fs::write(folder.join(file), b"")
            .await
            .expect("Failed to create image file");
    }
    folder
}

/// Build a sync config rooted in the test directory
pub fn test_config(dir: &Path, ledger_path: PathBuf, classes: Vec<(&str, PathBuf)>) -> SyncConfig {
    SyncConfig {
        ledger_path,
        backup_dir: dir.join("backups"),
        class_folders: classes
            .into_iter()
            .map(|(label, path)| ClassFolder {
                label: label.to_string(),
                path,
            })
            .collect(),
    }
}
