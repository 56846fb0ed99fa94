use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config lists no class folders")]
    NoClassFolders,

    #[error("duplicate class label '{0}' in config")]
    DuplicateLabel(String),
}

/// One classification folder: a status label and the directory whose
/// contents carry that label
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassFolder {
    pub label: String,
    pub path: PathBuf,
}

/// Sync run configuration.
///
/// `class_folders` is an ordered list, not a map: folders are scanned in
/// list order, and when the same image appears in two folders the later
/// entry wins. Making the order part of the configuration keeps that
/// behavior deterministic and user-visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// Path to the CSV ledger
    pub ledger_path: PathBuf,

    /// Directory that receives timestamped backup copies
    pub backup_dir: PathBuf,

    /// Classification folders in scan order
    pub class_folders: Vec<ClassFolder>,
}

impl SyncConfig {
    /// Reject configurations that cannot be reconciled unambiguously
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.class_folders.is_empty() {
            return Err(ConfigError::NoClassFolders);
        }

        let mut seen = HashSet::new();
        for class in &self.class_folders {
            if !seen.insert(class.label.as_str()) {
                return Err(ConfigError::DuplicateLabel(class.label.clone()));
            }
        }

        Ok(())
    }
}

/// Read and validate the configuration file
pub async fn read_config(path: &Path) -> Result<SyncConfig, ConfigError> {
    let content = fs::read_to_string(path).await?;
    let config: SyncConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
