//! The reconciliation pass: match classification-folder contents against
//! ledger rows and rewrite the status column.
//!
//! Folders are scanned in configuration order. When the same image appears
//! in more than one folder, the later folder wins; the earlier folder's
//! counter increment is not reverted. A second pass over unchanged folders
//! produces zero updates.

use crate::config::ClassFolder;
use crate::ledger::Ledger;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-class update counts, reported in configuration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassCounters {
    counts: Vec<(String, u64)>,
}

impl ClassCounters {
    /// Seed a zero counter for every configured class
    pub fn seeded<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            counts: labels.into_iter().map(|l| (l.to_string(), 0)).collect(),
        }
    }

    pub fn increment(&mut self, label: &str) {
        if let Some(entry) = self.counts.iter_mut().find(|(l, _)| l == label) {
            entry.1 += 1;
        }
    }

    pub fn get(&self, label: &str) -> u64 {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(l, c)| (l.as_str(), *c))
    }
}

/// What a reconciliation pass observed and changed
#[derive(Debug, Clone, Default)]
pub struct ReconcileOutcome {
    /// How many rows were rewritten to each class label
    pub counters: ClassCounters,

    /// Identifiers seen on disk but absent from the ledger, in discovery order
    pub not_found: Vec<String>,
}

/// Scan every class folder and update matching ledger rows in place.
///
/// A missing folder is a warning, not an error; that class is skipped for
/// this run. A folder entry that is not a regular file is ignored. The
/// entry's extension is stripped to obtain the image identifier.
pub async fn reconcile_folders(
    ledger: &mut Ledger,
    class_folders: &[ClassFolder],
) -> Result<ReconcileOutcome, ReconcileError> {
    let index = ledger.build_index();

    let mut outcome = ReconcileOutcome {
        counters: ClassCounters::seeded(class_folders.iter().map(|c| c.label.as_str())),
        not_found: Vec::new(),
    };

    for class in class_folders {
        if !class.path.is_dir() {
            warn!(
                label = %class.label,
                path = %class.path.display(),
                "Class folder not found, skipping"
            );
            continue;
        }

        let mut entries = fs::read_dir(&class.path).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }

            let file_name = match entry.file_name().to_str() {
                Some(name) => name.to_string(),
                None => continue,
            };
            let identifier = strip_extension(&file_name);

            match index.get(identifier) {
                Some(&row_index) => {
                    if ledger.rows[row_index].set_status(&class.label) {
                        outcome.counters.increment(&class.label);
                    }
                }
                None => outcome.not_found.push(identifier.to_string()),
            }
        }
    }

    Ok(outcome)
}

/// The image identifier is the file name without its final extension
fn strip_extension(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}
