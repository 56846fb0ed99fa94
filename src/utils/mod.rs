mod hash;

pub use hash::{compute_file_hash, compute_hash};

/// Minimum number of ledger columns (identifier, metadata, status)
pub const MIN_COLUMNS: usize = 3;

/// Index of the identifier field in a ledger row
pub const IDENTIFIER_FIELD: usize = 0;

/// Index of the status field in a ledger row
pub const STATUS_FIELD: usize = 2;

/// Get the current local time formatted for backup file names (second resolution)
pub fn backup_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d%H%M%S").to_string()
}
