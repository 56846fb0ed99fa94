pub mod backup;
pub mod config;
pub mod ledger;
pub mod reconcile;
pub mod report;
pub mod sync;
pub mod utils;

// Re-export commonly used types
pub use backup::{make_backup, BackupError};
pub use config::{read_config, ClassFolder, ConfigError, SyncConfig};
pub use ledger::{Ledger, LedgerError, Row};
pub use reconcile::{reconcile_folders, ClassCounters, ReconcileError, ReconcileOutcome};
pub use report::print_summary;
pub use sync::{run, SyncError, SyncOutcome};
