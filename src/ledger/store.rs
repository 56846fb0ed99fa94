use super::row::Row;
use super::{Ledger, LedgerError};
use crate::utils::MIN_COLUMNS;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Read and parse the ledger file.
///
/// The first record is the header, padded with synthesized `col<N>` names
/// until it has at least three columns. All remaining records become data
/// rows in file order. Rows are not padded here; short rows stay short
/// until a status update touches them.
pub async fn load_ledger(path: &Path) -> Result<Ledger, LedgerError> {
    let content = fs::read_to_string(path).await?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader.records();

    let header_record = match records.next() {
        Some(record) => record?,
        None => return Err(LedgerError::EmptyLedger(path.display().to_string())),
    };

    let mut header: Vec<String> = header_record.iter().map(str::to_string).collect();
    while header.len() < MIN_COLUMNS {
        header.push(format!("col{}", header.len() + 1));
    }

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(Row::new(record.iter().map(str::to_string).collect()));
    }

    info!(path = %path.display(), rows = rows.len(), "Loaded ledger");

    Ok(Ledger { header, rows })
}

/// Rewrite the ledger file from scratch: header first, then all rows in
/// their current order.
///
/// The write goes to a sibling `.tmp` file which is renamed over the
/// destination, so an interrupted save never leaves a truncated ledger.
pub async fn save_ledger(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(&ledger.header)?;
    for row in &ledger.rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;

    let data = writer
        .into_inner()
        .map_err(|e| LedgerError::Io(e.into_error()))?;

    let temp_path = temp_save_path(path);
    fs::write(&temp_path, &data).await?;
    fs::rename(&temp_path, path).await?;

    info!(path = %path.display(), rows = ledger.rows.len(), "Saved ledger");

    Ok(())
}

/// Sibling temp path used for the atomic save
pub fn temp_save_path(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str(".tmp");
    path.with_file_name(name)
}
