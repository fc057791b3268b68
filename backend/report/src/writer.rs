//! CSV report artifact writer.

use anyhow::{Context, Result};
use shelfscan_core::ProductRecord;
use std::path::Path;
use tracing::info;

/// Header row, written once at artifact creation.
pub const COLUMNS: [&str; 7] = [
    "Product Name",
    "Category",
    "Quantity",
    "Count",
    "Expiry Date",
    "Freshness Index",
    "Shelf Life",
];

/// Write the report artifact: the header row plus one data row.
///
/// The artifact is rewritten in full on every call (last writer wins; no
/// accumulation across runs). Missing parent directories are created.
pub fn write_report(path: &Path, record: &ProductRecord) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create report directory: {}", parent.display())
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create report file: {}", path.display()))?;
    writer.write_record(COLUMNS)?;
    writer.write_record(record.to_row())?;
    writer.flush().context("failed to flush report")?;

    info!(path = %path.display(), "Report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> ProductRecord {
        ProductRecord::packaged("Milk", "Dairy", "1L", "2", "2024-05-01")
    }

    #[test]
    fn writes_header_and_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        write_report(&path, &milk()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Product Name,Category,Quantity,Count,Expiry Date,Freshness Index,Shelf Life"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Milk,Dairy,1L,2,2024-05-01,unknown,unknown"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn rewrites_artifact_on_each_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        write_report(&path, &milk()).unwrap();
        write_report(&path, &ProductRecord::produce("Banana", "8/10", "3 days")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("Banana"));
        assert!(!content.contains("Milk"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("reports").join("out.csv");

        write_report(&path, &ProductRecord::unknown()).unwrap();
        assert!(path.exists());
    }
}
