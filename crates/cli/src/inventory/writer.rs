//! CSV serialization of the accumulated report.
//!
//! Responsibilities:
//! - Render the report as CSV with the union of row labels as the header.
//! - Write the file atomically, creating the parent directory.
//!
//! Invariants:
//! - An empty report writes nothing.
//! - Cells a row has no value for are written empty.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::info;

use super::row::Report;

/// What `write_report` did.
#[derive(Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { path: PathBuf, rows: usize },
    Empty,
}

/// Render the report as CSV text.
pub fn render_csv(report: &Report) -> Result<String> {
    let columns = report.columns();
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(&columns)
        .context("Failed to write CSV header")?;
    for row in report.rows() {
        let record = columns.iter().map(|label| row.get(label).unwrap_or(""));
        writer
            .write_record(record)
            .context("Failed to write CSV record")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Write the report to `path`, or nothing when it has no rows.
pub fn write_report(report: &Report, path: &Path) -> Result<WriteOutcome> {
    if report.is_empty() {
        return Ok(WriteOutcome::Empty);
    }

    let content = render_csv(report)?;
    write_to_file(&content, path)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!(path = %path.display(), rows = report.len(), "Report written");
    Ok(WriteOutcome::Written {
        path: path.to_path_buf(),
        rows: report.len(),
    })
}

/// Write content to a file atomically (temp file in the same directory, then rename).
fn write_to_file(content: &str, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::row::DetailRow;
    use tempfile::TempDir;

    fn row(pairs: &[(&str, &str)]) -> DetailRow {
        let mut row = DetailRow::new();
        for (label, value) in pairs {
            row.insert(*label, *value);
        }
        row
    }

    fn sample_report() -> Report {
        let mut report = Report::new();
        report.push(row(&[
            ("Cluster Name", "apps"),
            ("Labels", "{'env': 'prod', 'team': 'a,b'}"),
        ]));
        report.push(row(&[("Cluster Name", "batch"), ("Taints", "gpu=true")]));
        report
    }

    #[test]
    fn test_render_csv_union_header_and_blank_cells() {
        let csv = render_csv(&sample_report()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("Cluster Name,Labels,Taints"));
        assert_eq!(
            lines.next(),
            Some("apps,\"{'env': 'prod', 'team': 'a,b'}\",")
        );
        assert_eq!(lines.next(), Some("batch,,gpu=true"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_written_file_reads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("report.csv");
        let report = sample_report();

        let outcome = write_report(&report, &path).unwrap();
        assert_eq!(
            outcome,
            WriteOutcome::Written {
                path: path.clone(),
                rows: 2
            }
        );

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(headers, vec!["Cluster Name", "Labels", "Taints"]);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        for (record, row) in records.iter().zip(report.rows()) {
            for (header, cell) in headers.iter().zip(record.iter()) {
                assert_eq!(cell, row.get(header).unwrap_or(""));
            }
        }
    }

    #[test]
    fn test_existing_file_is_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");
        std::fs::write(&path, "stale").unwrap();

        write_report(&sample_report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Cluster Name,"));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");

        let outcome = write_report(&Report::new(), &path).unwrap();

        assert_eq!(outcome, WriteOutcome::Empty);
        assert!(!path.exists());
    }
}
