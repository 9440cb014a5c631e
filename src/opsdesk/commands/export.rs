use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OpsError, Result};
use crate::export::{self, ExportFormat, TableData};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes one export artifact for a visible list.
///
/// The artifact is encoded fully in memory before anything touches the
/// filesystem, so a failing encoder leaves no partial file behind. An empty
/// list produces no artifact and an informational message instead.
pub fn execute(
    table: &TableData,
    format: ExportFormat,
    out_dir: &Path,
    slug: &str,
) -> Result<CmdResult<()>> {
    let mut result = CmdResult::default();

    if table.rows.is_empty() {
        result.add_message(CmdMessage::info("No records to export."));
        return Ok(result);
    }

    let mut buffer: Vec<u8> = Vec::new();
    export::write_artifact(table, format, &mut buffer)?;

    let path = artifact_path(out_dir, slug, format);
    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(OpsError::Io)?;
    }
    fs::write(&path, &buffer).map_err(OpsError::Io)?;

    result.add_message(CmdMessage::success(format!(
        "Exported {} records to {}",
        table.rows.len(),
        path.display()
    )));
    Ok(result.with_artifact(path))
}

fn artifact_path(out_dir: &Path, slug: &str, format: ExportFormat) -> PathBuf {
    let stamp = Utc::now().format("%Y-%m-%d_%H%M%S");
    out_dir.join(format!("{}-{}.{}", slug, stamp, format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    fn sample_table() -> TableData {
        TableData::new(
            "Leads",
            vec!["id".to_string(), "company".to_string()],
            vec![vec!["LD-1".to_string(), "ABC Corporation".to_string()]],
        )
    }

    #[test]
    fn test_export_writes_artifact() {
        let dir = TempDir::new().unwrap();
        let result = execute(&sample_table(), ExportFormat::Csv, dir.path(), "leads").unwrap();

        let path = result.artifact.as_ref().unwrap();
        assert!(path.exists());
        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("leads-"));
        assert!(path.extension().unwrap() == "csv");

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("ABC Corporation"));
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn test_export_empty_list_skips_artifact() {
        let dir = TempDir::new().unwrap();
        let table = TableData::new("Leads", vec!["id".to_string()], vec![]);
        let result = execute(&table, ExportFormat::Pdf, dir.path(), "leads").unwrap();

        assert!(result.artifact.is_none());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_each_format() {
        let dir = TempDir::new().unwrap();
        for format in [ExportFormat::Csv, ExportFormat::Xls, ExportFormat::Pdf] {
            let result = execute(&sample_table(), format, dir.path(), "leads").unwrap();
            assert!(result.artifact.unwrap().exists());
        }
    }
}
