use crate::backend::{Backend, ReportRequest};
use crate::commands::{export, CmdMessage, CmdResult};
use crate::error::Result;
use crate::export::ExportFormat;
use chrono::NaiveDate;
use std::path::Path;

/// Generates the KPI report for a date range. Range validation happens
/// before the backend is called; a missing or inverted range never produces
/// a partial report. With a format, the report is also written as an
/// artifact.
pub fn execute<B: Backend>(
    backend: &B,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    format: Option<ExportFormat>,
    out_dir: &Path,
) -> Result<CmdResult<()>> {
    let request = ReportRequest::new(from, to)?;
    let report = backend.generate_report(request)?;

    let mut result = CmdResult::default();
    if let Some(format) = format {
        let exported = export::execute(&report.to_table(), format, out_dir, "kpi-report")?;
        result.artifact = exported.artifact;
        result.messages = exported.messages;
    } else {
        result.add_message(CmdMessage::success(format!(
            "Report generated for {} to {}",
            request.from, request.to
        )));
    }
    Ok(result.with_report(report))
}

/// Summary export over a date range. Unlike list exports this ignores any
/// on-screen filters; the backend computes the rows from the full dataset.
pub fn summary<B: Backend>(
    backend: &B,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    format: ExportFormat,
    out_dir: &Path,
) -> Result<CmdResult<()>> {
    let request = ReportRequest::new(from, to)?;
    let table = backend.summary_export(request)?;
    export::execute(&table, format, out_dir, "summary")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SimulatedBackend;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_report_without_range_fails_before_backend() {
        let dir = TempDir::new().unwrap();
        let backend = SimulatedBackend::new();
        let err = execute(&backend, None, None, None, dir.path()).unwrap_err();
        assert!(err.to_string().contains("date range"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_report_generated_without_artifact() {
        let dir = TempDir::new().unwrap();
        let backend = SimulatedBackend::new();
        let today = Utc::now().date_naive();
        let result = execute(
            &backend,
            Some(today - Duration::days(60)),
            Some(today),
            None,
            dir.path(),
        )
        .unwrap();
        assert!(result.report.is_some());
        assert!(result.artifact.is_none());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn test_report_with_artifact() {
        let dir = TempDir::new().unwrap();
        let backend = SimulatedBackend::new();
        let today = Utc::now().date_naive();
        let result = execute(
            &backend,
            Some(today - Duration::days(60)),
            Some(today),
            Some(ExportFormat::Csv),
            dir.path(),
        )
        .unwrap();
        let path = result.artifact.unwrap();
        assert!(path.exists());
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Conversion Rate"));
    }

    #[test]
    fn test_summary_export_writes_artifact() {
        let dir = TempDir::new().unwrap();
        let backend = SimulatedBackend::new();
        let today = Utc::now().date_naive();
        let result = summary(
            &backend,
            Some(today - Duration::days(60)),
            Some(today),
            ExportFormat::Xls,
            dir.path(),
        )
        .unwrap();
        assert!(result.artifact.unwrap().exists());
    }
}
