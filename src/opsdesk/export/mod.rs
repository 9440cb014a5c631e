//! Artifact writers for the export dispatcher.
//!
//! Each writer takes the same [`TableData`] projection of a visible list and
//! produces one artifact. The writers are deliberately small hand-rolled
//! encoders behind one seam: RFC-4180-style CSV, SpreadsheetML 2003 XML for
//! `.xls`, and a minimal single-page PDF. Swapping one for a real library
//! later only touches this module.

use crate::error::Result;
use crate::model::Record;
use std::io::Write;

pub mod csv;
pub mod pdf;
pub mod sheet;

/// Requested export format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xls,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xls => "xls",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "xls" | "xlsx" | "excel" => Ok(ExportFormat::Xls),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Presentation-agnostic projection of a visible list: a header row plus one
/// row of cells per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new(title: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows,
        }
    }

    /// Projects the currently visible records of one module.
    pub fn from_records<R: Record>(title: impl Into<String>, records: &[&R]) -> Self {
        Self {
            title: title.into(),
            columns: R::COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: records.iter().map(|r| r.cells()).collect(),
        }
    }
}

/// Writes `table` in `format` to `writer`.
pub fn write_artifact<W: Write>(table: &TableData, format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Csv => csv::write(table, writer),
        ExportFormat::Xls => sheet::write(table, writer),
        ExportFormat::Pdf => pdf::write(table, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_parsing() {
        assert_eq!(ExportFormat::from_str("csv"), Ok(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_str("xls"), Ok(ExportFormat::Xls));
        assert_eq!(ExportFormat::from_str("xlsx"), Ok(ExportFormat::Xls));
        assert_eq!(ExportFormat::from_str("excel"), Ok(ExportFormat::Xls));
        assert_eq!(ExportFormat::from_str("pdf"), Ok(ExportFormat::Pdf));
        assert!(ExportFormat::from_str("doc").is_err());
    }

    #[test]
    fn test_from_records_projection() {
        use crate::records::expenses;
        let seed = expenses::seed();
        let refs: Vec<_> = seed.iter().collect();
        let table = TableData::from_records("Expenses", &refs);
        assert_eq!(table.columns, vec!["id", "name", "category", "active"]);
        assert_eq!(table.rows.len(), seed.len());
        assert_eq!(table.rows[0][1], "Cab Fare");
    }
}
