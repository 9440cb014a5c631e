use crate::backend::{
    Backend, BulkImportResult, ImportReport, ImportRequest, ImportStatus,
};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OpsError, Result};
use crate::records::leads::{Lead, LeadStatus};
use crate::store::DataStore;
use chrono::Utc;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Expected column order of an import file, after the header row.
pub const IMPORT_COLUMNS: &[&str] = &[
    "company", "contact", "email", "phone", "status", "source", "owner",
];

/// Runs a bulk lead import from a CSV file. Valid rows are inserted into the
/// store; the returned report carries the success count and every per-row
/// error, in row order.
pub fn execute<B, S>(backend: &B, store: &mut S, path: &Path) -> Result<CmdResult<Lead>>
where
    B: Backend,
    S: DataStore<Lead>,
{
    let content = fs::read_to_string(path).map_err(OpsError::Io)?;
    let rows = parse_csv(&content);
    if rows.is_empty() {
        return Err(OpsError::Validation(format!(
            "No data rows found in {}",
            path.display()
        )));
    }

    let outcome = backend.bulk_import(ImportRequest { rows })?;
    for lead in &outcome.imported {
        store.insert(lead.clone())?;
    }

    let mut result = CmdResult::default().with_affected(outcome.imported);
    let summary = format!(
        "{}: {} records imported, {} errors",
        outcome.report.status.as_str(),
        outcome.report.successful_imports,
        outcome.report.errors.len()
    );
    match outcome.report.status {
        ImportStatus::Failed => result.add_message(CmdMessage::error(summary)),
        _ => result.add_message(CmdMessage::success(summary)),
    }
    Ok(result.with_import(outcome.report))
}

/// Row-by-row validation shared with the simulated backend. Rows that pass
/// become new leads with minted ids; rows that fail contribute one error
/// string each and are skipped. One bad row never aborts the batch.
pub fn validate_rows(rows: &[Vec<String>], existing: &[Lead]) -> Result<BulkImportResult> {
    let mut imported: Vec<Lead> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let line = index + 2; // 1-based, after the header row
        match validate_row(row, existing, &imported) {
            Ok(lead) => imported.push(lead),
            Err(reason) => errors.push(format!("Row {}: {}", line, reason)),
        }
    }

    let status = if imported.is_empty() {
        ImportStatus::Failed
    } else if errors.is_empty() {
        ImportStatus::Completed
    } else {
        ImportStatus::CompletedWithErrors
    };

    Ok(BulkImportResult {
        report: ImportReport {
            status,
            successful_imports: imported.len(),
            errors,
        },
        imported,
    })
}

fn validate_row(
    row: &[String],
    existing: &[Lead],
    accepted: &[Lead],
) -> std::result::Result<Lead, String> {
    if row.len() != IMPORT_COLUMNS.len() {
        return Err(format!(
            "expected {} columns, found {}",
            IMPORT_COLUMNS.len(),
            row.len()
        ));
    }
    for (column, value) in IMPORT_COLUMNS.iter().zip(row) {
        if matches!(*column, "company" | "contact" | "email") && value.trim().is_empty() {
            return Err(format!("missing {}", column));
        }
    }

    let email = row[2].trim();
    if existing
        .iter()
        .chain(accepted)
        .any(|l| l.email.eq_ignore_ascii_case(email))
    {
        return Err(format!("duplicate email {}", email));
    }

    let status: LeadStatus = row[4].trim().parse()?;

    Ok(Lead {
        id: mint_id(),
        company: row[0].trim().to_string(),
        contact: row[1].trim().to_string(),
        email: email.to_string(),
        phone: row[3].trim().to_string(),
        status,
        source: row[5].trim().to_string(),
        owner: row[6].trim().to_string(),
        created_at: Utc::now(),
    })
}

fn mint_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("LD-{}", &uuid[..8])
}

/// Minimal CSV reader for import files: comma-separated, double quotes for
/// embedded commas, `""` for a literal quote. The header row is skipped.
fn parse_csv(content: &str) -> Vec<Vec<String>> {
    content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            other => field.push(other),
        }
    }
    fields.push(field);
    fields
}
