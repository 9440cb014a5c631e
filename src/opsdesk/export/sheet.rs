use super::TableData;
use crate::error::{OpsError, Result};
use std::io::Write;

/// Writes the table as a SpreadsheetML 2003 workbook (`.xls`), the plain-XML
/// dialect Excel and LibreOffice both open directly.
pub fn write<W: Write>(table: &TableData, mut writer: W) -> Result<()> {
    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#).map_err(OpsError::Io)?;
    writeln!(
        writer,
        r#"<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet" xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">"#
    )
    .map_err(OpsError::Io)?;
    writeln!(
        writer,
        r#" <Worksheet ss:Name="{}">"#,
        escape(&worksheet_name(&table.title))
    )
    .map_err(OpsError::Io)?;
    writeln!(writer, "  <Table>").map_err(OpsError::Io)?;

    write_row(&mut writer, &table.columns)?;
    for row in &table.rows {
        write_row(&mut writer, row)?;
    }

    writeln!(writer, "  </Table>").map_err(OpsError::Io)?;
    writeln!(writer, " </Worksheet>").map_err(OpsError::Io)?;
    writeln!(writer, "</Workbook>").map_err(OpsError::Io)?;
    writer.flush().map_err(OpsError::Io)
}

fn write_row<W: Write>(writer: &mut W, cells: &[String]) -> Result<()> {
    writeln!(writer, "   <Row>").map_err(OpsError::Io)?;
    for cell in cells {
        writeln!(
            writer,
            r#"    <Cell><Data ss:Type="String">{}</Data></Cell>"#,
            escape(cell)
        )
        .map_err(OpsError::Io)?;
    }
    writeln!(writer, "   </Row>").map_err(OpsError::Io)
}

// Worksheet names cap at 31 chars and reject a handful of characters.
fn worksheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '\\' | '/' | '*' | '[' | ']' | ':' | '?' => ' ',
            other => other,
        })
        .collect();
    cleaned.chars().take(31).collect()
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
