use super::TableData;
use crate::error::{OpsError, Result};
use std::io::Write;

/// Writes the table as CSV: header row first, RFC-4180-style quoting.
pub fn write<W: Write>(table: &TableData, mut writer: W) -> Result<()> {
    write_row(&mut writer, &table.columns)?;
    for row in &table.rows {
        write_row(&mut writer, row)?;
    }
    writer.flush().map_err(OpsError::Io)
}

fn write_row<W: Write>(writer: &mut W, cells: &[String]) -> Result<()> {
    let line = cells
        .iter()
        .map(|c| quote(c))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{}", line).map_err(OpsError::Io)
}

/// Quotes a field when it contains a comma, quote, or newline. Embedded
/// quotes double per RFC 4180.
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<&str>>) -> TableData {
        TableData::new(
            "Test",
            vec!["a".to_string(), "b".to_string()],
            rows.into_iter()
                .map(|r| r.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }

    #[test]
    fn test_plain_rows() {
        let mut buf = Vec::new();
        write(&table(vec![vec!["1", "x"], vec!["2", "y"]]), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\n1,x\n2,y\n");
    }

    #[test]
    fn test_quoting() {
        let mut buf = Vec::new();
        write(&table(vec![vec!["has,comma", "has \"quote\""]]), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\"has,comma\""));
        assert!(out.contains("\"has \"\"quote\"\"\""));
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let mut buf = Vec::new();
        write(&table(vec![]), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\n");
    }
}
