use super::TableData;
use crate::error::{OpsError, Result};
use std::io::Write;

// A4 portrait, 10pt Helvetica, one text line per record.
const PAGE_WIDTH: u32 = 595;
const PAGE_HEIGHT: u32 = 842;
const TOP_Y: u32 = 800;
const LEADING: u32 = 14;
const MAX_LINES: usize = 53;

/// Writes the table as a minimal single-page PDF: a title line, a header
/// line, and one line per row. Rows beyond the page capacity collapse into a
/// trailing "... and N more" line rather than spilling off the page.
pub fn write<W: Write>(table: &TableData, mut writer: W) -> Result<()> {
    let lines = layout_lines(table);
    let content = content_stream(&lines);

    let mut buf: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();

    buf.extend_from_slice(b"%PDF-1.4\n");

    offsets.push(buf.len());
    buf.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    offsets.push(buf.len());
    buf.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");

    offsets.push(buf.len());
    buf.extend_from_slice(
        format!(
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>\nendobj\n",
            PAGE_WIDTH, PAGE_HEIGHT
        )
        .as_bytes(),
    );

    offsets.push(buf.len());
    buf.extend_from_slice(
        b"4 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n",
    );

    offsets.push(buf.len());
    buf.extend_from_slice(format!("5 0 obj\n<< /Length {} >>\nstream\n", content.len()).as_bytes());
    buf.extend_from_slice(content.as_bytes());
    buf.extend_from_slice(b"endstream\nendobj\n");

    let xref_offset = buf.len();
    buf.extend_from_slice(b"xref\n0 6\n0000000000 65535 f \n");
    for offset in &offsets {
        buf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    buf.extend_from_slice(
        format!(
            "trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            xref_offset
        )
        .as_bytes(),
    );

    writer.write_all(&buf).map_err(OpsError::Io)?;
    writer.flush().map_err(OpsError::Io)
}

fn layout_lines(table: &TableData) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(table.title.clone());
    lines.push(String::new());
    lines.push(table.columns.join("  |  "));

    let capacity = MAX_LINES.saturating_sub(lines.len() + 1);
    for (i, row) in table.rows.iter().enumerate() {
        if i == capacity && table.rows.len() > capacity + 1 {
            lines.push(format!("... and {} more", table.rows.len() - i));
            break;
        }
        lines.push(row.join("  |  "));
    }
    lines
}

fn content_stream(lines: &[String]) -> String {
    let mut out = String::new();
    out.push_str("BT\n/F1 10 Tf\n");
    out.push_str(&format!("{} TL\n50 {} Td\n", LEADING, TOP_Y));
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str("T*\n");
        }
        out.push_str(&format!("({}) Tj\n", escape(line)));
    }
    out.push_str("ET\n");
    out
}

// PDF string literals reserve backslash and parentheses.
fn escape(line: &str) -> String {
    line.chars()
        .flat_map(|c| match c {
            '\\' => vec!['\\', '\\'],
            '(' => vec!['\\', '('],
            ')' => vec!['\\', ')'],
            // Type1 text strings are latin-1; anything wider degrades to '?'
            c if (c as u32) > 255 => vec!['?'],
            c => vec![c],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize) -> TableData {
        TableData::new(
            "KPI Summary",
            vec!["metric".to_string(), "value".to_string()],
            (0..rows)
                .map(|i| vec![format!("metric {}", i), i.to_string()])
                .collect(),
        )
    }

    #[test]
    fn test_valid_pdf_skeleton() {
        let mut buf = Vec::new();
        write(&table(3), &mut buf).unwrap();
        let out = String::from_utf8_lossy(&buf);
        assert!(out.starts_with("%PDF-1.4"));
        assert!(out.contains("/Type /Catalog"));
        assert!(out.contains("(KPI Summary) Tj"));
        assert!(out.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_stream_length_matches() {
        let mut buf = Vec::new();
        write(&table(2), &mut buf).unwrap();
        let out = String::from_utf8_lossy(&buf);
        let length: usize = out
            .split("/Length ")
            .nth(1)
            .and_then(|s| s.split(' ').next())
            .and_then(|s| s.parse().ok())
            .unwrap();
        let start = out.find("stream\n").unwrap() + "stream\n".len();
        let end = out.find("\nendstream").unwrap() + 1;
        assert_eq!(end - start, length);
    }

    #[test]
    fn test_overflow_collapses() {
        let mut buf = Vec::new();
        write(&table(200), &mut buf).unwrap();
        let out = String::from_utf8_lossy(&buf);
        assert!(out.contains("more) Tj"));
    }

    #[test]
    fn test_escaping_parens() {
        let t = TableData::new(
            "T(1)",
            vec!["c".to_string()],
            vec![vec!["a\\b".to_string()]],
        );
        let mut buf = Vec::new();
        write(&t, &mut buf).unwrap();
        let out = String::from_utf8_lossy(&buf);
        assert!(out.contains(r"(T\(1\)) Tj"));
        assert!(out.contains(r"(a\\b) Tj"));
    }
}
