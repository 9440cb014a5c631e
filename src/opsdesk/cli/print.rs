use super::styles;
use chrono::{DateTime, Utc};
use colored::Colorize;
use opsdesk::backend::{ImportReport, ImportStatus, KpiReport};
use opsdesk::commands::{CmdMessage, MessageLevel};
use opsdesk::model::Record;
use opsdesk::query::{ListView, ViewMode};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 36;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_list<R: Record>(records: &[R], mode: ViewMode) {
    if records.is_empty() {
        println!("{}", ListView::<R>::empty_message());
        return;
    }
    match mode {
        ViewMode::Table => print_table(records),
        ViewMode::Cards => print_cards(records),
    }
}

fn print_table<R: Record>(records: &[R]) {
    let has_time = records.iter().any(|r| r.created_at().is_some());

    let mut header: Vec<String> = R::COLUMNS.iter().map(|c| c.to_string()).collect();
    if has_time {
        header.push("created".to_string());
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len());
    for record in records {
        let mut cells: Vec<String> = record
            .cells()
            .into_iter()
            .map(|c| truncate_to_width(&c, MAX_CELL_WIDTH))
            .collect();
        if has_time {
            cells.push(
                record
                    .created_at()
                    .map(format_time_ago)
                    .unwrap_or_default(),
            );
        }
        rows.push(cells);
    }

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let header_line = header
        .iter()
        .enumerate()
        .map(|(i, h)| pad_to_width(h, widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", styles::HEADER.apply_to(header_line));

    let time_index = has_time.then(|| header.len() - 1);
    for row in &rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let padded = pad_to_width(cell, widths[i]);
                if time_index == Some(i) {
                    padded.dimmed().to_string()
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line);
    }
}

fn print_cards<R: Record>(records: &[R]) {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{}  {}",
            styles::CARD_TITLE.apply_to(record.title()),
            record.id().dimmed()
        );
        for column in R::COLUMNS {
            if *column == "id" {
                continue;
            }
            if let Some(value) = record.field(column) {
                println!("  {}: {}", column, value);
            }
        }
        if let Some(created) = record.created_at() {
            println!("  {}", format_time_ago(created).dimmed());
        }
    }
}

pub(super) fn print_report(report: &KpiReport) {
    println!(
        "{}",
        styles::HEADER.apply_to(format!("KPI Summary {} to {}", report.from, report.to))
    );
    let rows = report.rows();
    let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    for (label, value) in rows {
        println!(
            "{}  {}",
            pad_to_width(&label, label_width),
            styles::METRIC.apply_to(value)
        );
    }
}

pub(super) fn print_import(report: &ImportReport) {
    let status_line = format!("Import status: {}", report.status.as_str());
    match report.status {
        ImportStatus::Completed => println!("{}", status_line.green()),
        ImportStatus::CompletedWithErrors => println!("{}", status_line.yellow()),
        ImportStatus::Failed => println!("{}", status_line.red()),
    }
    println!("{} records imported", report.successful_imports);
    for error in &report.errors {
        println!("  {}", error.yellow());
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    match duration.to_std() {
        Ok(std_duration) => Formatter::new().convert(std_duration),
        Err(_) => "just now".to_string(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
