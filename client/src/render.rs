//! Plain-text rendering for the terminal.

use mediashelf::{Record, StatsSummary, NO_DATA};

const HEADERS: [&str; 7] = ["ID", "TITLE", "TYPE", "GENRE", "YEAR", "RATING", "STATUS"];

/// Table of records, one per line, columns padded to the widest cell.
pub fn record_table(records: &[&Record]) -> String {
    if records.is_empty() {
        return "No records.".to_string();
    }

    let rows: Vec<[String; 7]> = records
        .iter()
        .map(|r| {
            [
                r.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                r.title.clone(),
                r.kind.clone(),
                r.genre.clone(),
                number_or_dash(r.year),
                number_or_dash(r.rating),
                r.status.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![format_row(&HEADERS.map(String::from), &widths)];
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}

fn format_row(cells: &[String; 7], widths: &[usize; 7]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn number_or_dash(value: Option<i64>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |n| n.to_string())
}

/// Statistics block: headline figures, then one line per status.
pub fn stats_block(summary: &StatsSummary) -> String {
    let mut lines = vec![
        format!("Total:      {}", summary.total),
        format!("Completed:  {}", summary.completed_count),
        format!("Avg rating: {}", summary.average_rating_label()),
        format!("Top genre:  {}", summary.top_genre_label()),
        String::new(),
    ];
    lines.extend(
        summary
            .status_breakdown
            .iter()
            .map(|entry| format!("{}: {}", entry.status, entry.count)),
    );
    lines.join("\n")
}

/// Violation messages on one line, as a form error banner shows them.
pub fn violations(messages: &[String]) -> String {
    messages.join(" ")
}

/// Confirmation question before deleting.
pub fn delete_prompt(record: Option<&Record>) -> String {
    let title = record.map_or("this record", |r| r.title.as_str());
    format!("Delete \"{}\"? This cannot be undone.", title)
}
