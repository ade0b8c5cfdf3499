//! Catalog statistics.
//!
//! [`summarize`] derives a [`StatsSummary`] from a slice of records. The
//! summary is recomputed from scratch on every call and never cached.
//!
//! # Metrics
//!
//! - `total` - every record, including ones with unknown statuses
//! - `completed_count` - records whose status is exactly `Completed`
//! - `average_rating` - mean rating over rated `Completed` records
//! - `top_genre` - most frequent trimmed genre; ties go to the genre seen first
//! - `status_breakdown` - one entry per [`Status::ALL`], zero counts included

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Record, Status};

/// Display sentinel for a metric with no data.
pub const NO_DATA: &str = "—";

/// Count of records for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize,
}

/// Aggregate view of a record collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total: usize,
    pub completed_count: usize,
    /// `None` when no completed record carries a rating.
    pub average_rating: Option<f64>,
    /// `None` when no record has a non-blank genre.
    pub top_genre: Option<String>,
    /// Always four entries, in [`Status::ALL`] order.
    pub status_breakdown: Vec<StatusCount>,
}

impl StatsSummary {
    /// Average rating with exactly one fractional digit, or [`NO_DATA`].
    pub fn average_rating_label(&self) -> String {
        self.average_rating
            .map(one_decimal)
            .unwrap_or_else(|| NO_DATA.to_string())
    }

    /// Top genre, or [`NO_DATA`].
    pub fn top_genre_label(&self) -> &str {
        self.top_genre.as_deref().unwrap_or(NO_DATA)
    }

    /// Count for a single status.
    pub fn count_for(&self, status: Status) -> usize {
        self.status_breakdown
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.count)
    }
}

/// Summarize a collection of records. Total over any input, including `[]`.
pub fn summarize(records: &[Record]) -> StatsSummary {
    let completed: Vec<&Record> = records
        .iter()
        .filter(|r| r.status == Status::Completed.as_str())
        .collect();

    // Summed as f64: store ratings are not range-checked and may be huge.
    let ratings: Vec<f64> = completed
        .iter()
        .filter_map(|r| r.rating)
        .map(|r| r as f64)
        .collect();
    let average_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    let status_breakdown = Status::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: records
                .iter()
                .filter(|r| r.status == status.as_str())
                .count(),
        })
        .collect();

    let summary = StatsSummary {
        total: records.len(),
        completed_count: completed.len(),
        average_rating,
        top_genre: top_genre(records),
        status_breakdown,
    };

    log::debug!(
        "summarized {} record(s): {} completed, top genre {}",
        summary.total,
        summary.completed_count,
        summary.top_genre_label()
    );

    summary
}

/// Most frequent trimmed genre. Counting keeps first-seen order so that on
/// a tie the genre inserted first wins, not whichever sorts or hashes first.
fn top_genre(records: &[Record]) -> Option<String> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<(&str, usize)> = Vec::new();

    for record in records {
        let genre = record.genre.trim();
        if genre.is_empty() {
            continue;
        }
        match index.get(genre) {
            Some(&slot) => tally[slot].1 += 1,
            None => {
                index.insert(genre, tally.len());
                tally.push((genre, 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (genre, count) in tally {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((genre, count));
        }
    }
    best.map(|(genre, _)| genre.to_string())
}

/// Fixed-point formatting with one fractional digit.
///
/// Rounds to the tenth nearest to the binary value; when the value sits
/// exactly halfway between two tenths it rounds away from zero (8.25 ->
/// "8.3"), where `{:.1}` alone would round to even.
fn one_decimal(value: f64) -> String {
    let scaled = value * 10.0;
    let exact = value.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled.fract().abs() == 0.5 {
        format!("{:.1}", scaled.round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
