//! Readings table for an individual's detail view.
//!
//! Renders a reverse-chronological list of readings with date and time
//! columns derived from the creation timestamp, plus the SpO2 and heart-rate
//! values verbatim. The input order is trusted (oldest first, as returned by
//! the API) and simply reversed; there is no pagination or re-sorting.

use chrono::Local;

use crate::model::Oximeter;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingRow {
    /// Reading identifier (row key).
    pub id: String,
    /// Local-time date of the reading.
    pub date: String,
    /// Local-time clock time of the reading.
    pub time: String,
    /// SpO2 value verbatim.
    pub spo2: String,
    /// Heart-rate value verbatim.
    pub heart_rate: String,
}

/// Derive table rows from readings, newest first.
#[must_use]
pub fn rows(readings: &[Oximeter]) -> Vec<ReadingRow> {
    readings
        .iter()
        .rev()
        .map(|reading| {
            let local = reading.created_at.with_timezone(&Local);
            ReadingRow {
                id: reading.id.clone(),
                date: local.format("%x").to_string(),
                time: local.format("%X").to_string(),
                spo2: reading.spo2.to_string(),
                heart_rate: reading.heart_rate.to_string(),
            }
        })
        .collect()
}

/// Render the readings table as text.
#[must_use]
pub fn render(readings: &[Oximeter]) -> String {
    let rows = rows(readings);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:<10} {:>6} {:>11}\n",
        "Date", "Time", "SpO2", "Heart Rate"
    ));
    out.push_str(&format!("{:-<12} {:-<10} {:->6} {:->11}\n", "", "", "", ""));
    for row in &rows {
        out.push_str(&format!(
            "{:<12} {:<10} {:>6} {:>11}\n",
            row.date, row.time, row.spo2, row.heart_rate
        ));
    }
    if rows.is_empty() {
        out.push_str("(no readings)\n");
    }
    out
}
