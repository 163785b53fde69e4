use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single night's recorded sleep, keyed by calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecord {
    pub date: NaiveDate,
    pub duration_hours: f64,
}

/// One point of the duration-over-time chart (x = date, y = hours).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub duration_hours: f64,
}

/// Result of submitting a (date, duration) pair.
///
/// `Conflict` is a decision point, not an error: the store keeps the existing
/// value until the caller confirms with an explicit overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum UpsertOutcome {
    Inserted,
    Unchanged,
    #[serde(rename_all = "camelCase")]
    Conflict { existing_hours: f64 },
}
