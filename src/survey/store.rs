use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{ChartPoint, SleepRecord, UpsertOutcome};

use super::SurveyConfig;

/// Recoverable domain errors. A duplicate date is not one of them; that case
/// is reported as [`UpsertOutcome::Conflict`] and resolved by the caller.
#[derive(Debug, Error, PartialEq)]
pub enum SurveyError {
    #[error("sleep duration {hours} h is outside the allowed range")]
    DurationOutOfRange { hours: f64 },
    #[error("tiredness score {score} is outside the allowed range")]
    TirednessOutOfRange { score: u8 },
    #[error("no sleep record exists for {date}")]
    NoRecordForDate { date: NaiveDate },
}

/// In-memory table of per-date sleep durations, unique by date.
///
/// Submitting a date that already holds a different value does not mutate the
/// table; the caller gets [`UpsertOutcome::Conflict`] back and must confirm
/// with [`SleepRecordStore::overwrite`] in a second, explicit step.
#[derive(Debug, Clone, Default)]
pub struct SleepRecordStore {
    records: BTreeMap<NaiveDate, f64>,
    config: SurveyConfig,
}

impl SleepRecordStore {
    pub fn new(config: SurveyConfig) -> Self {
        Self {
            records: BTreeMap::new(),
            config,
        }
    }

    /// Insert a new record for `date`, or report what stands in the way.
    pub fn upsert(
        &mut self,
        date: NaiveDate,
        duration_hours: f64,
    ) -> Result<UpsertOutcome, SurveyError> {
        self.check_duration(duration_hours)?;

        match self.records.get(&date) {
            None => {
                self.records.insert(date, duration_hours);
                Ok(UpsertOutcome::Inserted)
            }
            Some(&existing) if self.same_duration(existing, duration_hours) => {
                Ok(UpsertOutcome::Unchanged)
            }
            Some(&existing) => Ok(UpsertOutcome::Conflict {
                existing_hours: existing,
            }),
        }
    }

    /// The confirmed second step after a conflict. The record must exist.
    pub fn overwrite(
        &mut self,
        date: NaiveDate,
        duration_hours: f64,
    ) -> Result<(), SurveyError> {
        self.check_duration(duration_hours)?;

        match self.records.get_mut(&date) {
            Some(slot) => {
                *slot = duration_hours;
                Ok(())
            }
            None => Err(SurveyError::NoRecordForDate { date }),
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.records.get(&date).copied()
    }

    /// All records sorted by date. Newest first when `descending_by_date`.
    pub fn list_ordered(&self, descending_by_date: bool) -> Vec<SleepRecord> {
        let records = self.records.iter().map(|(&date, &duration_hours)| SleepRecord {
            date,
            duration_hours,
        });

        if descending_by_date {
            records.rev().collect()
        } else {
            records.collect()
        }
    }

    /// Ascending series for the duration-over-time chart.
    pub fn chart_series(&self) -> Vec<ChartPoint> {
        self.records
            .iter()
            .map(|(&date, &duration_hours)| ChartPoint {
                date,
                duration_hours,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    fn check_duration(&self, hours: f64) -> Result<(), SurveyError> {
        if !hours.is_finite()
            || hours < self.config.min_duration_hours
            || hours > self.config.max_duration_hours
        {
            return Err(SurveyError::DurationOutOfRange { hours });
        }
        Ok(())
    }

    fn same_duration(&self, a: f64, b: f64) -> bool {
        // Durations only ever arrive on the slider grid, so half a step
        // cleanly separates "same value" from "changed value".
        (a - b).abs() < self.config.duration_step_hours / 2.0
    }
}
