use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{ChartPoint, Disturbance, SleepRecord, SurveyAnswers, UpsertOutcome};

use super::{
    store::{SleepRecordStore, SurveyError},
    summary::{self, SummaryLine},
    SurveyConfig,
};

/// Everything one running survey session holds: the record store, the latest
/// saved answers, and the last submitted entry echoed back by the summary.
///
/// Created when the app starts and dropped with the process; nothing here
/// survives the session.
#[derive(Debug)]
pub struct SurveySession {
    session_id: String,
    started_at: DateTime<Utc>,
    config: SurveyConfig,
    store: SleepRecordStore,
    answers: Option<SurveyAnswers>,
    last_entry: Option<SleepRecord>,
}

/// Read-only view handed to the display surface after every interaction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySnapshot {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub is_empty: bool,
    /// Newest date first, for the records table
    pub records: Vec<SleepRecord>,
    /// Ascending by date, for the line chart
    pub chart: Vec<ChartPoint>,
    pub answers: Option<SurveyAnswers>,
    pub summary: Vec<SummaryLine>,
}

impl SurveySession {
    pub fn new(config: SurveyConfig) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            store: SleepRecordStore::new(config.clone()),
            config,
            answers: None,
            last_entry: None,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Submit a (date, duration) pair. The submitted values are echoed by the
    /// summary even when the store reports a conflict; the store itself only
    /// changes on `Inserted`.
    pub fn record_entry(
        &mut self,
        date: NaiveDate,
        duration_hours: f64,
    ) -> Result<UpsertOutcome, SurveyError> {
        let outcome = self.store.upsert(date, duration_hours)?;
        self.last_entry = Some(SleepRecord {
            date,
            duration_hours,
        });
        Ok(outcome)
    }

    /// The confirmed second step after [`UpsertOutcome::Conflict`].
    pub fn confirm_overwrite(
        &mut self,
        date: NaiveDate,
        duration_hours: f64,
    ) -> Result<(), SurveyError> {
        self.store.overwrite(date, duration_hours)?;
        self.last_entry = Some(SleepRecord {
            date,
            duration_hours,
        });
        Ok(())
    }

    /// Replace the answer snapshot. Duplicate disturbances collapse to one,
    /// keeping first-occurrence order.
    pub fn save_answers(&mut self, mut answers: SurveyAnswers) -> Result<(), SurveyError> {
        if answers.tiredness > self.config.max_tiredness {
            return Err(SurveyError::TirednessOutOfRange {
                score: answers.tiredness,
            });
        }

        dedup_disturbances(&mut answers.disturbances);
        self.answers = Some(answers);
        Ok(())
    }

    pub fn list_records(&self, descending_by_date: bool) -> Vec<SleepRecord> {
        self.store.list_ordered(descending_by_date)
    }

    pub fn chart_series(&self) -> Vec<ChartPoint> {
        self.store.chart_series()
    }

    pub fn snapshot(&self) -> SurveySnapshot {
        SurveySnapshot {
            session_id: self.session_id.clone(),
            started_at: self.started_at,
            is_empty: self.store.is_empty(),
            records: self.store.list_ordered(true),
            chart: self.store.chart_series(),
            answers: self.answers.clone(),
            summary: summary::render(self.last_entry.as_ref(), self.answers.as_ref()),
        }
    }
}

fn dedup_disturbances(disturbances: &mut Vec<Disturbance>) {
    let mut seen: Vec<Disturbance> = Vec::with_capacity(disturbances.len());
    disturbances.retain(|d| {
        if seen.contains(d) {
            false
        } else {
            seen.push(*d);
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rating, RoomTemperature};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session() -> SurveySession {
        SurveySession::new(SurveyConfig::default())
    }

    fn answers(tiredness: u8) -> SurveyAnswers {
        SurveyAnswers {
            quality: Rating::VeryGood,
            disturbances: Vec::new(),
            free_text: String::new(),
            mood: Rating::Good,
            tiredness,
            room_temperature: RoomTemperature::SlightlyCold,
            noise_present: false,
            room_dark_enough: true,
        }
    }

    #[test]
    fn snapshot_of_a_fresh_session() {
        let session = session();
        let snapshot = session.snapshot();

        assert!(snapshot.is_empty);
        assert!(snapshot.records.is_empty());
        assert!(snapshot.chart.is_empty());
        assert!(snapshot.answers.is_none());
        assert!(snapshot.summary.is_empty());
        assert!(!snapshot.session_id.is_empty());
    }

    #[test]
    fn snapshot_orders_records_and_chart_differently() {
        let mut session = session();
        session.record_entry(date(2024, 3, 10), 6.5).unwrap();
        session.record_entry(date(2024, 3, 11), 7.0).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.records[0].date, date(2024, 3, 11));
        assert_eq!(snapshot.chart[0].date, date(2024, 3, 10));
        assert!(!snapshot.is_empty);
    }

    #[test]
    fn conflict_keeps_store_but_echoes_submission() {
        let mut session = session();
        session.record_entry(date(2024, 1, 1), 7.0).unwrap();

        let outcome = session.record_entry(date(2024, 1, 1), 8.0).unwrap();
        assert_eq!(outcome, UpsertOutcome::Conflict { existing_hours: 7.0 });

        let snapshot = session.snapshot();
        assert_eq!(snapshot.records[0].duration_hours, 7.0);
        // The summary echoes what the user typed, matching the live form
        assert_eq!(snapshot.summary[1].value, "8.0 hours");

        session.confirm_overwrite(date(2024, 1, 1), 8.0).unwrap();
        assert_eq!(session.snapshot().records[0].duration_hours, 8.0);
    }

    #[test]
    fn tiredness_bounds_are_enforced() {
        let mut session = session();
        assert_eq!(
            session.save_answers(answers(11)),
            Err(SurveyError::TirednessOutOfRange { score: 11 })
        );
        assert!(session.save_answers(answers(0)).is_ok());
        assert!(session.save_answers(answers(10)).is_ok());
    }

    #[test]
    fn duplicate_disturbances_collapse_in_order() {
        let mut session = session();
        let mut submitted = answers(5);
        submitted.disturbances = vec![
            Disturbance::Noise,
            Disturbance::Caffeine,
            Disturbance::Noise,
            Disturbance::Caffeine,
        ];

        session.save_answers(submitted).unwrap();
        let saved = session.snapshot().answers.unwrap();
        assert_eq!(
            saved.disturbances,
            vec![Disturbance::Noise, Disturbance::Caffeine]
        );
    }

    #[test]
    fn saving_answers_replaces_the_previous_snapshot() {
        let mut session = session();
        session.save_answers(answers(2)).unwrap();
        session.save_answers(answers(9)).unwrap();

        assert_eq!(session.snapshot().answers.unwrap().tiredness, 9);
    }
}
