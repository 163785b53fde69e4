use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use tokio::sync::Mutex;

use crate::models::{ChartPoint, SleepRecord, SurveyAnswers, UpsertOutcome};

use super::{
    state::{SurveySession, SurveySnapshot},
    SurveyConfig,
};

/// Cloneable handle around the session state. One instance lives in Tauri's
/// managed state for the lifetime of the app process.
///
/// The mutex is there because managed state must be `Sync`; within one session
/// there is exactly one mutator per interaction cycle.
#[derive(Clone)]
pub struct SurveyController {
    session: Arc<Mutex<SurveySession>>,
}

impl SurveyController {
    pub fn new(config: SurveyConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(SurveySession::new(config))),
        }
    }

    pub async fn snapshot(&self) -> SurveySnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn record_entry(
        &self,
        date: NaiveDate,
        duration_hours: f64,
    ) -> Result<UpsertOutcome> {
        let mut session = self.session.lock().await;
        let outcome = session.record_entry(date, duration_hours)?;

        match outcome {
            UpsertOutcome::Inserted => {
                info!("Recorded {duration_hours:.1} h of sleep for {date}");
            }
            UpsertOutcome::Unchanged => {
                info!("Sleep for {date} already recorded at {duration_hours:.1} h");
            }
            UpsertOutcome::Conflict { existing_hours } => {
                warn!(
                    "Sleep for {date} already recorded at {existing_hours:.1} h; awaiting overwrite confirmation"
                );
            }
        }

        Ok(outcome)
    }

    pub async fn confirm_overwrite(
        &self,
        date: NaiveDate,
        duration_hours: f64,
    ) -> Result<SurveySnapshot> {
        let mut session = self.session.lock().await;
        session.confirm_overwrite(date, duration_hours)?;
        info!("Overwrote sleep for {date} with {duration_hours:.1} h");
        Ok(session.snapshot())
    }

    pub async fn save_answers(&self, answers: SurveyAnswers) -> Result<SurveySnapshot> {
        let mut session = self.session.lock().await;
        session.save_answers(answers)?;
        info!("Saved survey answers for session {}", session.session_id());
        Ok(session.snapshot())
    }

    pub async fn list_records(&self, descending_by_date: bool) -> Vec<SleepRecord> {
        self.session.lock().await.list_records(descending_by_date)
    }

    pub async fn chart_series(&self) -> Vec<ChartPoint> {
        self.session.lock().await.chart_series()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rating, RoomTemperature};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn record_then_conflict_then_confirm() {
        let controller = SurveyController::new(SurveyConfig::default());

        let outcome = controller.record_entry(date(2024, 1, 1), 7.0).await.unwrap();
        assert_eq!(outcome, UpsertOutcome::Inserted);

        let outcome = controller.record_entry(date(2024, 1, 1), 8.0).await.unwrap();
        assert_eq!(outcome, UpsertOutcome::Conflict { existing_hours: 7.0 });

        let snapshot = controller
            .confirm_overwrite(date(2024, 1, 1), 8.0)
            .await
            .unwrap();
        assert_eq!(snapshot.records[0].duration_hours, 8.0);
    }

    #[tokio::test]
    async fn out_of_range_duration_is_an_error() {
        let controller = SurveyController::new(SurveyConfig::default());
        assert!(controller.record_entry(date(2024, 1, 1), 12.5).await.is_err());
        assert!(controller.snapshot().await.is_empty);
    }

    #[tokio::test]
    async fn answers_flow_into_the_snapshot() {
        let controller = SurveyController::new(SurveyConfig::default());
        let snapshot = controller
            .save_answers(SurveyAnswers {
                quality: Rating::Bad,
                disturbances: Vec::new(),
                free_text: String::new(),
                mood: Rating::VeryBad,
                tiredness: 8,
                room_temperature: RoomTemperature::Hot,
                noise_present: true,
                room_dark_enough: false,
            })
            .await
            .unwrap();

        assert_eq!(snapshot.answers.unwrap().tiredness, 8);
        assert!(!snapshot.summary.is_empty());
    }

    #[tokio::test]
    async fn clones_share_one_session() {
        let controller = SurveyController::new(SurveyConfig::default());
        let clone = controller.clone();

        controller.record_entry(date(2024, 5, 1), 6.0).await.unwrap();
        assert_eq!(clone.list_records(true).await.len(), 1);
    }
}
