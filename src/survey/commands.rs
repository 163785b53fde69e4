use chrono::NaiveDate;
use tauri::State;

use crate::{
    models::{ChartPoint, SleepRecord, SurveyAnswers, UpsertOutcome},
    survey::SurveySnapshot,
    AppState,
};

#[tauri::command]
pub async fn get_survey_snapshot(state: State<'_, AppState>) -> Result<SurveySnapshot, String> {
    Ok(state.survey.snapshot().await)
}

#[tauri::command]
pub async fn record_sleep_time(
    state: State<'_, AppState>,
    date: NaiveDate,
    duration_hours: f64,
) -> Result<UpsertOutcome, String> {
    state
        .survey
        .record_entry(date, duration_hours)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn overwrite_sleep_time(
    state: State<'_, AppState>,
    date: NaiveDate,
    duration_hours: f64,
) -> Result<SurveySnapshot, String> {
    state
        .survey
        .confirm_overwrite(date, duration_hours)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn save_survey_answers(
    state: State<'_, AppState>,
    answers: SurveyAnswers,
) -> Result<SurveySnapshot, String> {
    state
        .survey
        .save_answers(answers)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_sleep_records(
    state: State<'_, AppState>,
    descending_by_date: Option<bool>,
) -> Result<Vec<SleepRecord>, String> {
    Ok(state
        .survey
        .list_records(descending_by_date.unwrap_or(true))
        .await)
}

#[tauri::command]
pub async fn sleep_chart_series(state: State<'_, AppState>) -> Result<Vec<ChartPoint>, String> {
    Ok(state.survey.chart_series().await)
}
