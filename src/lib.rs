mod models;
mod survey;

use log::info;
use survey::{
    commands::{
        get_survey_snapshot, list_sleep_records, overwrite_sleep_time, record_sleep_time,
        save_survey_answers, sleep_chart_series,
    },
    SurveyConfig, SurveyController,
};
use tauri::Manager;

pub(crate) struct AppState {
    pub(crate) survey: SurveyController,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Nightlog starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // One survey session per app run; nothing outlives the process.
            app.manage(AppState {
                survey: SurveyController::new(SurveyConfig::default()),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_survey_snapshot,
            record_sleep_time,
            overwrite_sleep_time,
            save_survey_answers,
            list_sleep_records,
            sleep_chart_series,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
