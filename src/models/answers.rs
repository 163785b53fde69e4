//! Answer models for the qualitative survey sections.

use serde::{Deserialize, Serialize};

/// Five-point scale shared by the sleep-quality and morning-mood questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    VeryGood,
    Good,
    Neutral,
    Bad,
    VeryBad,
}

impl Rating {
    pub fn label(&self) -> &'static str {
        match self {
            Rating::VeryGood => "Very good",
            Rating::Good => "Good",
            Rating::Neutral => "Neutral",
            Rating::Bad => "Bad",
            Rating::VeryBad => "Very bad",
        }
    }
}

/// Factors that may have disturbed the night's sleep (multi-select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Disturbance {
    PhoneBeforeBed,
    Caffeine,
    Noise,
    Brightness,
    Other,
}

impl Disturbance {
    pub fn label(&self) -> &'static str {
        match self {
            Disturbance::PhoneBeforeBed => "Phone before bed",
            Disturbance::Caffeine => "Caffeine",
            Disturbance::Noise => "Noise",
            Disturbance::Brightness => "Brightness",
            Disturbance::Other => "Other",
        }
    }
}

/// Perceived bedroom temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomTemperature {
    SlightlyCold,
    Comfortable,
    SlightlyHot,
    Hot,
    Cold,
}

impl RoomTemperature {
    pub fn label(&self) -> &'static str {
        match self {
            RoomTemperature::SlightlyCold => "Slightly cold",
            RoomTemperature::Comfortable => "Comfortable",
            RoomTemperature::SlightlyHot => "Slightly hot",
            RoomTemperature::Hot => "Hot",
            RoomTemperature::Cold => "Cold",
        }
    }
}

/// The full qualitative answer set for one interaction cycle.
///
/// Answers are held in session state only until the next save; they are never
/// written into the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnswers {
    pub quality: Rating,
    pub disturbances: Vec<Disturbance>,
    pub free_text: String,
    pub mood: Rating,
    pub tiredness: u8,
    pub room_temperature: RoomTemperature,
    pub noise_present: bool,
    pub room_dark_enough: bool,
}
