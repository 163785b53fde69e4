//! Echo-back rendering of the read-only confirmation block.

use serde::Serialize;

use crate::models::{SleepRecord, SurveyAnswers};

/// One labelled line of the confirmation summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

impl SummaryLine {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Render the confirmation lines: the last submitted entry plus every saved
/// answer field. The disturbance and comment lines are omitted when empty;
/// booleans render as presence/absence labels.
pub fn render(entry: Option<&SleepRecord>, answers: Option<&SurveyAnswers>) -> Vec<SummaryLine> {
    let mut lines = Vec::new();

    if let Some(entry) = entry {
        lines.push(SummaryLine::new("Record date", entry.date.to_string()));
        lines.push(SummaryLine::new(
            "Last night's sleep",
            format!("{:.1} hours", entry.duration_hours),
        ));
    }

    let Some(answers) = answers else {
        return lines;
    };

    lines.push(SummaryLine::new("Sleep quality", answers.quality.label()));

    if !answers.disturbances.is_empty() {
        let joined = answers
            .disturbances
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(SummaryLine::new("Sleep disturbances", joined));
    }

    if !answers.free_text.is_empty() {
        lines.push(SummaryLine::new("Comment", answers.free_text.clone()));
    }

    lines.push(SummaryLine::new("Morning mood", answers.mood.label()));
    lines.push(SummaryLine::new(
        "Morning tiredness",
        format!("{} / 10", answers.tiredness),
    ));
    lines.push(SummaryLine::new(
        "Bedroom temperature",
        answers.room_temperature.label(),
    ));
    lines.push(SummaryLine::new(
        "Bedroom noise",
        if answers.noise_present {
            "Noise present"
        } else {
            "No noise"
        },
    ));
    lines.push(SummaryLine::new(
        "Bedroom darkness",
        if answers.room_dark_enough {
            "Dark enough"
        } else {
            "Too bright"
        },
    ));

    lines
}
