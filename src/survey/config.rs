/// Form limits and defaults shared by the store, the frontend, and tests.
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    /// Inclusive sleep-duration range in hours
    pub min_duration_hours: f64,
    pub max_duration_hours: f64,

    /// Slider step; durations only ever enter on this grid
    pub duration_step_hours: f64,
    pub default_duration_hours: f64,

    /// Inclusive upper bound of the morning-tiredness score (lower bound is 0)
    pub max_tiredness: u8,
    pub default_tiredness: u8,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            min_duration_hours: 0.0,
            max_duration_hours: 12.0,
            duration_step_hours: 0.5,
            default_duration_hours: 7.0,
            max_tiredness: 10,
            default_tiredness: 5,
        }
    }
}
