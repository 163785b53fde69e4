pub mod answers;
pub mod record;

pub use answers::{Disturbance, Rating, RoomTemperature, SurveyAnswers};
pub use record::{ChartPoint, SleepRecord, UpsertOutcome};
