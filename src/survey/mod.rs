pub mod commands;
pub mod config;
pub mod controller;
pub mod state;
pub mod store;
pub mod summary;

pub use config::SurveyConfig;
pub use controller::SurveyController;
pub use state::SurveySnapshot;
