//! Plan generation error types

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::Weekday;
use crate::weather::WeatherError;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("No routine found for {weekday}")]
    RoutineNotFound { weekday: Weekday },

    #[error("A week starting {start} runs past the last representable date")]
    DateOutOfRange { start: NaiveDate },

    #[error("Weather lookup failed: {0}")]
    Weather(#[from] WeatherError),
}

impl PlanError {
    pub fn is_routine_not_found(&self) -> bool {
        matches!(self, PlanError::RoutineNotFound { .. })
    }
}
