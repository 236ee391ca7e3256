//! PlanGenerator: routine + session + weather -> plan

use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use super::{Advisory, PlanError, advisory, render};
use crate::attendance::AttendanceSelector;
use crate::config::DataConfig;
use crate::domain::Weekday;
use crate::loader::{self, ConfigError};
use crate::sessions::{SessionAssembler, SessionSnapshot};
use crate::templates::{ActivityTemplate, TemplateIndex};
use crate::weather::{EnvironmentReading, WeatherGateway};

/// A generated daily plan
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    /// ISO date, e.g. 2025-12-01
    pub date: String,
    pub weekday: Weekday,
    pub template: ActivityTemplate,
    pub reading: EnvironmentReading,
    pub session: Option<SessionSnapshot>,
    /// Never empty
    pub advisories: Vec<Advisory>,
    pub summary: String,
}

impl Plan {
    pub fn advisory_lines(&self) -> Vec<String> {
        self.advisories.iter().map(ToString::to_string).collect()
    }
}

/// Combines templates, sessions and weather into plans
///
/// Templates and sessions are read-only after construction, so one generator
/// can serve any number of concurrent `generate` calls.
pub struct PlanGenerator {
    templates: TemplateIndex,
    sessions: SessionAssembler,
    weather: Arc<dyn WeatherGateway>,
}

impl PlanGenerator {
    pub fn new(templates: TemplateIndex, sessions: SessionAssembler, weather: Arc<dyn WeatherGateway>) -> Self {
        debug!(templates = templates.len(), "PlanGenerator::new: called");
        Self {
            templates,
            sessions,
            weather,
        }
    }

    /// Load every document named in `data`
    ///
    /// A document that fails to load contributes an empty value; its error is
    /// returned alongside the generator.
    pub fn load(data: &DataConfig, seed: u64, weather: Arc<dyn WeatherGateway>) -> (Self, Vec<ConfigError>) {
        debug!(?data, seed, "PlanGenerator::load: called");
        let (raw_templates, templates_err) = loader::load_templates(&data.templates).into_parts();
        let (schedule, schedule_err) = loader::load_schedule(&data.schedule).into_parts();
        let (candidates, candidates_err) = loader::load_candidates(&data.students).into_parts();

        let templates = TemplateIndex::load(&raw_templates);
        let selector = AttendanceSelector::new(candidates);
        let sessions = SessionAssembler::build(schedule, &selector, seed);
        info!(
            templates = templates.len(),
            sessions = sessions.get_all().len(),
            students = selector.pool().len(),
            "Plan data loaded"
        );

        let failures = [templates_err, schedule_err, candidates_err].into_iter().flatten().collect();
        (Self::new(templates, sessions, weather), failures)
    }

    pub fn templates(&self) -> &TemplateIndex {
        &self.templates
    }

    pub fn sessions(&self) -> &SessionAssembler {
        &self.sessions
    }

    /// Generate the plan for `date`; weather is read at the day's class location, else `fallback_location`
    pub async fn generate(&self, date: NaiveDate, fallback_location: &str) -> Result<Plan, PlanError> {
        let weekday = Weekday::of(date);
        debug!(%date, %weekday, %fallback_location, "PlanGenerator::generate: called");

        let template = self
            .templates
            .get_for_weekday(weekday)
            .ok_or(PlanError::RoutineNotFound { weekday })?;
        let session = self.sessions.get_for_weekday(weekday).cloned();

        let location = session
            .as_ref()
            .and_then(|s| s.location)
            .map(|loc| loc.label().to_string())
            .unwrap_or_else(|| fallback_location.to_string());
        debug!(%location, "PlanGenerator::generate: effective location");

        let reading = self.weather.reading(&location).await?;

        let advisories = advisory::evaluate(&template, &reading, session.as_ref());
        let summary = render::render_summary(weekday, &template, &reading, session.as_ref(), &advisories);

        Ok(Plan {
            date: date.format("%Y-%m-%d").to_string(),
            weekday,
            template,
            reading,
            session,
            advisories,
            summary,
        })
    }

    /// Plans for seven consecutive days starting at `start`
    pub async fn generate_week(&self, start: NaiveDate, fallback_location: &str) -> Result<Vec<Plan>, PlanError> {
        debug!(%start, "PlanGenerator::generate_week: called");
        let mut plans = Vec::with_capacity(Weekday::ALL.len());
        for offset in 0..Weekday::ALL.len() as u64 {
            let date = start
                .checked_add_days(Days::new(offset))
                .ok_or(PlanError::DateOutOfRange { start })?;
            plans.push(self.generate(date, fallback_location).await?);
        }
        Ok(plans)
    }
}
