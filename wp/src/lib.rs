//! Workplan - daily workout plans
//!
//! Combines three independently sourced inputs into one plan per day:
//! a weekday-indexed routine template, the roster of a scheduled class, and a
//! live weather reading for the class location. Condition-driven advisories
//! are attached and the whole plan is rendered as plain text.
//!
//! # Modules
//!
//! - [`templates`] - weekday -> routine template mapping
//! - [`attendance`] - deterministic seeded attendee selection
//! - [`sessions`] - per-weekday class session snapshots
//! - [`weather`] - weather gateways (Open-Meteo, simulated, static)
//! - [`planner`] - plan generation, advisory rules and rendering
//! - [`loader`] - routine, schedule and student documents
//! - [`config`] - application configuration
//!
//! # Example
//!
//! ```ignore
//! use workplan::{Config, PlanGenerator, weather};
//!
//! let config = Config::load(None)?;
//! let gateway = weather::create_gateway(&config.weather)?;
//! let (planner, _failures) = PlanGenerator::load(&config.data, config.seed, gateway);
//! let plan = planner.generate(chrono::Local::now().date_naive(), &config.default_location).await?;
//! println!("{}", plan.summary);
//! ```

pub mod attendance;
pub mod cli;
pub mod config;
pub mod domain;
pub mod loader;
pub mod planner;
pub mod sessions;
pub mod templates;
pub mod weather;

pub use attendance::{AttendanceRecord, AttendanceSelector, AttendanceStatus};
pub use config::Config;
pub use domain::{Intensity, Location, Weekday};
pub use loader::{ConfigError, LoadOutcome};
pub use planner::{Advisory, Plan, PlanError, PlanGenerator};
pub use sessions::{ScheduleEntry, SessionAssembler, SessionSnapshot};
pub use templates::{ActivityTemplate, TemplateIndex};
pub use weather::{EnvironmentReading, StaticGateway, WeatherError, WeatherGateway};
