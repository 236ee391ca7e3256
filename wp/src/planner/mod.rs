//! Plan generation
//!
//! Resolves the day's routine and class session, reads the weather at the
//! effective location, runs the advisory rule table and renders the summary.

pub mod advisory;
mod error;
mod generator;
pub mod render;

pub use advisory::{Advisory, evaluate};
pub use error::PlanError;
pub use generator::{Plan, PlanGenerator};
pub use render::render_summary;
