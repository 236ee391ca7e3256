//! WeatherGateway trait definition

use async_trait::async_trait;
use tracing::debug;

use super::{EnvironmentReading, WeatherError};

/// Source of environment readings for a location label
///
/// Implementations must not error when the label simply matches no place;
/// they return [`EnvironmentReading::unknown`] instead.
#[async_trait]
pub trait WeatherGateway: Send + Sync {
    async fn reading(&self, label: &str) -> Result<EnvironmentReading, WeatherError>;
}

/// Gateway that always answers with the same reading
pub struct StaticGateway {
    reading: EnvironmentReading,
    keep_label: bool,
}

impl StaticGateway {
    /// Always return `reading` unchanged
    pub fn new(reading: EnvironmentReading) -> Self {
        debug!(location = %reading.location, "StaticGateway::new: called");
        Self {
            reading,
            keep_label: false,
        }
    }

    /// Return `reading` with its location replaced by the requested label
    pub fn echoing_label(reading: EnvironmentReading) -> Self {
        Self {
            reading,
            keep_label: true,
        }
    }
}

#[async_trait]
impl WeatherGateway for StaticGateway {
    async fn reading(&self, label: &str) -> Result<EnvironmentReading, WeatherError> {
        debug!(%label, "StaticGateway::reading: called");
        let mut reading = self.reading.clone();
        if self.keep_label {
            reading.location = label.to_string();
        }
        Ok(reading)
    }
}
