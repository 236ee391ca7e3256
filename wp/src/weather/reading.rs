//! Environment reading returned by every gateway

use serde::Serialize;

/// Point-in-time weather observation for a resolved location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentReading {
    /// Resolved place name, or the requested label when nothing matched
    pub location: String,
    pub wind_speed_mps: f64,
    pub wind_gust_mps: Option<f64>,
    pub description: String,
    pub temperature_celsius: Option<f64>,
}

impl EnvironmentReading {
    /// Degraded reading for a label that resolves to no place
    pub fn unknown(label: impl Into<String>) -> Self {
        Self {
            location: label.into(),
            wind_speed_mps: 0.0,
            wind_gust_mps: None,
            description: "Unknown".to_string(),
            temperature_celsius: None,
        }
    }
}
