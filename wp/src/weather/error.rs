//! Weather error types

use std::time::Duration;
use thiserror::Error;

/// Failures of the weather request itself
///
/// Every variant is an infrastructure failure. A label with no matching place
/// is not an error; gateways answer it with [`EnvironmentReading::unknown`].
///
/// [`EnvironmentReading::unknown`]: super::EnvironmentReading::unknown
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl WeatherError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, WeatherError::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_timeout() {
        assert!(WeatherError::Timeout(Duration::from_secs(10)).is_timeout());
        assert!(
            !WeatherError::Status {
                status: 503,
                url: "https://api.open-meteo.com/v1/forecast".to_string()
            }
            .is_timeout()
        );
    }

    #[test]
    fn test_display() {
        let err = WeatherError::Status {
            status: 502,
            url: "http://x".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 502 from http://x");
    }
}
