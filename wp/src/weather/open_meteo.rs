//! Open-Meteo gateway: geocode the label, then read current weather
//!
//! No API key is required. Wind speed is requested in m/s; the current-weather
//! response carries no gust, so gust is always absent.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use super::{EnvironmentReading, WeatherError, WeatherGateway};
use crate::config::WeatherConfig;

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<Place>>,
}

#[derive(Debug, Clone, Deserialize)]
struct Place {
    name: Option<String>,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Default, Deserialize)]
struct CurrentWeather {
    temperature: Option<f64>,
    windspeed: Option<f64>,
    weathercode: Option<i64>,
}

/// Progressively looser forms of a label to try against the geocoder
///
/// The raw label first, then the text before "(", "-" and ",". Empty and
/// repeated candidates are skipped.
pub fn location_candidates(label: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    let forms = [
        label.to_string(),
        label.split('(').next().unwrap_or_default().trim().to_string(),
        label.split('-').next().unwrap_or_default().trim().to_string(),
        label.split(',').next().unwrap_or_default().trim().to_string(),
    ];
    for form in forms {
        if !form.trim().is_empty() && !candidates.contains(&form) {
            candidates.push(form);
        }
    }
    candidates
}

/// Human description of a WMO weather code
pub fn describe_weather_code(code: Option<i64>) -> String {
    let Some(code) = code else {
        return "No description available".to_string();
    };
    match code {
        0 => "Clear".to_string(),
        1..=3 => "Mainly clear / partly cloudy".to_string(),
        45 | 48 => "Fog".to_string(),
        51..=67 => "Drizzle / Rain".to_string(),
        71..=77 => "Snow / Ice".to_string(),
        80..=82 => "Rain showers".to_string(),
        95..=99 => "Thunderstorm".to_string(),
        other => format!("Weather code {}", other),
    }
}

fn reading_from_forecast(label: &str, place: &Place, current: CurrentWeather) -> EnvironmentReading {
    EnvironmentReading {
        location: place.name.clone().unwrap_or_else(|| label.to_string()),
        wind_speed_mps: current.windspeed.unwrap_or(0.0),
        wind_gust_mps: None,
        description: describe_weather_code(current.weathercode),
        temperature_celsius: current.temperature,
    }
}

/// Weather gateway backed by the Open-Meteo HTTP APIs
pub struct OpenMeteoGateway {
    client: reqwest::Client,
    geocoding_url: String,
    forecast_url: String,
    timeout: Duration,
}

impl OpenMeteoGateway {
    pub fn from_config(config: &WeatherConfig) -> Result<Self, WeatherError> {
        debug!(timeout_ms = config.timeout_ms, "OpenMeteoGateway::from_config: called");
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("workplan/0.1")
            .build()?;
        Ok(Self {
            client,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
            timeout,
        })
    }

    fn classify(&self, err: reqwest::Error) -> WeatherError {
        if err.is_timeout() {
            WeatherError::Timeout(self.timeout)
        } else if err.is_decode() {
            WeatherError::InvalidResponse(err.to_string())
        } else {
            WeatherError::Network(err)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T, WeatherError> {
        debug!(%url, ?query, "OpenMeteoGateway::get_json: called");
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "OpenMeteoGateway::get_json: HTTP error status");
            return Err(WeatherError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<T>().await.map_err(|e| self.classify(e))
    }

    async fn geocode(&self, label: &str) -> Result<Option<Place>, WeatherError> {
        for candidate in location_candidates(label) {
            let query = [("name", candidate.clone()), ("count", "1".to_string())];
            let response: GeocodingResponse = self.get_json(&self.geocoding_url, &query).await?;
            if let Some(place) = response.results.and_then(|r| r.into_iter().next()) {
                debug!(%candidate, "OpenMeteoGateway::geocode: matched");
                return Ok(Some(place));
            }
            debug!(%candidate, "OpenMeteoGateway::geocode: no match");
        }
        Ok(None)
    }
}

#[async_trait]
impl WeatherGateway for OpenMeteoGateway {
    async fn reading(&self, label: &str) -> Result<EnvironmentReading, WeatherError> {
        debug!(%label, "OpenMeteoGateway::reading: called");
        let Some(place) = self.geocode(label).await? else {
            info!(%label, "No place matched, using unknown reading");
            return Ok(EnvironmentReading::unknown(label));
        };

        let query = [
            ("latitude", place.latitude.to_string()),
            ("longitude", place.longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("windspeed_unit", "ms".to_string()),
            ("timezone", "auto".to_string()),
        ];
        let forecast: ForecastResponse = self.get_json(&self.forecast_url, &query).await?;
        Ok(reading_from_forecast(
            label,
            &place,
            forecast.current_weather.unwrap_or_default(),
        ))
    }
}
