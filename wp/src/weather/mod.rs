//! Weather lookup for plan locations
//!
//! A [`WeatherGateway`] turns a location label into an [`EnvironmentReading`].
//! Labels that resolve to no place degrade to an "Unknown" reading; only
//! transport and request failures surface as [`WeatherError`].

use std::sync::Arc;

use tracing::debug;

pub mod gateway;
mod error;
mod open_meteo;
mod reading;
mod simulated;

pub use error::WeatherError;
pub use gateway::{StaticGateway, WeatherGateway};
pub use open_meteo::{FORECAST_URL, GEOCODING_URL, OpenMeteoGateway, describe_weather_code, location_candidates};
pub use reading::EnvironmentReading;
pub use simulated::SimulatedGateway;

use crate::config::{WeatherConfig, WeatherProvider};

/// Create the gateway selected by the weather config
pub fn create_gateway(config: &WeatherConfig) -> Result<Arc<dyn WeatherGateway>, WeatherError> {
    debug!(provider = ?config.provider, "create_gateway: called");
    match config.provider {
        WeatherProvider::OpenMeteo => Ok(Arc::new(OpenMeteoGateway::from_config(config)?)),
        WeatherProvider::Simulated => {
            let seed = config.simulation_seed.unwrap_or_else(rand::random);
            debug!(seed, "create_gateway: simulated provider");
            Ok(Arc::new(SimulatedGateway::new(seed)))
        }
    }
}
