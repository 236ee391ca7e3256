//! Offline weather gateway producing plausible seeded readings

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::hash::{Hash, Hasher};
use tracing::debug;

use super::{EnvironmentReading, WeatherError, WeatherGateway};

const DESCRIPTIONS: [&str; 4] = ["Clear", "Partly cloudy", "Breezy", "Sunny"];

/// Gateway that invents mild coastal weather; same seed and label, same reading
pub struct SimulatedGateway {
    seed: u64,
}

impl SimulatedGateway {
    pub fn new(seed: u64) -> Self {
        debug!(seed, "SimulatedGateway::new: called");
        Self { seed }
    }

    fn rng_for(&self, label: &str) -> StdRng {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        label.hash(&mut hasher);
        StdRng::seed_from_u64(self.seed ^ hasher.finish())
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[async_trait]
impl WeatherGateway for SimulatedGateway {
    async fn reading(&self, label: &str) -> Result<EnvironmentReading, WeatherError> {
        debug!(%label, "SimulatedGateway::reading: called");
        let mut rng = self.rng_for(label);
        let wind = round1(rng.random_range(1.0..7.0));
        let gust = round1(wind + rng.random_range(0.0..4.0));
        let temperature = round1(rng.random_range(14.0..24.0));
        let description = DESCRIPTIONS.choose(&mut rng).copied().unwrap_or("Clear");

        Ok(EnvironmentReading {
            location: label.to_string(),
            wind_speed_mps: wind,
            wind_gust_mps: Some(gust),
            description: description.to_string(),
            temperature_celsius: Some(temperature),
        })
    }
}
