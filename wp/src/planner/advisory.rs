//! Advisory rule table
//!
//! Rules run in a fixed order and every rule that fires appends one advisory:
//! wind, rain, favorable sky, temperature, intensity, attendance. When none
//! fire, a single "optimal conditions" advisory is returned.

use serde::{Serialize, Serializer};

use crate::domain::Intensity;
use crate::sessions::SessionSnapshot;
use crate::templates::ActivityTemplate;
use crate::weather::EnvironmentReading;

pub const HIGH_WIND_MPS: f64 = 10.0;
pub const MODERATE_WIND_MPS: f64 = 5.0;
pub const HEAT_CELSIUS: f64 = 30.0;
pub const COLD_CELSIUS: f64 = 5.0;
pub const LOW_ATTENDANCE_RATIO: f64 = 0.5;

/// A condition-driven recommendation attached to a plan
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    HighWind { speed_mps: f64 },
    ModerateWind { speed_mps: f64 },
    Rain,
    FavorableWeather,
    Heat { celsius: f64 },
    Cold { celsius: f64 },
    HighIntensity,
    LowAttendance { present: usize, total: usize },
    StrongAttendance { present: usize, total: usize },
    OptimalConditions,
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HighWind { speed_mps } => write!(
                f,
                "High wind speed ({:.1} m/s) - consider moving outdoor activities indoors",
                speed_mps
            ),
            Self::ModerateWind { speed_mps } => write!(
                f,
                "Moderate wind ({:.1} m/s) - adjust form for exercises, especially standing movements",
                speed_mps
            ),
            Self::Rain => write!(f, "Rainy conditions - ensure proper footwear and safety"),
            Self::FavorableWeather => write!(f, "Great weather - consider outdoor cardio session"),
            Self::Heat { celsius } => write!(
                f,
                "High temperature ({:.1}°C) - shorten outdoor cardio and hydrate",
                celsius
            ),
            Self::Cold { celsius } => write!(
                f,
                "Low temperature ({:.1}°C) - layer up and consider indoor warm-up",
                celsius
            ),
            Self::HighIntensity => write!(f, "High intensity workout - ensure adequate hydration and recovery"),
            Self::LowAttendance { present, total } => write!(
                f,
                "Low class attendance ({}/{}) - consider additional motivation or adjustments",
                present, total
            ),
            Self::StrongAttendance { present, total } => write!(f, "Strong class attendance ({}/{})", present, total),
            Self::OptimalConditions => write!(f, "Optimal conditions - proceed with standard routine"),
        }
    }
}

impl Serialize for Advisory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Run the rule table; the result is never empty
pub fn evaluate(
    template: &ActivityTemplate,
    reading: &EnvironmentReading,
    session: Option<&SessionSnapshot>,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    let wind = reading.wind_speed_mps;
    if wind > HIGH_WIND_MPS {
        advisories.push(Advisory::HighWind { speed_mps: wind });
    } else if wind > MODERATE_WIND_MPS {
        advisories.push(Advisory::ModerateWind { speed_mps: wind });
    }

    let description = reading.description.to_lowercase();
    if description.contains("rain") {
        advisories.push(Advisory::Rain);
    }
    if description.contains("clear") || description.contains("sunny") {
        advisories.push(Advisory::FavorableWeather);
    }

    if let Some(celsius) = reading.temperature_celsius {
        if celsius >= HEAT_CELSIUS {
            advisories.push(Advisory::Heat { celsius });
        } else if celsius <= COLD_CELSIUS {
            advisories.push(Advisory::Cold { celsius });
        }
    }

    if template.intensity == Intensity::High {
        advisories.push(Advisory::HighIntensity);
    }

    if let Some(session) = session {
        let present = session.present_count();
        let total = session.total_count();
        if (present as f64) < total as f64 * LOW_ATTENDANCE_RATIO {
            advisories.push(Advisory::LowAttendance { present, total });
        } else {
            advisories.push(Advisory::StrongAttendance { present, total });
        }
    }

    if advisories.is_empty() {
        advisories.push(Advisory::OptimalConditions);
    }
    advisories
}
