//! Workplan configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main workplan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location used for weather when the day's class has none
    #[serde(rename = "default-location")]
    pub default_location: String,

    /// Base seed for attendance selection
    pub seed: u64,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Locations of the routine, class and student documents
    pub data: DataConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_location: "Huntington Beach".to_string(),
            seed: 42,
            log_level: None,
            data: DataConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration before use
    pub fn validate(&self) -> Result<()> {
        if self.weather.timeout_ms == 0 {
            return Err(eyre::eyre!("weather.timeout-ms must be greater than zero"));
        }
        if self.weather.provider == WeatherProvider::OpenMeteo
            && (self.weather.geocoding_url.is_empty() || self.weather.forecast_url.is_empty())
        {
            return Err(eyre::eyre!("open-meteo provider requires geocoding-url and forecast-url"));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        Self::load_with_config_dir(config_path, dirs::config_dir())
    }

    /// Read just the log level so logging can start before the full load
    ///
    /// Walks the same fallback chain as [`Config::load`].
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load(config_path).ok().and_then(|c| c.log_level)
    }

    /// Candidate files tried in order when no explicit path is given
    fn candidate_paths(config_dir: Option<PathBuf>) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("workplan.yml")];
        if let Some(config_dir) = config_dir {
            paths.push(config_dir.join("workplan").join("workplan.yml"));
        }
        paths
    }

    fn load_with_config_dir(config_path: Option<&PathBuf>, config_dir: Option<PathBuf>) -> Result<Self> {
        // An explicit path must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::candidate_paths(config_dir) {
            if !candidate.exists() {
                continue;
            }
            match Self::load_from_file(&candidate) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", candidate.display(), e);
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Paths to the JSON documents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Routine templates keyed by ordinal
    pub templates: PathBuf,

    /// Weekly class schedule
    pub schedule: PathBuf,

    /// Candidate student names
    pub students: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            templates: PathBuf::from("configs/routines.json"),
            schedule: PathBuf::from("configs/classes.json"),
            students: PathBuf::from("configs/students.json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherProvider {
    #[default]
    OpenMeteo,
    Simulated,
}

/// Weather provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub provider: WeatherProvider,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    #[serde(rename = "geocoding-url")]
    pub geocoding_url: String,

    #[serde(rename = "forecast-url")]
    pub forecast_url: String,

    /// Seed for the simulated provider; random when unset
    #[serde(rename = "simulation-seed")]
    pub simulation_seed: Option<u64>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            provider: WeatherProvider::OpenMeteo,
            timeout_ms: 10_000,
            geocoding_url: crate::weather::GEOCODING_URL.to_string(),
            forecast_url: crate::weather::FORECAST_URL.to_string(),
            simulation_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_location, "Huntington Beach");
        assert_eq!(config.seed, 42);
        assert_eq!(config.weather.timeout_ms, 10_000);
        assert_eq!(config.weather.provider, WeatherProvider::OpenMeteo);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("workplan.yml");
        fs::write(
            &path,
            "default-location: Irvine\n\
             weather:\n  provider: simulated\n  simulation-seed: 7\n\
             data:\n  students: people.json\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.default_location, "Irvine");
        assert_eq!(config.seed, 42);
        assert_eq!(config.weather.provider, WeatherProvider::Simulated);
        assert_eq!(config.weather.simulation_seed, Some(7));
        assert_eq!(config.data.students, PathBuf::from("people.json"));
        assert_eq!(config.data.templates, PathBuf::from("configs/routines.json"));
    }

    #[test]
    fn test_explicit_missing_path_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.weather.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_log_level() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("workplan.yml");
        fs::write(&path, "log-level: debug\n").unwrap();
        assert_eq!(Config::load_log_level(Some(&path)).as_deref(), Some("debug"));
    }

    #[test]
    fn test_user_config_dir_is_a_candidate() {
        let temp = TempDir::new().unwrap();
        let paths = Config::candidate_paths(Some(temp.path().to_path_buf()));
        assert_eq!(
            paths,
            vec![PathBuf::from("workplan.yml"), temp.path().join("workplan").join("workplan.yml")]
        );
        assert_eq!(Config::candidate_paths(None), vec![PathBuf::from("workplan.yml")]);
    }

    #[test]
    fn test_load_reads_user_config_dir() {
        let temp = TempDir::new().unwrap();
        let user_dir = temp.path().join("workplan");
        fs::create_dir_all(&user_dir).unwrap();
        fs::write(user_dir.join("workplan.yml"), "log-level: debug\ndefault-location: Irvine\n").unwrap();

        let config = Config::load_with_config_dir(None, Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(config.default_location, "Irvine");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }
}
