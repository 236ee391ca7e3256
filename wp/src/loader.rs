//! Loading of the routine, schedule and student documents
//!
//! Each loader returns a [`LoadOutcome`] so the caller can tell a document
//! that loaded empty apart from one that failed and fell back to empty.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::Weekday;
use crate::sessions::ScheduleEntry;

/// Why a configuration document could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config document not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed document {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Result of loading a document: the value, or the failure plus an empty fallback
#[derive(Debug)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Failed { error: ConfigError, fallback: T },
}

impl<T: Default> LoadOutcome<T> {
    fn from_result(result: Result<T, ConfigError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(error) => Self::Failed {
                error,
                fallback: T::default(),
            },
        }
    }
}

impl<T> LoadOutcome<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn error(&self) -> Option<&ConfigError> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Loaded(value) => value,
            Self::Failed { fallback, .. } => fallback,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Loaded(value) => value,
            Self::Failed { fallback, .. } => fallback,
        }
    }

    /// Split into the usable value and the failure, if any
    pub fn into_parts(self) -> (T, Option<ConfigError>) {
        match self {
            Self::Loaded(value) => (value, None),
            Self::Failed { error, fallback } => (fallback, Some(error)),
        }
    }
}

fn read_json(path: &Path) -> Result<Value, ConfigError> {
    debug!(path = %path.display(), "read_json: called");
    if !path.exists() {
        return Err(ConfigError::Missing {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the routine templates document: ordinal key -> template payload
pub fn load_templates(path: &Path) -> LoadOutcome<Map<String, Value>> {
    debug!(path = %path.display(), "load_templates: called");
    LoadOutcome::from_result(read_json(path).and_then(|value| match value {
        Value::Object(map) => {
            info!(count = map.len(), "Loaded template entries from {}", path.display());
            Ok(map)
        }
        other => Err(ConfigError::Malformed {
            path: path.to_path_buf(),
            reason: format!("expected an object of templates, found {}", json_kind(&other)),
        }),
    }))
}

/// Load the class schedule document
pub fn load_schedule(path: &Path) -> LoadOutcome<Vec<ScheduleEntry>> {
    debug!(path = %path.display(), "load_schedule: called");
    LoadOutcome::from_result(read_json(path).and_then(|value| match value {
        Value::Array(items) => {
            let entries = parse_schedule(&items);
            info!(count = entries.len(), "Loaded schedule entries from {}", path.display());
            Ok(entries)
        }
        other => Err(ConfigError::Malformed {
            path: path.to_path_buf(),
            reason: format!("expected an array of classes, found {}", json_kind(&other)),
        }),
    }))
}

/// Load the candidate student pool; duplicates are dropped, first occurrence kept
pub fn load_candidates(path: &Path) -> LoadOutcome<Vec<String>> {
    debug!(path = %path.display(), "load_candidates: called");
    LoadOutcome::from_result(read_json(path).and_then(|value| {
        let malformed = |reason: &str| ConfigError::Malformed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };
        let Value::Array(items) = value else {
            return Err(malformed("expected an array of names"));
        };
        let mut names: Vec<String> = Vec::with_capacity(items.len());
        for item in items {
            let Value::String(name) = item else {
                return Err(malformed("every student entry must be a string"));
            };
            if !names.contains(&name) {
                names.push(name);
            }
        }
        info!(count = names.len(), "Loaded students from {}", path.display());
        Ok(names)
    }))
}

/// Turn raw schedule items into entries, skipping ones without a usable day
pub fn parse_schedule(items: &[Value]) -> Vec<ScheduleEntry> {
    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let day = obj.get("day").and_then(Value::as_str)?;
            let weekday = match day.parse::<Weekday>() {
                Ok(weekday) => weekday,
                Err(e) => {
                    warn!(%day, "Skipping schedule entry: {}", e);
                    return None;
                }
            };
            let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
            Some(ScheduleEntry {
                weekday,
                session_name: text("class_name").unwrap_or_else(|| "Unnamed Class".to_string()),
                time: text("time").unwrap_or_else(|| "00:00".to_string()),
                location: text("location"),
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
