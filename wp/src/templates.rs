//! Routine templates and the weekday -> template mapping
//!
//! Templates are keyed by ordinal strings ("1", "2", ...). Sorted keys are
//! assigned to Monday..Sunday in order; when fewer than seven templates exist
//! the remaining days reuse the last one.
//!
//! Key order: keys made only of ASCII digits (and fitting in a u64) sort first
//! by numeric value, ties broken by the key text ("01" before "1"); all other
//! keys follow in lexicographic order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::domain::{Intensity, Weekday};

/// A routine resolved for a specific weekday
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityTemplate {
    pub weekday: Weekday,
    pub title: String,
    pub exercises: Vec<String>,
    pub duration_minutes: u32,
    pub intensity: Intensity,
}

/// Raw payload as found in the routines document
#[derive(Debug, Deserialize)]
struct TemplatePayload {
    name: Option<String>,
    #[serde(default)]
    exercises: Vec<String>,
    #[serde(default)]
    duration_minutes: u32,
    intensity: Option<String>,
}

/// A validated template, not yet bound to a weekday
#[derive(Debug, Clone)]
struct StoredTemplate {
    key: String,
    name: Option<String>,
    exercises: Vec<String>,
    duration_minutes: u32,
    intensity: Intensity,
}

impl StoredTemplate {
    fn from_payload(key: &str, value: &Value) -> Option<Self> {
        if !value.is_object() {
            debug!(%key, "StoredTemplate::from_payload: not an object, discarding");
            return None;
        }
        let payload: TemplatePayload = match serde_json::from_value(value.clone()) {
            Ok(p) => p,
            Err(e) => {
                warn!(%key, error = %e, "Discarding malformed template");
                return None;
            }
        };
        let intensity = match payload.intensity.as_deref() {
            None => Intensity::default(),
            Some(raw) => match raw.parse() {
                Ok(i) => i,
                Err(e) => {
                    warn!(%key, "Discarding template: {}", e);
                    return None;
                }
            },
        };
        if payload.exercises.is_empty() || payload.duration_minutes == 0 {
            warn!(%key, "Discarding template without exercises or duration");
            return None;
        }
        Some(Self {
            key: key.to_string(),
            name: payload.name.filter(|n| !n.is_empty()),
            exercises: payload.exercises,
            duration_minutes: payload.duration_minutes,
            intensity,
        })
    }

    fn bind(&self, weekday: Weekday) -> ActivityTemplate {
        ActivityTemplate {
            weekday,
            title: self.name.clone().unwrap_or_else(|| format!("{} Routine", weekday)),
            exercises: self.exercises.clone(),
            duration_minutes: self.duration_minutes,
            intensity: self.intensity,
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum OrdinalKey<'a> {
    Numeric(u64, &'a str),
    Text(&'a str),
}

impl<'a> OrdinalKey<'a> {
    fn of(key: &'a str) -> Self {
        let digits = !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit());
        match key.parse::<u64>() {
            Ok(n) if digits => Self::Numeric(n, key),
            _ => Self::Text(key),
        }
    }
}

/// Weekday-indexed lookup over the loaded templates
#[derive(Debug, Clone, Default)]
pub struct TemplateIndex {
    /// Templates in ordinal key order
    ordered: Vec<StoredTemplate>,
}

impl TemplateIndex {
    /// Build the index from the raw routines document
    pub fn load(raw: &Map<String, Value>) -> Self {
        debug!(entries = raw.len(), "TemplateIndex::load: called");
        let mut ordered: Vec<StoredTemplate> = raw
            .iter()
            .filter_map(|(key, value)| StoredTemplate::from_payload(key, value))
            .collect();
        ordered.sort_by(|a, b| OrdinalKey::of(&a.key).cmp(&OrdinalKey::of(&b.key)));
        debug!(loaded = ordered.len(), "TemplateIndex::load: done");
        Self { ordered }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    fn stored_for(&self, weekday: Weekday) -> Option<&StoredTemplate> {
        self.ordered.get(weekday.index()).or_else(|| self.ordered.last())
    }

    /// Ordinal key of the template a weekday maps to
    pub fn key_for(&self, weekday: Weekday) -> Option<&str> {
        self.stored_for(weekday).map(|t| t.key.as_str())
    }

    pub fn get_for_weekday(&self, weekday: Weekday) -> Option<ActivityTemplate> {
        debug!(%weekday, "TemplateIndex::get_for_weekday: called");
        self.stored_for(weekday).map(|t| t.bind(weekday))
    }

    pub fn get_for_date(&self, date: NaiveDate) -> Option<ActivityTemplate> {
        self.get_for_weekday(Weekday::of(date))
    }

    /// Every weekday that resolves to a template
    pub fn get_all(&self) -> BTreeMap<Weekday, ActivityTemplate> {
        Weekday::ALL
            .into_iter()
            .filter_map(|day| self.get_for_weekday(day).map(|t| (day, t)))
            .collect()
    }
}
