//! Class sessions assembled once per weekday from the schedule

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::attendance::{AttendanceRecord, AttendanceSelector};
use crate::domain::{Location, Weekday};

/// One row of the class schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub weekday: Weekday,
    pub session_name: String,
    pub time: String,
    /// Free-form label; only allowed locations survive assembly
    pub location: Option<String>,
}

/// Materialized session for a weekday, including who attended
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub weekday: Weekday,
    pub session_name: String,
    pub time: String,
    pub roster: Vec<AttendanceRecord>,
    pub location: Option<Location>,
}

impl SessionSnapshot {
    pub fn present_count(&self) -> usize {
        self.roster.iter().filter(|r| r.is_present()).count()
    }

    pub fn total_count(&self) -> usize {
        self.roster.len()
    }
}

/// Seed for a weekday's roster, independent of schedule order
pub fn session_seed(base: u64, weekday: Weekday) -> u64 {
    base.wrapping_add(weekday.index() as u64)
}

/// Read-only set of sessions keyed by weekday
#[derive(Debug, Clone, Default)]
pub struct SessionAssembler {
    sessions: BTreeMap<Weekday, SessionSnapshot>,
}

impl SessionAssembler {
    /// Assemble a snapshot per schedule entry; a later entry for the same weekday replaces an earlier one
    pub fn build(entries: impl IntoIterator<Item = ScheduleEntry>, selector: &AttendanceSelector, seed: u64) -> Self {
        debug!(seed, "SessionAssembler::build: called");
        let mut sessions = BTreeMap::new();
        for entry in entries {
            let location = entry.location.as_deref().and_then(|label| {
                let parsed = Location::parse(label);
                if parsed.is_none() {
                    warn!(weekday = %entry.weekday, %label, "Location not allowed, dropping it");
                }
                parsed
            });
            let roster = selector.select(session_seed(seed, entry.weekday));
            let snapshot = SessionSnapshot {
                weekday: entry.weekday,
                session_name: entry.session_name,
                time: entry.time,
                roster,
                location,
            };
            if sessions.insert(entry.weekday, snapshot).is_some() {
                debug!(weekday = %entry.weekday, "SessionAssembler::build: replaced earlier entry");
            }
        }
        Self { sessions }
    }

    pub fn get_for_weekday(&self, weekday: Weekday) -> Option<&SessionSnapshot> {
        self.sessions.get(&weekday)
    }

    pub fn get_for_date(&self, date: NaiveDate) -> Option<&SessionSnapshot> {
        self.get_for_weekday(Weekday::of(date))
    }

    pub fn get_all(&self) -> BTreeMap<Weekday, SessionSnapshot> {
        self.sessions.clone()
    }

    /// Present attendees for a weekday; empty when nothing is scheduled
    pub fn get_present(&self, weekday: Weekday) -> Vec<AttendanceRecord> {
        self.get_for_weekday(weekday)
            .map(|s| s.roster.iter().filter(|r| r.is_present()).cloned().collect())
            .unwrap_or_default()
    }
}
