//! Deterministic attendance selection
//!
//! Every call builds its own generator from the seed it is given: the count
//! is drawn first, then the pool is shuffled with the same stream. Identical
//! (pool, seed) pairs always produce identical rosters.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fewest attendees drawn when the pool allows it
pub const MIN_ATTENDEES: usize = 2;

/// Most attendees drawn for a single session
pub const MAX_ATTENDEES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Excused,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub name: String,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn present(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: AttendanceStatus::Present,
        }
    }

    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }
}

/// Draws "present" attendees from a fixed candidate pool
#[derive(Debug, Clone, Default)]
pub struct AttendanceSelector {
    pool: Vec<String>,
}

impl AttendanceSelector {
    /// Create a selector; duplicate names are dropped, first occurrence kept
    pub fn new(pool: impl IntoIterator<Item = String>) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for name in pool {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { pool: unique }
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Select attendees for one session
    pub fn select(&self, seed: u64) -> Vec<AttendanceRecord> {
        debug!(pool = self.pool.len(), seed, "AttendanceSelector::select: called");
        match self.pool.as_slice() {
            [] => Vec::new(),
            [only] => vec![AttendanceRecord::present(only.clone())],
            pool => {
                let mut rng = StdRng::seed_from_u64(seed);
                let upper = pool.len().min(MAX_ATTENDEES);
                let count = rng.random_range(MIN_ATTENDEES..=upper);

                let mut shuffled = pool.to_vec();
                shuffled.shuffle(&mut rng);
                shuffled.truncate(count);

                debug!(count, "AttendanceSelector::select: drew attendees");
                shuffled.into_iter().map(AttendanceRecord::present).collect()
            }
        }
    }
}
