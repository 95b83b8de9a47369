//! Usage limiting for metered upstream lookups.
//!
//! The comparison core never consumes this; it exists for the
//! collaborator layer to inject around expensive provider calls. The
//! default store counts per-key uses in a fixed 24-hour window, held
//! in memory with lazy expiry.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

pub const DEFAULT_USE_LIMIT: u32 = 5;
const WINDOW_HOURS: i64 = 24;

/// Snapshot of one key's consumption inside the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub count: u32,
    pub remaining: u32,
    pub exhausted: bool,
}

impl Usage {
    fn at(count: u32, limit: u32) -> Self {
        let remaining = limit.saturating_sub(count);
        Usage {
            count,
            remaining,
            exhausted: remaining == 0,
        }
    }
}

/// Anything that can meter keyed usage.
pub trait UsageLimiter {
    /// Reports current usage without consuming anything.
    fn check(&self, key: &str) -> Usage;
    /// Consumes one use and reports the updated state.
    fn increment(&self, key: &str) -> Usage;
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: u32,
    reset_at: DateTime<Utc>,
}

/// In-memory windowed counter. Expired entries are replaced on next
/// touch rather than swept by a background task.
pub struct MemoryUsageStore {
    limit: u32,
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryUsageStore {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn check_at(&self, key: &str, now: DateTime<Utc>) -> Usage {
        let entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if now < entry.reset_at => Usage::at(entry.count, self.limit),
            _ => Usage::at(0, self.limit),
        }
    }

    fn increment_at(&self, key: &str, now: DateTime<Utc>) -> Usage {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .entry(key.to_string())
            .and_modify(|entry| {
                if now >= entry.reset_at {
                    entry.count = 0;
                    entry.reset_at = now + Duration::hours(WINDOW_HOURS);
                }
            })
            .or_insert_with(|| Entry {
                count: 0,
                reset_at: now + Duration::hours(WINDOW_HOURS),
            });
        entry.count += 1;
        debug!(key, count = entry.count, "usage incremented");
        Usage::at(entry.count, self.limit)
    }
}

impl Default for MemoryUsageStore {
    fn default() -> Self {
        Self::new(DEFAULT_USE_LIMIT)
    }
}

impl UsageLimiter for MemoryUsageStore {
    fn check(&self, key: &str) -> Usage {
        self.check_at(key, Utc::now())
    }

    fn increment(&self, key: &str) -> Usage {
        self.increment_at(key, Utc::now())
    }
}
