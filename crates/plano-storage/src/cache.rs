//! Owner-scoped session cache for plan lists.
//!
//! An explicit cache object with an injected clock: time never comes from
//! ambient state, so staleness behavior is fully testable. Entries are keyed
//! by owner id and expire after a fixed staleness window.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use plano_core::TeachingPlan;

/// Source of "now" for staleness checks.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock: the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct CacheEntry {
    plans: Vec<TeachingPlan>,
    fetched_at: DateTime<Utc>,
}

/// Session-scoped plan cache keyed by owner id.
pub struct SessionCache<C: Clock = SystemClock> {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
    clock: C,
}

impl SessionCache<SystemClock> {
    /// Cache with the given staleness window, using the system clock.
    pub fn new(ttl_secs: u64) -> Self {
        Self::with_clock(ttl_secs, SystemClock)
    }
}

impl<C: Clock> SessionCache<C> {
    pub fn with_clock(ttl_secs: u64, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            ttl: Duration::seconds(ttl_secs as i64),
            clock,
        }
    }

    /// Fresh plans for this owner, or `None` when absent or stale.
    /// Stale entries are evicted on access.
    pub fn get(&mut self, owner_id: &str) -> Option<&[TeachingPlan]> {
        let now = self.clock.now();
        let stale = match self.entries.get(owner_id) {
            Some(entry) => now - entry.fetched_at >= self.ttl,
            None => return None,
        };
        if stale {
            self.entries.remove(owner_id);
            tracing::debug!(owner = %owner_id, "session cache entry expired");
            return None;
        }
        self.entries.get(owner_id).map(|e| e.plans.as_slice())
    }

    /// Store the freshly fetched plans for this owner, stamped with now.
    pub fn put(&mut self, owner_id: &str, plans: Vec<TeachingPlan>) {
        let fetched_at = self.clock.now();
        self.entries
            .insert(owner_id.to_string(), CacheEntry { plans, fetched_at });
    }

    /// Drop one owner's entry (after a save or delete).
    pub fn invalidate(&mut self, owner_id: &str) {
        self.entries.remove(owner_id);
    }

    /// Drop everything (logout).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
