//! In-memory query cache
//!
//! One [`QueryCache`] is created per process and shared by every view. It
//! holds the last decoded response per [`QueryKey`] and announces
//! invalidations on a broadcast channel so that active pollers refetch.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::broadcast;

use super::key::{QueryGroup, QueryKey};

/// Pending invalidation notices a slow subscriber may fall behind by
const EVENT_CAPACITY: usize = 64;

/// One cached response
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub fetched_at: DateTime<Utc>,
    stored_at: Instant,
    /// Set by invalidation; a stale entry is refetched on next read
    pub stale: bool,
}

impl CacheEntry {
    fn is_fresh(&self, max_age: Option<Duration>) -> bool {
        !self.stale && max_age.is_none_or(|age| self.stored_at.elapsed() < age)
    }
}

pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, CacheEntry>>,
    /// Live subscriptions per key
    watchers: Mutex<HashMap<QueryKey, usize>>,
    events: broadcast::Sender<QueryGroup>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            entries: Mutex::new(HashMap::new()),
            watchers: Mutex::new(HashMap::new()),
            events,
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<QueryKey, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The entry for `key` if it is not stale and younger than `max_age`.
    ///
    /// Entries read without a maximum age stay fresh until invalidated.
    pub fn get_fresh(&self, key: &QueryKey, max_age: Option<Duration>) -> Option<CacheEntry> {
        self.entries()
            .get(key)
            .filter(|entry| entry.is_fresh(max_age))
            .cloned()
    }

    /// The last stored entry for `key`, stale or not.
    pub fn peek(&self, key: &QueryKey) -> Option<CacheEntry> {
        self.entries().get(key).cloned()
    }

    /// Store a response. The most recent write wins.
    pub fn store(&self, key: QueryKey, value: Value) -> DateTime<Utc> {
        let fetched_at = Utc::now();
        self.entries().insert(
            key,
            CacheEntry {
                value,
                fetched_at,
                stored_at: Instant::now(),
                stale: false,
            },
        );
        fetched_at
    }

    /// Mark every entry under `group` stale and notify subscribers.
    ///
    /// Returns the number of entries marked.
    pub fn invalidate(&self, group: QueryGroup) -> usize {
        let mut marked = 0;
        for (_, entry) in self
            .entries()
            .iter_mut()
            .filter(|(key, _)| key.belongs_to(group))
        {
            entry.stale = true;
            marked += 1;
        }
        log::debug!("Invalidated {}: {} entries", group, marked);

        // No receivers simply means no active pollers
        let _ = self.events.send(group);
        marked
    }

    /// Discard the entry for `key` (the view that read it is gone).
    pub fn remove(&self, key: &QueryKey) -> bool {
        self.entries().remove(key).is_some()
    }

    /// Register a live view of `key`.
    pub fn watch_key(&self, key: &QueryKey) {
        let mut watchers = self.watchers.lock().unwrap_or_else(PoisonError::into_inner);
        *watchers.entry(key.clone()).or_default() += 1;
    }

    /// Release a view of `key`, discarding its entry once no view is left.
    ///
    /// Returns true when the entry was discarded.
    pub fn unwatch_key(&self, key: &QueryKey) -> bool {
        // Held across the removal so a new watcher cannot slip in between
        let mut watchers = self.watchers.lock().unwrap_or_else(PoisonError::into_inner);
        match watchers.get_mut(key) {
            Some(count) if *count > 1 => {
                *count -= 1;
                false
            }
            Some(_) => {
                watchers.remove(key);
                log::debug!("Last view of {} closed", key);
                self.remove(key)
            }
            None => false,
        }
    }

    /// Drop everything, e.g. when the session ends.
    pub fn clear(&self) {
        self.entries().clear();
    }

    #[cfg(test)]
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries().get(key).is_some_and(|entry| entry.stale)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Receive the group of every future invalidation.
    pub fn subscribe(&self) -> broadcast::Receiver<QueryGroup> {
        self.events.subscribe()
    }
}
