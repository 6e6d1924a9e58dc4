use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

struct Entry<V> {
    value: V,
    stored: Instant,
}

/// `TtlCache`
/// A key-value store with per-entry expiry, the refresh throttle between
/// the data providers and their remote APIs.
///
/// The clock is always passed in rather than sampled internally, so
/// expiry is deterministic under test. An entry expires once
/// `now - stored >= ttl`; expired entries are evicted on access.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, Entry<V>>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        TtlCache {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: K, value: V, now: Instant) {
        self.entries.insert(key, Entry { value, stored: now });
    }

    /// A live value for the key, or nothing once the entry has expired.
    pub fn get(&mut self, key: &K, now: Instant) -> Option<&V> {
        let expired = match self.entries.get(key) {
            Some(entry) => now.duration_since(entry.stored) >= self.ttl,
            None => return None,
        };

        if expired {
            self.entries.remove(key);
            return None;
        }

        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns the cached value, refreshing it first when missing or
    /// expired.
    pub fn fetch_with<F>(&mut self, key: K, now: Instant, refresh: F) -> &V
    where
        K: Clone,
        F: FnOnce() -> V,
    {
        let stale = match self.entries.get(&key) {
            Some(entry) => now.duration_since(entry.stored) >= self.ttl,
            None => true,
        };

        if stale {
            self.entries.insert(
                key.clone(),
                Entry {
                    value: refresh(),
                    stored: now,
                },
            );
        }

        &self.entries[&key].value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
