use crate::cache::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::errors::IntakeResult;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default time-to-live for a cached response.
pub(crate) const DEFAULT_TTL_SECS: u64 = 300;
/// Default entry capacity before oldest-insertion eviction kicks in.
pub(crate) const DEFAULT_MAX_ENTRIES: usize = 100;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    created_at: Instant,
    hit_count: u64,
}

/// Read-only snapshot of cache health.
///
/// `avg_hits_per_entry` is exactly that, an average over entries currently
/// resident, not a time-windowed rate. `hit_ratio` is hits over all lookups
/// since construction (or the last `clear`) and is the number to read when
/// judging cache effectiveness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub total_hits: u64,
    pub lookups: u64,
    pub avg_hits_per_entry: f64,
    pub hit_ratio: f64,
}

#[derive(Debug)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    hits: u64,
    lookups: u64,
}

/// Bounded, time-expiring store for computed chat responses.
///
/// Entries expire lazily on read after the TTL; there is no background
/// sweep. Inserting a new key at capacity evicts the single oldest entry by
/// insertion time, regardless of how often it was read. Internally
/// synchronized, so a shared instance is safe on a multi-threaded host.
#[derive(Debug)]
pub struct ResponseCache {
    inner: Mutex<CacheState>,
    ttl: Duration,
    max_entries: usize,
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    /// Cache with default TTL (300 s), capacity (100), and the system clock.
    pub fn new() -> Self {
        Self::build(
            Duration::from_secs(DEFAULT_TTL_SECS),
            DEFAULT_MAX_ENTRIES,
            Arc::new(SystemClock),
        )
    }

    /// Cache with validated configuration and the system clock.
    pub fn with_config(config: &CacheConfig) -> IntakeResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Cache with validated configuration and an injected time source.
    pub fn with_clock(config: &CacheConfig, clock: Arc<dyn Clock>) -> IntakeResult<Self> {
        config.validate()?;
        Ok(Self::build(config.ttl(), config.max_entries, clock))
    }

    fn build(ttl: Duration, max_entries: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(CacheState {
                entries: HashMap::new(),
                hits: 0,
                lookups: 0,
            }),
            ttl,
            max_entries,
            clock,
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a cached response. A present-but-stale entry is removed and
    /// reported as a miss; a fresh hit bumps the entry's hit count.
    pub fn get(&self, key: &str) -> Option<String> {
        let now = self.clock.now();
        let mut guard = self.lock();
        let state = &mut *guard;
        state.lookups += 1;

        let expired = match state.entries.get_mut(key) {
            None => return None,
            Some(entry) => {
                if now.duration_since(entry.created_at) > self.ttl {
                    true
                } else {
                    entry.hit_count += 1;
                    state.hits += 1;
                    return Some(entry.value.clone());
                }
            }
        };

        if expired {
            state.entries.remove(key);
            debug!("cache entry '{}' expired past ttl, removed", key);
        }
        None
    }

    /// Insert or overwrite a response under `key`, timestamped now with a
    /// zeroed hit count. Inserting a new key at capacity first evicts the
    /// oldest entry by insertion time (a linear scan over current entries).
    /// Overwriting an existing key never evicts a neighbor.
    pub fn set(&self, key: &str, response: &str) {
        let now = self.clock.now();
        let mut guard = self.lock();
        let state = &mut *guard;

        if !state.entries.contains_key(key) && state.entries.len() >= self.max_entries {
            let oldest = state
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.created_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                state.entries.remove(&oldest);
                debug!("cache full, evicted oldest entry '{}'", oldest);
            }
        }

        state.entries.insert(
            key.to_string(),
            CacheEntry {
                value: response.to_string(),
                created_at: now,
                hit_count: 0,
            },
        );
    }

    /// Drop all dynamic entries and reset hit/lookup counters.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.hits = 0;
        state.lookups = 0;
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Snapshot of current cache health. Expired entries that have not been
    /// touched since expiry still count toward `size`; expiry is lazy.
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        let size = state.entries.len();
        let total_hits: u64 = state.entries.values().map(|e| e.hit_count).sum();
        let avg_hits_per_entry = if size == 0 {
            0.0
        } else {
            total_hits as f64 / size as f64
        };
        let hit_ratio = if state.lookups == 0 {
            0.0
        } else {
            state.hits as f64 / state.lookups as f64
        };
        CacheStats {
            size,
            total_hits,
            lookups: state.lookups,
            avg_hits_per_entry,
            hit_ratio,
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
