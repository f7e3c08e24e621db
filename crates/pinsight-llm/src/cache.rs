//! Bounded TTL cache for generation responses.
//!
//! Keyed by a SHA-256 of `model:prompt`, so identical requests within the
//! TTL window hit the cache instead of the service. Constructed once and
//! shared via `Arc` — no global state.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};

use crate::client::GenerateResponse;

struct CacheEntry {
    value: GenerateResponse,
    created_at: Instant,
    /// Insertion sequence number; eviction order under capacity pressure.
    seq: u64,
}

struct CacheState {
    entries: HashMap<String, CacheEntry>,
    next_seq: u64,
}

/// Process-lifetime response cache with capacity and TTL eviction.
///
/// All access is serialized behind a mutex; the lock is held only for map
/// operations, never across network I/O.
pub struct ResponseCache {
    state: Mutex<CacheState>,
    max_entries: usize,
    ttl: Duration,
}

impl ResponseCache {
    #[must_use]
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                next_seq: 0,
            }),
            max_entries,
            ttl,
        }
    }

    fn key(model: &str, prompt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(model.as_bytes());
        hasher.update(b":");
        hasher.update(prompt.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // A poisoned cache still holds valid entries.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a cached response. Entries at or past the TTL are evicted
    /// and reported as a miss.
    #[must_use]
    pub fn get(&self, prompt: &str, model: &str) -> Option<GenerateResponse> {
        let key = Self::key(model, prompt);
        let mut state = self.lock();

        let hit = state
            .entries
            .get(&key)
            .map(|e| (e.created_at.elapsed() < self.ttl, e.value.clone()));
        match hit {
            Some((true, value)) => {
                tracing::debug!(key = %&key[..8], "generation cache hit");
                Some(value)
            }
            Some((false, _)) => {
                state.entries.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Store a response, evicting the single oldest-inserted entry first
    /// when the cache is at capacity.
    pub fn set(&self, prompt: &str, model: &str, value: GenerateResponse) {
        let key = Self::key(model, prompt);
        let mut state = self.lock();

        if state.entries.len() >= self.max_entries {
            if let Some(oldest) = state
                .entries
                .iter()
                .min_by_key(|(_, e)| e.seq)
                .map(|(k, _)| k.clone())
            {
                state.entries.remove(&oldest);
            }
        }

        let seq = state.next_seq;
        state.next_seq += 1;
        state.entries.insert(
            key,
            CacheEntry {
                value,
                created_at: Instant::now(),
                seq,
            },
        );
        tracing::debug!("cached generation response");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(text: &str) -> GenerateResponse {
        GenerateResponse {
            response: text.to_string(),
            prompt_eval_count: None,
            eval_count: None,
        }
    }

    fn long_lived_cache(max_entries: usize) -> ResponseCache {
        ResponseCache::new(max_entries, Duration::from_secs(3600))
    }

    #[test]
    fn miss_on_empty_cache() {
        let cache = long_lived_cache(10);
        assert!(cache.get("prompt", "model").is_none());
    }

    #[test]
    fn hit_within_ttl() {
        let cache = long_lived_cache(10);
        cache.set("prompt", "model", response("cached"));
        let hit = cache.get("prompt", "model").expect("expected cache hit");
        assert_eq!(hit.response, "cached");
    }

    #[test]
    fn key_includes_model() {
        let cache = long_lived_cache(10);
        cache.set("prompt", "model-a", response("a"));
        assert!(cache.get("prompt", "model-b").is_none());
    }

    #[test]
    fn zero_ttl_expires_immediately_and_evicts() {
        let cache = ResponseCache::new(10, Duration::ZERO);
        cache.set("prompt", "model", response("stale"));
        assert_eq!(cache.len(), 1);
        assert!(cache.get("prompt", "model").is_none());
        // The expired entry was removed on lookup.
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn capacity_overflow_evicts_oldest_inserted() {
        let cache = long_lived_cache(3);
        cache.set("p1", "m", response("1"));
        cache.set("p2", "m", response("2"));
        cache.set("p3", "m", response("3"));
        cache.set("p4", "m", response("4"));

        assert_eq!(cache.len(), 3);
        assert!(cache.get("p1", "m").is_none(), "oldest entry should be gone");
        assert!(cache.get("p2", "m").is_some());
        assert!(cache.get("p3", "m").is_some());
        assert!(cache.get("p4", "m").is_some());
    }

    #[test]
    fn capacity_plus_one_keeps_most_recent_capacity_entries() {
        let capacity = 5;
        let cache = long_lived_cache(capacity);
        for i in 0..=capacity {
            cache.set(&format!("p{i}"), "m", response(&i.to_string()));
        }
        assert_eq!(cache.len(), capacity);
        assert!(cache.get("p0", "m").is_none());
        for i in 1..=capacity {
            assert!(
                cache.get(&format!("p{i}"), "m").is_some(),
                "entry p{i} should survive"
            );
        }
    }
}
