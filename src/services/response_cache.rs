use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::{debug, info};

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Thread-safe memo of successful external responses with a fixed TTL.
///
/// Entries are keyed by a hash of the call inputs; `invalidate_all` is the
/// manual-refresh path.
#[derive(Clone)]
pub struct ResponseCache<V> {
    name: &'static str,
    entries: Arc<DashMap<String, CacheEntry<V>>>,
    ttl: Duration,
}

impl<V: Clone> ResponseCache<V> {
    pub fn new(name: &'static str, ttl: Duration) -> Self {
        Self {
            name,
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Returns the cached value if it is still fresh; expired entries are evicted.
    pub fn get(&self, key: &str) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if entry.stored_at.elapsed() < self.ttl {
                debug!("{} cache hit for {}", self.name, key);
                return Some(entry.value.clone());
            }
            drop(entry); // release the shard lock before removing
            self.entries.remove(key);
            debug!("{} cache entry {} expired", self.name, key);
        }
        None
    }

    pub fn insert(&self, key: String, value: V) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn invalidate_all(&self) {
        let count = self.len();
        self.entries.clear();
        info!("Invalidated {} {} cache entries", count, self.name);
    }

    pub fn cleanup_expired(&self) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Stable key for a list of call inputs.
pub fn cache_key<T: Hash + ?Sized>(prefix: &str, input: &T) -> String {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    format!("{}:{:x}", prefix, hasher.finish())
}
