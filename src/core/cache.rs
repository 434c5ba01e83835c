use serde_json::Value;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

pub const DEFAULT_CAPACITY: usize = 128;
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Cache entry with TTL support
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    created_at: Instant,
    ttl: Duration,
}

impl<T> CacheEntry<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// Bounded TTL cache with thread-safe access.
///
/// Once `capacity` live entries are stored, inserting a new key first drops
/// expired entries and then the oldest remaining one.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    storage: Arc<RwLock<HashMap<K, CacheEntry<V>>>>,
    default_ttl: Duration,
    capacity: usize,
}

impl<K, V> Clone for TtlCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            default_ttl: self.default_ttl,
            capacity: self.capacity,
        }
    }
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a new TTL cache; a zero capacity is raised to one
    pub fn new(default_ttl: Duration, capacity: usize) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            default_ttl,
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get a value from the cache
    pub fn get(&self, key: &K) -> Option<V> {
        let mut storage = self.storage.write().ok()?;

        if let Some(entry) = storage.get(key) {
            if entry.is_expired() {
                storage.remove(key);
                None
            } else {
                Some(entry.value.clone())
            }
        } else {
            None
        }
    }

    /// Insert a value with default TTL
    pub fn insert(&self, key: K, value: V) {
        self.insert_with_ttl(key, value, self.default_ttl);
    }

    /// Insert a value with custom TTL
    pub fn insert_with_ttl(&self, key: K, value: V, ttl: Duration) {
        if let Ok(mut storage) = self.storage.write() {
            if !storage.contains_key(&key) && storage.len() >= self.capacity {
                storage.retain(|_, entry| !entry.is_expired());
                if storage.len() >= self.capacity {
                    let oldest = storage
                        .iter()
                        .min_by_key(|(_, entry)| entry.created_at)
                        .map(|(k, _)| k.clone());
                    if let Some(oldest) = oldest {
                        storage.remove(&oldest);
                    }
                }
            }
            storage.insert(key, CacheEntry::new(value, ttl));
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        if let Ok(storage) = self.storage.read() {
            let total_entries = storage.len();
            let expired_count = storage.values().filter(|entry| entry.is_expired()).count();

            CacheStats {
                total_entries,
                active_entries: total_entries - expired_count,
                expired_entries: expired_count,
            }
        } else {
            CacheStats::default()
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub total_entries: usize,
    pub active_entries: usize,
    pub expired_entries: usize,
}

/// Response cache for the two memoized reads: bill search and bill detail.
/// Keys are the exact request path plus query string.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    searches: TtlCache<String, Value>,
    bills: TtlCache<String, Value>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TTL_SECS), DEFAULT_CAPACITY)
    }
}

impl ResponseCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            searches: TtlCache::new(ttl, capacity),
            bills: TtlCache::new(ttl, capacity),
        }
    }

    pub fn key(path: &str, query: &str) -> String {
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        }
    }

    pub fn cache_search(&self, key: String, response: Value) {
        self.searches.insert(key, response);
    }

    pub fn get_search(&self, key: &str) -> Option<Value> {
        self.searches.get(&key.to_string())
    }

    pub fn cache_bill(&self, key: String, response: Value) {
        self.bills.insert(key, response);
    }

    pub fn get_bill(&self, key: &str) -> Option<Value> {
        self.bills.get(&key.to_string())
    }

    /// Statistics per cache, keyed `searches` and `bills`
    pub fn stats(&self) -> HashMap<&'static str, CacheStats> {
        HashMap::from([("searches", self.searches.stats()), ("bills", self.bills.stats())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread;

    #[test]
    fn test_ttl_cache_basic_operations() {
        let cache = TtlCache::new(Duration::from_millis(100), 8);

        cache.insert("key1".to_string(), "value1".to_string());
        assert_eq!(cache.get(&"key1".to_string()), Some("value1".to_string()));
        assert_eq!(cache.get(&"key2".to_string()), None);
    }

    #[test]
    fn test_ttl_expiration() {
        let cache = TtlCache::new(Duration::from_millis(50), 8);

        cache.insert("key".to_string(), "value".to_string());
        assert_eq!(cache.get(&"key".to_string()), Some("value".to_string()));

        thread::sleep(Duration::from_millis(60));
        assert_eq!(cache.get(&"key".to_string()), None);
    }

    #[test]
    fn test_capacity_evicts_oldest_entry() {
        let cache = TtlCache::new(Duration::from_secs(60), 2);

        cache.insert("first".to_string(), 1);
        thread::sleep(Duration::from_millis(5));
        cache.insert("second".to_string(), 2);
        thread::sleep(Duration::from_millis(5));
        cache.insert("third".to_string(), 3);

        assert_eq!(cache.stats().total_entries, 2);
        assert_eq!(cache.get(&"first".to_string()), None);
        assert_eq!(cache.get(&"second".to_string()), Some(2));
        assert_eq!(cache.get(&"third".to_string()), Some(3));
    }

    #[test]
    fn test_capacity_prefers_dropping_expired_entries() {
        let cache = TtlCache::new(Duration::from_secs(60), 2);

        cache.insert("keep".to_string(), 1);
        cache.insert_with_ttl("stale".to_string(), 2, Duration::from_millis(10));
        thread::sleep(Duration::from_millis(20));
        cache.insert("new".to_string(), 3);

        assert_eq!(cache.get(&"keep".to_string()), Some(1));
        assert_eq!(cache.get(&"new".to_string()), Some(3));
        assert_eq!(cache.stats().total_entries, 2);
    }

    #[test]
    fn test_overwrite_at_capacity_does_not_evict() {
        let cache = TtlCache::new(Duration::from_secs(60), 2);

        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.insert("a".to_string(), 10);

        assert_eq!(cache.get(&"a".to_string()), Some(10));
        assert_eq!(cache.get(&"b".to_string()), Some(2));
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let cache: TtlCache<String, i32> = TtlCache::new(Duration::from_secs(1), 0);
        assert_eq!(cache.capacity(), 1);
    }

    #[test]
    fn test_stats_count_expired_entries() {
        let cache = TtlCache::new(Duration::from_millis(50), 8);

        cache.insert("key1".to_string(), "value1".to_string());
        cache.insert("key2".to_string(), "value2".to_string());

        let stats_before = cache.stats();
        assert_eq!(stats_before.total_entries, 2);
        assert_eq!(stats_before.active_entries, 2);

        thread::sleep(Duration::from_millis(60));

        let stats_after = cache.stats();
        assert_eq!(stats_after.active_entries, 0);
        assert_eq!(stats_after.expired_entries, 2);
    }

    #[test]
    fn test_response_cache() {
        let cache = ResponseCache::default();
        let search_key = ResponseCache::key("/bills", "屆=11&page=1&limit=20");
        let bill_key = ResponseCache::key("/bills/203110077970000", "");
        assert_eq!(bill_key, "/bills/203110077970000");

        cache.cache_search(search_key.clone(), json!({"bills": []}));
        cache.cache_bill(bill_key.clone(), json!({"data": {"議案編號": "203110077970000"}}));

        assert_eq!(cache.get_search(&search_key), Some(json!({"bills": []})));
        assert!(cache.get_bill(&bill_key).is_some());
        assert!(cache.get_bill(&search_key).is_none());

        let stats = cache.stats();
        assert_eq!(stats["searches"].active_entries, 1);
        assert_eq!(stats["bills"].active_entries, 1);
    }
}
