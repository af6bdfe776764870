use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use web_sys::console;

/// Cache entry with expiration
#[derive(Clone)]
pub struct CacheEntry {
    data: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(data: String, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Request cache for deduplicating API calls
pub struct RequestCache {
    cache: Arc<Mutex<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl RequestCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Contest-index responses go stale quickly; countdowns tick
    /// client-side, so a minute of reuse is the most we allow.
    pub fn new_default() -> Self {
        Self::new(Duration::from_secs(60))
    }

    /// Gets a cached response or fetches it if not cached
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetcher: F) -> Result<String, String>
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<String, String>> + 'static,
    {
        // Check cache first
        if let Some(entry) = self.get(key) {
            if !entry.is_expired() {
                console::log_1(&format!("Cache hit for key: {}", key).into());
                return Ok(entry.data);
            }
        }

        // Fetch and cache
        console::log_1(&format!("Cache miss for key: {}, fetching...", key).into());
        let result = fetcher().await?;
        self.set(key.to_string(), result.clone());
        Ok(result)
    }

    /// Gets a value from cache
    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        let cache = self.cache.lock().unwrap();
        cache.get(key).cloned()
    }

    /// Sets a value in cache with default TTL
    pub fn set(&self, key: String, value: String) {
        let entry = CacheEntry::new(value, self.ttl);
        let mut cache = self.cache.lock().unwrap();
        cache.insert(key, entry);
    }

    /// Removes a value from cache
    pub fn remove(&self, key: &str) {
        let mut cache = self.cache.lock().unwrap();
        cache.remove(key);
    }

    /// Invalidate all cache entries
    pub fn clear(&self) {
        let mut cache = self.cache.lock().unwrap();
        cache.clear();
    }
}

pub static REQUEST_CACHE: LazyLock<RequestCache> = LazyLock::new(RequestCache::new_default);

/// Helper function to get or fetch data with caching
pub async fn cached_request<F, Fut>(key: &str, fetcher: F) -> Result<String, String>
where
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<String, String>> + 'static,
{
    REQUEST_CACHE.get_or_fetch(key, fetcher).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_cache_entry_expiration() {
        let entry = CacheEntry::new("test_value".to_string(), Duration::from_millis(100));
        assert!(!entry.is_expired());

        // Wait for expiration
        std::thread::sleep(Duration::from_millis(150));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_cache_basic_operations() {
        let cache = RequestCache::new(Duration::from_secs(60));

        // Test set and get
        cache.set("test_key".to_string(), "test_value".to_string());
        let entry = cache.get("test_key").unwrap();
        assert_eq!(entry.data, "test_value");
        assert!(!entry.is_expired());

        // Test remove
        cache.remove("test_key");
        assert!(cache.get("test_key").is_none());
    }

    #[test]
    fn test_cache_clear() {
        let cache = RequestCache::new(Duration::from_secs(60));
        cache.set("a".to_string(), "1".to_string());
        cache.set("b".to_string(), "2".to_string());
        cache.clear();
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_none());
    }
}
