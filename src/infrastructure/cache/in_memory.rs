//! In-memory view cache implementation using moka

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::view_cache::ViewCache;
use crate::domain::DomainError;

/// Configuration for the in-memory view cache
#[derive(Debug, Clone)]
pub struct ViewCacheConfig {
    /// Maximum number of cached views
    pub max_capacity: u64,
    /// Views older than this are recomputed even without an invalidation
    pub time_to_live: Duration,
}

impl Default for ViewCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 256,
            time_to_live: Duration::from_secs(300),
        }
    }
}

/// Thread-safe in-memory cache of rendered views, keyed by route path
#[derive(Debug)]
pub struct InMemoryViewCache {
    cache: MokaCache<String, String>,
}

impl InMemoryViewCache {
    /// Creates a view cache with default configuration
    pub fn new() -> Self {
        Self::with_config(ViewCacheConfig::default())
    }

    /// Creates a view cache with the given configuration
    pub fn with_config(config: ViewCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.time_to_live)
            .build();

        Self { cache }
    }
}

impl Default for InMemoryViewCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewCache for InMemoryViewCache {
    async fn get(&self, path: &str) -> Result<Option<String>, DomainError> {
        Ok(self.cache.get(path).await)
    }

    async fn put(&self, path: &str, rendered: &str) -> Result<(), DomainError> {
        self.cache
            .insert(path.to_string(), rendered.to_string())
            .await;
        Ok(())
    }

    async fn invalidate(&self, path: &str) -> Result<(), DomainError> {
        self.cache.remove(path).await;
        Ok(())
    }
}
