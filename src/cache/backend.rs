//! Cache Backend Module
//!
//! The storage seam the facade is written against, plus the in-process
//! implementation used by the server.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore, CachedValue};

/// Key/value storage with per-entry TTL.
///
/// Implementations must treat an expired entry exactly like an absent one.
#[async_trait]
pub trait PokemonCache: Send + Sync {
    /// Returns the live value stored under `key`, if any.
    async fn get(&self, key: &str) -> Option<CachedValue>;

    /// Stores `value` under `key`, expiring `ttl` from now.
    async fn set(&self, key: &str, value: CachedValue, ttl: Duration);
}

/// Process-wide cache backed by a [`CacheStore`] behind an async RwLock.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    store: RwLock<CacheStore>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns current statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Drops every expired entry, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl PokemonCache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<CachedValue> {
        // Write lock: expired entries are evicted on read and stats are updated
        self.store.write().await.get(key)
    }

    async fn set(&self, key: &str, value: CachedValue, ttl: Duration) {
        self.store.write().await.set(key.to_string(), value, ttl);
    }
}
