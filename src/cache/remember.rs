//! Get-or-compute on top of a [`PokemonCache`].

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CachedValue, PokemonCache};
use crate::error::Result;

/// Producer output together with whether it may be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computed {
    pub value: CachedValue,
    pub cacheable: bool,
}

impl Computed {
    /// A complete result, stored for the full TTL.
    pub fn cacheable(value: CachedValue) -> Self {
        Self {
            value,
            cacheable: true,
        }
    }

    /// A result degraded by a transient failure; returned but not stored.
    pub fn transient(value: CachedValue) -> Self {
        Self {
            value,
            cacheable: false,
        }
    }
}

/// Returns the live value for `key`, or runs `producer` and caches its result.
///
/// Only successful, cacheable results are stored; a failed or transient
/// producer leaves the key absent so the next call retries upstream.
///
/// Not atomic: concurrent misses on one key each run their producer and the
/// last write wins.
pub async fn remember<C, F, Fut>(
    cache: &C,
    key: &str,
    ttl: Duration,
    producer: F,
) -> Result<CachedValue>
where
    C: PokemonCache + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Computed>>,
{
    if let Some(value) = cache.get(key).await {
        debug!(key, "cache hit");
        return Ok(value);
    }

    debug!(key, "cache miss");
    let computed = producer().await?;
    if computed.cacheable {
        cache.set(key, computed.value.clone(), ttl).await;
    } else {
        debug!(key, "transient result, not cached");
    }
    Ok(computed.value)
}
