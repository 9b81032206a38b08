//! Pokemon Service
//!
//! List, detail, id, and name lookups over the upstream API, memoized
//! through an injected [`PokemonCache`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::cache::{keys, remember, CachedValue, Computed, PokemonCache, DEFAULT_TTL_SECS};
use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::models::{ListQuery, PokemonSummary};
use crate::upstream::{parse_index, transform, UpstreamClient};

/// Detail fetches allowed in flight while resolving one list page
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 4;

// == Pokemon Service ==
/// Fetch-transform-cache facade.
///
/// With no cache attached every call goes upstream.
#[derive(Clone)]
pub struct PokemonService {
    client: UpstreamClient,
    cache: Option<Arc<dyn PokemonCache>>,
    ttl: Duration,
    detail_concurrency: usize,
}

impl PokemonService {
    // == Constructor ==
    pub fn new(client: UpstreamClient, cache: Option<Arc<dyn PokemonCache>>) -> Self {
        Self {
            client,
            cache,
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
        }
    }

    /// Builds the service from configuration, attaching `cache` only when
    /// caching is enabled.
    pub fn from_config(config: &Config, cache: Arc<dyn PokemonCache>) -> Result<Self> {
        let client = UpstreamClient::from_config(config)?;
        let cache = config.cache_enabled.then_some(cache);

        Ok(Self::new(client, cache)
            .with_ttl(config.cache_ttl())
            .with_detail_concurrency(config.detail_concurrency))
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Caps in-flight detail fetches per list page; 1 resolves sequentially.
    pub fn with_detail_concurrency(mut self, limit: usize) -> Self {
        self.detail_concurrency = limit.max(1);
        self
    }

    // == List ==
    /// Returns one page of summaries in upstream order.
    ///
    /// Entries whose detail lookup fails are skipped, so the page may be
    /// shorter than `query.limit()`. A page with entries skipped because the
    /// upstream was unavailable is returned but not cached. A failed index
    /// fetch is reported as `UpstreamUnavailable`.
    pub async fn get_pokemon_list(&self, query: &ListQuery) -> Result<Vec<PokemonSummary>> {
        let key = keys::list_key(query);

        let value = self
            .cached(&key, move || async move {
                let page = self
                    .client
                    .fetch_index(query)
                    .await
                    .map_err(as_unavailable)?;
                let urls = parse_index(&page).map_err(as_unavailable)?;

                let resolved = self
                    .resolve_details(urls.into_iter().take(query.limit() as usize))
                    .await;
                info!(
                    limit = query.limit(),
                    offset = query.offset(),
                    returned = resolved.list.len(),
                    unavailable = resolved.unavailable,
                    "resolved pokemon page"
                );

                let value = CachedValue::Many(resolved.list);
                Ok::<_, GatewayError>(if resolved.unavailable > 0 {
                    Computed::transient(value)
                } else {
                    Computed::cacheable(value)
                })
            })
            .await?;

        value.into_many().ok_or_else(|| kind_mismatch(&key))
    }

    async fn resolve_details<I>(&self, urls: I) -> ResolvedPage
    where
        I: IntoIterator<Item = String>,
    {
        stream::iter(urls)
            .map(move |url| async move {
                let result = self.get_pokemon_details(&url).await;
                (url, result)
            })
            .buffered(self.detail_concurrency)
            .fold(ResolvedPage::default(), |mut page, (url, result)| async move {
                match result {
                    Ok(summary) => page.list.push(summary),
                    Err(err) => {
                        warn!(%url, error = %err, "skipping pokemon");
                        if matches!(err, GatewayError::UpstreamUnavailable(_)) {
                            page.unavailable += 1;
                        }
                    }
                }
                page
            })
            .await
    }

    // == Detail ==
    /// Fetches and transforms the resource at `url`.
    pub async fn get_pokemon_details(&self, url: &str) -> Result<PokemonSummary> {
        let key = keys::details_key(url);

        let value = self
            .cached(&key, move || async move {
                let summary = self.fetch_summary(url).await?;
                Ok::<_, GatewayError>(Computed::cacheable(CachedValue::One(summary)))
            })
            .await?;

        value.into_one().ok_or_else(|| kind_mismatch(&key))
    }

    // == By Id ==
    pub async fn get_pokemon_by_id(&self, id: u32) -> Result<PokemonSummary> {
        let key = keys::by_id_key(id);
        let url = self.client.pokemon_url(&id.to_string());

        let value = self
            .cached(&key, move || async move {
                let summary = self.fetch_summary(url.as_str()).await?;
                Ok::<_, GatewayError>(Computed::cacheable(CachedValue::One(summary)))
            })
            .await?;

        value.into_one().ok_or_else(|| kind_mismatch(&key))
    }

    // == Search ==
    /// Looks a Pokemon up by name, case-insensitively. Never cached.
    pub async fn search_pokemon_by_name(&self, name: &str) -> Result<PokemonSummary> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GatewayError::InvalidInput(
                "Pokemon name is required".to_string(),
            ));
        }

        let url = self.client.pokemon_url(&name.to_lowercase());
        debug!(%url, "searching pokemon by name");

        self.fetch_summary(url.as_str()).await
    }

    async fn fetch_summary(&self, url: &str) -> Result<PokemonSummary> {
        let raw = self.client.fetch(url, &[]).await?;
        transform(&raw)
    }

    async fn cached<F, Fut>(&self, key: &str, producer: F) -> Result<CachedValue>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Computed>>,
    {
        match &self.cache {
            Some(cache) => remember(cache.as_ref(), key, self.ttl, producer).await,
            None => producer().await.map(|computed| computed.value),
        }
    }
}

/// Outcome of resolving the detail URLs of one index page.
#[derive(Debug, Default)]
struct ResolvedPage {
    list: Vec<PokemonSummary>,
    /// Entries skipped because the upstream was unavailable
    unavailable: usize,
}

fn as_unavailable(err: GatewayError) -> GatewayError {
    match err {
        GatewayError::UpstreamUnavailable(_) => err,
        other => GatewayError::UpstreamUnavailable(other.to_string()),
    }
}

fn kind_mismatch(key: &str) -> GatewayError {
    GatewayError::Internal(format!("cached value under {} has the wrong shape", key))
}
