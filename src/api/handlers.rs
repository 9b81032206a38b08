//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::cache::{InMemoryCache, PokemonCache};
use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::models::{
    HealthResponse, ListParams, ListQuery, PokemonSummary, SearchParams, StatsResponse,
};
use crate::service::PokemonService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Fetch-transform-cache facade
    pub service: Arc<PokemonService>,
    /// Process-wide cache, held here for stats and the sweeper
    pub cache: Arc<InMemoryCache>,
}

impl AppState {
    /// Creates a new AppState around an already built service.
    pub fn new(service: PokemonService, cache: Arc<InMemoryCache>) -> Self {
        Self {
            service: Arc::new(service),
            cache,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// The same in-memory cache backs the service and the stats endpoint.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Arc::new(InMemoryCache::new());
        let backend: Arc<dyn PokemonCache> = cache.clone();
        let service = PokemonService::from_config(config, backend)?;
        Ok(Self::new(service, cache))
    }
}

/// Handler for GET /api/pokemon
///
/// Returns one page of summaries; 422 on invalid pagination or an
/// unreadable query string, 503 when the upstream index is unavailable.
pub async fn list_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<PokemonSummary>>> {
    let Query(params) = params.map_err(|rej| GatewayError::InvalidInput(rej.body_text()))?;
    let query = ListQuery::try_from(params)?;
    let list = state.service.get_pokemon_list(&query).await?;

    Ok(Json(list))
}

/// Handler for GET /api/pokemon/search
///
/// Every failure, including a missing name or an unreadable query string,
/// answers 404 with `{success: false, message}`.
pub async fn search_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let Ok(Query(params)) = params else {
        return GatewayError::not_found_response("Pokemon not found");
    };
    let Some(name) = params.name() else {
        return GatewayError::not_found_response("Pokemon name is required");
    };

    match state.service.search_pokemon_by_name(name).await {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => {
            debug!(name, error = %err, "search failed");
            GatewayError::not_found_response("Pokemon not found")
        }
    }
}

/// Handler for GET /api/pokemon/:id
pub async fn by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PokemonSummary>> {
    let summary = state.service.get_pokemon_by_id(id).await?;

    Ok(Json(summary))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
