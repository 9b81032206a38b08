//! Shared fixtures for the integration tests: a mock PokeAPI.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pokemon_gateway::cache::{InMemoryCache, PokemonCache};
use pokemon_gateway::upstream::UpstreamClient;
use pokemon_gateway::PokemonService;

/// Upstream body for one Pokemon.
pub fn pokemon_json(id: u32, name: &str, types: &[&str]) -> Value {
    let slots: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, kind)| json!({"slot": i + 1, "type": {"name": kind, "url": "https://pokeapi.co/api/v2/type/1/"}}))
        .collect();

    json!({
        "id": id,
        "name": name,
        "types": slots,
        "sprites": {"front_default": sprite_url(id), "back_default": null}
    })
}

pub fn sprite_url(id: u32) -> String {
    format!("https://img.example/sprites/{}.png", id)
}

/// Detail URL as the upstream index would advertise it.
pub fn detail_url(server: &MockServer, id: u32) -> String {
    format!("{}/pokemon/{}/", server.uri(), id)
}

/// Upstream index body listing `ids` in order.
pub fn index_json(server: &MockServer, ids: &[u32]) -> Value {
    let results: Vec<Value> = ids
        .iter()
        .map(|id| json!({"name": format!("p{}", id), "url": detail_url(server, *id)}))
        .collect();

    json!({"count": 1302, "next": null, "previous": null, "results": results})
}

/// Mounts `GET /pokemon` answering with an index of `ids`.
pub async fn mount_index(server: &MockServer, ids: &[u32]) {
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_json(server, ids)))
        .mount(server)
        .await;
}

/// Mounts `GET /pokemon/{id}/` answering with a Pokemon body.
pub async fn mount_detail(server: &MockServer, id: u32, name: &str, types: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{}/", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_json(id, name, types)))
        .mount(server)
        .await;
}

pub fn client_for(server: &MockServer) -> UpstreamClient {
    UpstreamClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

/// Service against `server` with a fresh in-memory cache.
pub fn cached_service(server: &MockServer) -> (PokemonService, Arc<InMemoryCache>) {
    let cache = Arc::new(InMemoryCache::new());
    let backend: Arc<dyn PokemonCache> = cache.clone();
    (PokemonService::new(client_for(server), Some(backend)), cache)
}

/// Service against `server` that never caches.
pub fn uncached_service(server: &MockServer) -> PokemonService {
    PokemonService::new(client_for(server), None)
}
