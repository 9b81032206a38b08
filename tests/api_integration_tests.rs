//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against a mock upstream.

mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::*;
use pokemon_gateway::cache::{InMemoryCache, PokemonCache};
use pokemon_gateway::{api::create_router, AppState, Config, PokemonService};

// == Helper Functions ==

fn create_test_app(server: &MockServer) -> Router {
    let (service, cache) = cached_service(server);
    create_router(AppState::new(service, cache))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// == List Endpoint Tests ==

#[tokio::test]
async fn test_list_endpoint_success() {
    let server = MockServer::start().await;
    mount_index(&server, &[1, 4]).await;
    mount_detail(&server, 1, "bulbasaur", &["grass", "poison"]).await;
    mount_detail(&server, 4, "charmander", &["fire"]).await;

    let (status, json) = get(create_test_app(&server), "/api/pokemon?limit=2&offset=0").await;

    assert_eq!(status, StatusCode::OK);
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "bulbasaur");
    assert_eq!(items[0]["type"], "grass, poison");
    assert_eq!(items[0]["image"], sprite_url(1).as_str());
    assert_eq!(items[1]["name"], "charmander");
}

#[tokio::test]
async fn test_list_endpoint_defaults() {
    let server = MockServer::start().await;
    mount_index(&server, &[]).await;

    let (status, json) = get(create_test_app(&server), "/api/pokemon").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let query = requests[0].url.query().unwrap_or_default();
    assert!(query.contains("limit=10"));
    assert!(query.contains("offset=0"));
}

#[tokio::test]
async fn test_list_endpoint_upstream_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, json) = get(create_test_app(&server), "/api/pokemon").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["message"], "Service unavailable");
}

#[tokio::test]
async fn test_list_endpoint_validation() {
    let server = MockServer::start().await;

    for uri in [
        "/api/pokemon?limit=0",
        "/api/pokemon?limit=101",
        "/api/pokemon?offset=-1",
        "/api/pokemon?limit=abc",
    ] {
        let (status, json) = get(create_test_app(&server), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        assert!(json["message"].is_string());
    }

    // Validation happens before any upstream call
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_endpoint_unreadable_query_is_json() {
    let server = MockServer::start().await;

    let (status, json) = get(create_test_app(&server), "/api/pokemon?limit=1&limit=2").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["message"].is_string());
    assert!(server.received_requests().await.unwrap().is_empty());
}

// == Search Endpoint Tests ==

#[tokio::test]
async fn test_search_endpoint_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/charizard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_json(
            6,
            "charizard",
            &["fire", "flying"],
        )))
        .mount(&server)
        .await;

    let (status, json) = get(create_test_app(&server), "/api/pokemon/search?name=Charizard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "charizard");
    assert_eq!(json["type"], "fire, flying");
}

#[tokio::test]
async fn test_search_endpoint_missing_name() {
    let server = MockServer::start().await;

    for uri in ["/api/pokemon/search", "/api/pokemon/search?name="] {
        let (status, json) = get(create_test_app(&server), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(json["success"], false);
        assert!(json["message"].is_string());
    }
}

#[tokio::test]
async fn test_search_endpoint_unreadable_query_is_not_found() {
    let server = MockServer::start().await;

    let (status, json) = get(create_test_app(&server), "/api/pokemon/search?name=a&name=b").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Pokemon not found");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_endpoint_collapses_upstream_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon/mew"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    for uri in [
        "/api/pokemon/search?name=missingno",
        "/api/pokemon/search?name=mew",
    ] {
        let (status, json) = get(create_test_app(&server), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Pokemon not found");
    }
}

// == By Id Endpoint Tests ==

#[tokio::test]
async fn test_by_id_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/150"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_json(
            150,
            "mewtwo",
            &["psychic"],
        )))
        .mount(&server)
        .await;

    let (status, json) = get(create_test_app(&server), "/api/pokemon/150").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "mewtwo");

    let (status, json) = get(create_test_app(&server), "/api/pokemon/151").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

// == Stats and Health ==

#[tokio::test]
async fn test_stats_reflect_cache_use() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_json(
            7,
            "squirtle",
            &["water"],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let app = create_test_app(&server);
    get(app.clone(), "/api/pokemon/7").await;
    get(app.clone(), "/api/pokemon/7").await;

    let (status, json) = get(app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["stores"], 1);
    assert_eq!(json["total_entries"], 1);
}

#[tokio::test]
async fn test_disabled_cache_goes_upstream_every_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_json(
            7,
            "squirtle",
            &["water"],
        )))
        .expect(2)
        .mount(&server)
        .await;

    let config = Config {
        upstream_base_url: server.uri(),
        cache_enabled: false,
        ..Config::default()
    };
    let cache = Arc::new(InMemoryCache::new());
    let backend: Arc<dyn PokemonCache> = cache.clone();
    let service = PokemonService::from_config(&config, backend).unwrap();
    let app = create_router(AppState::new(service, cache.clone()));

    get(app.clone(), "/api/pokemon/7").await;
    get(app, "/api/pokemon/7").await;

    assert_eq!(cache.len().await, 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start().await;
    let (status, json) = get(create_test_app(&server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}
