//! Upstream HTTP Client
//!
//! Single-attempt, time-bounded GET requests against the Pokemon API.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::models::ListQuery;

const USER_AGENT: &str = concat!("pokemon_gateway/", env!("CARGO_PKG_VERSION"));

// == Upstream Client ==
/// Thin wrapper over a shared `reqwest::Client` rooted at the API base URL.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UpstreamClient {
    // == Constructor ==
    /// Creates a client for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GatewayError::Config(format!("invalid upstream base url: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::Config(format!(
                "upstream base url cannot hold a path: {}",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Config(format!("failed to build http client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// Creates a client from the upstream settings in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.upstream_base_url, config.request_timeout())
    }

    // == URL Builders ==
    /// `{base}/pokemon`
    pub fn index_url(&self) -> Url {
        self.join(&["pokemon"])
    }

    /// `{base}/pokemon/{segment}`, with `segment` escaped as one path segment.
    pub fn pokemon_url(&self, segment: &str) -> Url {
        self.join(&["pokemon", segment])
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Base is checked in `new` to be hierarchical, so this always applies
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // == Fetch ==
    /// Fetches `url` with `query` appended and returns the decoded JSON body.
    ///
    /// # Errors
    /// - `NotFound` when upstream answers 404
    /// - `UpstreamUnavailable` on any other non-success status, a network
    ///   error, or a timeout
    /// - `MalformedPayload` when the URL is unusable or the body is not JSON
    pub async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        debug!(url, ?query, "upstream GET");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            warn!(url, %status, "upstream returned non-success status");
            return Err(GatewayError::UpstreamUnavailable(format!(
                "{} returned {}",
                url, status
            )));
        }

        response.json::<Value>().await.map_err(|e| classify(url, e))
    }

    /// Fetches one page of the Pokemon index.
    pub async fn fetch_index(&self, query: &ListQuery) -> Result<Value> {
        let params = [
            ("limit", query.limit().to_string()),
            ("offset", query.offset().to_string()),
        ];
        self.fetch(self.index_url().as_str(), &params).await
    }
}

fn classify(url: &str, err: reqwest::Error) -> GatewayError {
    if err.is_builder() || err.is_decode() {
        warn!(url, error = %err, "unusable upstream response");
        GatewayError::MalformedPayload(format!("{}: {}", url, err))
    } else {
        warn!(url, error = %err, "upstream request failed");
        GatewayError::UpstreamUnavailable(format!("{}: {}", url, err))
    }
}
