//! HTTP client for PokeAPI.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Every GET is memoized in a [`TimedCache`] keyed
//! by the full request URL, one cache per resource type.

mod async_wrapper;
pub use async_wrapper::{AsyncPokeApiClient, AsyncPokeApiClientImpl};

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{PokeApiError, PokeApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{LocationArea, LocationPage, Pokemon};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

/// Raw response body as stored in the response caches.
pub type Payload = Arc<[u8]>;

/// Largest response body the client will read.
const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

/// HTTP client for PokeAPI.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct PokeApiClient {
    /// Base URL for PokeAPI
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Cached location list pages
    location_cache: TimedCache<Payload>,

    /// Cached location areas
    area_cache: TimedCache<Payload>,

    /// Cached Pokémon
    pokemon_cache: TimedCache<Payload>,

    /// Metrics collector
    metrics: Metrics,
}

impl PokeApiClient {
    /// Create a new PokeApiClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.base_url.clone(),
            config.request_timeout(),
            config.cache_ttl(),
        )
    }

    /// Create a PokeApiClient with a custom base URL and cache TTL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, cache_ttl: Duration) -> Self {
        Self::build(base_url, Duration::from_secs(10), cache_ttl)
    }

    fn build(base_url: String, timeout: Duration, cache_ttl: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            location_cache: TimedCache::new(cache_ttl),
            area_cache: TimedCache::new(cache_ttl),
            pokemon_cache: TimedCache::new(cache_ttl),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Normalize a user-supplied name into a URL path segment.
    fn name_segment(name: &str) -> String {
        urlencoding::encode(&name.trim().to_lowercase()).into_owned()
    }

    // ========================= Resource Operations =========================

    /// Get one page of locations.
    ///
    /// # Arguments
    /// * `offset` - Number of locations to skip
    /// * `limit` - Maximum number of locations to return
    pub fn get_locations(&self, offset: usize, limit: usize) -> PokeApiResult<LocationPage> {
        let url = self.build_url(&format!("/location?offset={}&limit={}", offset, limit));
        let resource = format!("locations at offset {}", offset);
        self.fetch_cached(&self.location_cache, &url, &resource)
    }

    /// Get a location area by name.
    pub fn get_location_area(&self, name: &str) -> PokeApiResult<LocationArea> {
        let segment = Self::name_segment(name);
        let url = self.build_url(&format!("/location-area/{}", segment));
        let resource = format!("location-area {}", segment);
        self.fetch_cached(&self.area_cache, &url, &resource)
    }

    /// Get a Pokémon by name.
    pub fn get_pokemon(&self, name: &str) -> PokeApiResult<Pokemon> {
        let segment = Self::name_segment(name);
        let url = self.build_url(&format!("/pokemon/{}", segment));
        let resource = format!("pokemon {}", segment);
        self.fetch_cached(&self.pokemon_cache, &url, &resource)
    }

    /// Serve `url` from `cache` when the cached payload decodes, otherwise fetch it.
    ///
    /// Only payloads that were fetched successfully and decoded are cached.
    fn fetch_cached<T: DeserializeOwned>(
        &self,
        cache: &TimedCache<Payload>,
        url: &str,
        resource: &str,
    ) -> PokeApiResult<T> {
        if let Some(payload) = cache.get(url) {
            match serde_json::from_slice::<T>(&payload) {
                Ok(value) => {
                    tracing::debug!(url = %url, "Cache hit");
                    self.metrics.record_cache_access(true);
                    return Ok(value);
                }
                Err(e) => {
                    tracing::warn!(url = %url, "Cached payload failed to decode, refetching: {}", e);
                    self.metrics.record_stale_payload();
                }
            }
        }

        tracing::debug!(url = %url, "Cache miss");
        self.metrics.record_cache_access(false);

        let payload = self.get(url, resource)?;
        let value = serde_json::from_slice::<T>(&payload).map_err(PokeApiError::JsonError)?;

        cache.add(url, payload);
        Ok(value)
    }

    /// Execute a GET request and read the whole body.
    fn get(&self, url: &str, resource: &str) -> PokeApiResult<Payload> {
        let timer = HttpTimer::new(self.metrics.clone());
        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(url)
            .call()
            .map_err(|e| Self::map_error(e, resource))
            .and_then(Self::read_body);

        match &result {
            Ok(payload) => {
                tracing::debug!("GET {} - Success ({} bytes)", url, payload.len());
                timer.complete();
            }
            Err(e) => {
                tracing::debug!("GET {} - Error: {}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Read a successful response body into a payload.
    fn read_body(response: ureq::Response) -> PokeApiResult<Payload> {
        let status = response.status();
        if status > 299 {
            return Err(PokeApiError::ApiError {
                status,
                message: response.status_text().to_string(),
            });
        }

        let mut body = Vec::new();
        response
            .into_reader()
            .take(MAX_BODY_BYTES + 1)
            .read_to_end(&mut body)
            .map_err(|e| PokeApiError::HttpError(format!("failed to read response body: {}", e)))?;

        if body.len() as u64 > MAX_BODY_BYTES {
            return Err(PokeApiError::HttpError(format!(
                "response body exceeds {} bytes",
                MAX_BODY_BYTES
            )));
        }

        Ok(Payload::from(body))
    }

    /// Map a ureq error to a PokeApiError.
    fn map_error(error: ureq::Error, resource: &str) -> PokeApiError {
        match error {
            ureq::Error::Status(code, response) => match code {
                404 => PokeApiError::NotFound(resource.to_string()),
                429 => PokeApiError::RateLimitExceeded,
                _ => PokeApiError::ApiError {
                    status: code,
                    message: response
                        .into_string()
                        .unwrap_or_else(|_| "Unknown error".to_string()),
                },
            },
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    PokeApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    PokeApiError::Timeout
                } else {
                    PokeApiError::HttpError(transport.to_string())
                }
            }
        }
    }
}
