//! Async wrapper around the synchronous PokeApiClient.
//!
//! This module provides an async interface to the synchronous PokeApiClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::PokeApiClient;
use crate::error::{PokeApiError, PokeApiResult};
use crate::models::{LocationArea, LocationPage, Pokemon};
use async_trait::async_trait;
use std::sync::Arc;

/// Async PokeAPI operations used by the Pokedex.
///
/// Implemented by [`AsyncPokeApiClientImpl`] for real requests and by test
/// doubles.
#[async_trait]
pub trait AsyncPokeApiClient: Send + Sync {
    async fn get_locations(&self, offset: usize, limit: usize) -> PokeApiResult<LocationPage>;
    async fn get_location_area(&self, name: &str) -> PokeApiResult<LocationArea>;
    async fn get_pokemon(&self, name: &str) -> PokeApiResult<Pokemon>;
}

/// Async wrapper around synchronous PokeApiClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncPokeApiClientImpl {
    client: Arc<PokeApiClient>,
}

impl AsyncPokeApiClientImpl {
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> PokeApiError {
    PokeApiError::Other(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncPokeApiClient for AsyncPokeApiClientImpl {
    async fn get_locations(&self, offset: usize, limit: usize) -> PokeApiResult<LocationPage> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_locations(offset, limit))
            .await
            .map_err(join_error)?
    }

    async fn get_location_area(&self, name: &str) -> PokeApiResult<LocationArea> {
        let client = self.client.clone();
        let name = name.to_string();

        tokio::task::spawn_blocking(move || client.get_location_area(&name))
            .await
            .map_err(join_error)?
    }

    async fn get_pokemon(&self, name: &str) -> PokeApiResult<Pokemon> {
        let client = self.client.clone();
        let name = name.to_string();

        tokio::task::spawn_blocking(move || client.get_pokemon(&name))
            .await
            .map_err(join_error)?
    }
}
