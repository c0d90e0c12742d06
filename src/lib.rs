//! Pokedex - an interactive PokeAPI client built around a time-expiring response cache.
//!
//! # Architecture
//!
//! - **cache**: Generic concurrent cache whose entries a background sweeper expires
//! - **client**: Blocking PokeAPI client memoizing responses, plus an async wrapper
//! - **models**: PokeAPI resources (locations, areas, Pokémon)
//! - **pokedex**: Session state and command execution
//! - **repl**: The interactive prompt loop
//! - **config**, **error**, **metrics**: Environment configuration, error types, counters

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pokedex;
pub mod repl;

pub use cache::TimedCache;
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{CommandError, ConfigError, PokeApiError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{LocationArea, LocationPage, NamedResource, Pokemon};
pub use pokedex::{Command, Flow, Pokedex};
