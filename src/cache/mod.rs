//! Caching utilities for the Pokedex.
//!
//! This module provides a generic time-expiring cache whose entries are
//! removed by a background sweeper.

pub mod timed_cache;

pub use timed_cache::TimedCache;
