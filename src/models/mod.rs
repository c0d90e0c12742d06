//! Data models for PokeAPI resources.
//!
//! These mirror the subset of the PokeAPI JSON the Pokedex reads. Unknown
//! fields are ignored. Identifying fields are required; optional ones fall
//! back to defaults.

pub mod location;
pub mod pokemon;
pub mod resource;

pub use location::{LocationArea, LocationPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
pub use resource::NamedResource;
