//! Location and location-area models.

use super::NamedResource;
use serde::{Deserialize, Serialize};

/// One page of the location list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LocationPage {
    /// Total number of locations across all pages
    pub count: usize,

    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,

    /// Locations on this page
    pub results: Vec<NamedResource>,
}

/// An explorable area within a location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,

    /// Pokémon that can be encountered in the area
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A Pokémon that can be met in a location area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
