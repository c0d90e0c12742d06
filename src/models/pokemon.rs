//! Pokémon model.

use super::NamedResource;
use serde::{Deserialize, Serialize};

/// A Pokémon as returned by the `pokemon/{name}` endpoint.
///
/// `id` and `name` are required so that an error object served with a
/// success status does not decode as a Pokémon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,

    /// Experience gained for defeating it. Null for some special forms.
    #[serde(default)]
    pub base_experience: Option<u32>,

    /// Height in decimetres
    #[serde(default)]
    pub height: u32,

    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,

    #[serde(default)]
    pub stats: Vec<PokemonStat>,

    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// A base stat value (hp, attack, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// One of the Pokémon's types, ordered by slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u32,

    /// The type reference (API field: type)
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
