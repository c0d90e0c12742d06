use async_trait::async_trait;
use pokedex::client::AsyncPokeApiClient;
use pokedex::error::{PokeApiError, PokeApiResult};
use pokedex::models::{
    LocationArea, LocationPage, NamedResource, Pokemon, PokemonEncounter, PokemonStat,
    PokemonType,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock PokeAPI client for testing.
///
/// Serves locations, areas and Pokémon from memory and tracks method calls
/// for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockPokeApiClient {
    locations: Arc<Mutex<Vec<NamedResource>>>,
    areas: Arc<Mutex<HashMap<String, LocationArea>>>,
    pokemon: Arc<Mutex<HashMap<String, Pokemon>>>,
    call_log: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockPokeApiClient {
    /// Create a new empty MockPokeApiClient.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` locations named `location-0`, `location-1`, ...
    pub fn with_locations(self, count: usize) -> Self {
        {
            let mut locations = self.locations.lock().unwrap();
            for i in 0..count {
                locations.push(NamedResource {
                    name: format!("location-{}", i),
                    url: format!("https://pokeapi.co/api/v2/location/{}/", i + 1),
                });
            }
        }
        self
    }

    /// Add an area with the given Pokémon names.
    pub fn with_area(self, name: &str, pokemon: &[&str]) -> Self {
        let area = LocationArea {
            id: 1,
            name: name.to_string(),
            pokemon_encounters: pokemon
                .iter()
                .map(|p| PokemonEncounter {
                    pokemon: NamedResource {
                        name: p.to_string(),
                        url: format!("https://pokeapi.co/api/v2/pokemon/{}/", p),
                    },
                })
                .collect(),
        };
        self.areas.lock().unwrap().insert(name.to_string(), area);
        self
    }

    /// Add a Pokémon with the given base experience.
    pub fn with_pokemon(self, name: &str, base_experience: Option<u32>) -> Self {
        self.pokemon
            .lock()
            .unwrap()
            .insert(name.to_string(), sample_pokemon(name, base_experience));
        self
    }

    /// Calls made so far, e.g. `get_locations(20, 20)`.
    pub fn calls(&self) -> Vec<String> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of calls to `method`.
    pub fn get_call_count(&self, method: &str) -> usize {
        let prefix = format!("{}(", method);
        self.calls().iter().filter(|c| c.starts_with(&prefix)).count()
    }

    fn track_call(&self, call: String) {
        self.call_log.lock().unwrap().push(call);
    }
}

/// Build a Pokémon with one stat and one type.
#[allow(dead_code)]
pub fn sample_pokemon(name: &str, base_experience: Option<u32>) -> Pokemon {
    Pokemon {
        id: 1,
        name: name.to_string(),
        base_experience,
        height: 4,
        weight: 60,
        stats: vec![PokemonStat {
            base_stat: 35,
            effort: 0,
            stat: NamedResource {
                name: "hp".to_string(),
                url: String::new(),
            },
        }],
        types: vec![PokemonType {
            slot: 1,
            kind: NamedResource {
                name: "electric".to_string(),
                url: String::new(),
            },
        }],
    }
}

#[async_trait]
impl AsyncPokeApiClient for MockPokeApiClient {
    async fn get_locations(&self, offset: usize, limit: usize) -> PokeApiResult<LocationPage> {
        self.track_call(format!("get_locations({}, {})", offset, limit));

        let locations = self.locations.lock().unwrap();
        Ok(LocationPage {
            count: locations.len(),
            next: None,
            previous: None,
            results: locations.iter().skip(offset).take(limit).cloned().collect(),
        })
    }

    async fn get_location_area(&self, name: &str) -> PokeApiResult<LocationArea> {
        self.track_call(format!("get_location_area({})", name));

        self.areas
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| PokeApiError::NotFound(format!("location-area {}", name)))
    }

    async fn get_pokemon(&self, name: &str) -> PokeApiResult<Pokemon> {
        self.track_call(format!("get_pokemon({})", name));

        self.pokemon
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| PokeApiError::NotFound(format!("pokemon {}", name)))
    }
}
