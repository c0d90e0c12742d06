pub mod mock_pokeapi_client;

pub use mock_pokeapi_client::MockPokeApiClient;
