//! Tests for the interactive prompt loop driven by scripted input.

mod mocks;

use mocks::MockPokeApiClient;
use pokedex::client::AsyncPokeApiClient;
use pokedex::repl::{run_repl, PROMPT};
use pokedex::{Config, Pokedex};
use std::sync::Arc;

async fn run_script(client: &MockPokeApiClient, script: &str) -> String {
    let config = Config {
        catch_delay_ms: 0,
        ..Config::default()
    };
    let client = Arc::new(client.clone()) as Arc<dyn AsyncPokeApiClient>;
    let mut pokedex = Pokedex::new(client, &config);

    let mut out = Vec::new();
    run_repl(&mut pokedex, script.as_bytes(), &mut out)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_exit_stops_reading() {
    let client = MockPokeApiClient::new().with_locations(3);

    let out = run_script(&client, "exit\nmap\n").await;

    assert_eq!(out, format!("{}Bye.\n", PROMPT));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_end_of_input_ends_loop() {
    let client = MockPokeApiClient::new();

    let out = run_script(&client, "").await;

    assert_eq!(out, format!("{}\n", PROMPT));
}

#[tokio::test]
async fn test_errors_are_printed_and_loop_continues() {
    let client = MockPokeApiClient::new().with_pokemon("pikachu", None);

    let out = run_script(&client, "dance\ninspect pikachu\ncatch pikachu\nexit\n").await;

    assert!(out.contains("unknown command `dance`, type `help` to see available commands\n"));
    assert!(out.contains("pikachu not caught yet, cannot inspect it\n"));
    assert!(out.contains("pikachu caught!\n"));
    assert!(out.ends_with("Bye.\n"));
    assert_eq!(out.matches(PROMPT).count(), 4);
}

#[tokio::test]
async fn test_blank_lines_only_reprompt() {
    let client = MockPokeApiClient::new();

    let out = run_script(&client, "\n   \nexit\n").await;

    assert_eq!(out, format!("{p}{p}{p}Bye.\n", p = PROMPT));
}

#[tokio::test]
async fn test_full_session() {
    let client = MockPokeApiClient::new()
        .with_locations(25)
        .with_area("eterna-forest-area", &["caterpie"])
        .with_pokemon("caterpie", None);

    let script = "map\nmap\nmapb\nexplore eterna-forest-area\ncatch caterpie\ninspect caterpie\npokedex\nexit\n";
    let out = run_script(&client, script).await;

    assert!(out.contains("location-0: "));
    assert!(out.contains("location-24: "));
    assert!(out.contains("caterpie: https://pokeapi.co/api/v2/pokemon/caterpie/\n"));
    assert!(out.contains("Name: caterpie\n"));
    assert!(out.contains("In your Pokedex:\n- caterpie\n"));
    assert_eq!(
        client.calls(),
        vec![
            "get_locations(0, 20)",
            "get_locations(20, 20)",
            "get_locations(0, 20)",
            "get_location_area(eterna-forest-area)",
            "get_pokemon(caterpie)",
        ]
    );
}
