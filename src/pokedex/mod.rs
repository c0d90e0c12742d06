//! Pokedex session: browse locations, explore areas, catch and inspect Pokémon.
//!
//! All PokeAPI access goes through an [`AsyncPokeApiClient`], whose real
//! implementation answers repeated requests from its response caches.

pub mod catch;
pub mod commands;

pub use catch::catch_succeeds;
pub use commands::{Command, CommandInfo, COMMANDS};

use crate::client::AsyncPokeApiClient;
use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use crate::models::Pokemon;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// What the prompt loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// State of one Pokedex session.
pub struct Pokedex {
    client: Arc<dyn AsyncPokeApiClient>,
    page_size: usize,
    /// Offset of the location page last shown, `None` before the first `map`
    offset: Option<usize>,
    caught: BTreeMap<String, Pokemon>,
    catch_delay: Duration,
    rng: StdRng,
}

impl Pokedex {
    /// Create a session using the paging and catch settings from `config`.
    pub fn new(client: Arc<dyn AsyncPokeApiClient>, config: &Config) -> Self {
        Self {
            client,
            page_size: config.location_page_size.max(1),
            offset: None,
            caught: BTreeMap::new(),
            catch_delay: config.catch_delay(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the random source used for catch rolls.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Replace the pause before a catch resolves.
    pub fn with_catch_delay(mut self, delay: Duration) -> Self {
        self.catch_delay = delay;
        self
    }

    /// Caught Pokémon, by name.
    pub fn caught(&self) -> &BTreeMap<String, Pokemon> {
        &self.caught
    }

    /// Offset of the location page last shown.
    pub fn location_offset(&self) -> Option<usize> {
        self.offset
    }

    /// Parse and execute one input line. Blank lines do nothing.
    pub async fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> CommandResult<Flow> {
        match Command::parse(line)? {
            Some(command) => self.execute(command, out).await,
            None => Ok(Flow::Continue),
        }
    }

    /// Execute a parsed command, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> CommandResult<Flow> {
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Bye.")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map_next(out).await?,
            Command::MapBack => self.map_previous(out).await?,
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::List => self.list(out)?,
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> CommandResult<()> {
        writeln!(out)?;
        writeln!(out, "Welcome to pokedex. Available commands:")?;
        writeln!(out)?;
        for info in COMMANDS {
            writeln!(out, "{}: {}", info.usage, info.description)?;
        }
        Ok(())
    }

    async fn map_next<W: Write>(&mut self, out: &mut W) -> CommandResult<()> {
        let offset = self.offset.map_or(0, |o| o + self.page_size);
        self.show_locations(offset, out).await
    }

    async fn map_previous<W: Write>(&mut self, out: &mut W) -> CommandResult<()> {
        match self.offset {
            Some(current) if current > 0 => {
                let offset = current.saturating_sub(self.page_size);
                self.show_locations(offset, out).await
            }
            _ => {
                writeln!(out, "you're on the first page")?;
                Ok(())
            }
        }
    }

    /// Show the location page at `offset` and remember it as current.
    ///
    /// An empty page leaves the cursor where it was.
    async fn show_locations<W: Write>(&mut self, offset: usize, out: &mut W) -> CommandResult<()> {
        let page = self
            .client
            .get_locations(offset, self.page_size)
            .await
            .map_err(|e| CommandError::fetch("list locations", e))?;

        if page.results.is_empty() {
            writeln!(out, "no more locations")?;
            return Ok(());
        }

        self.offset = Some(offset);
        for location in &page.results {
            writeln!(out, "{}", location.listing())?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&self, area: &str, out: &mut W) -> CommandResult<()> {
        let location_area = self
            .client
            .get_location_area(area)
            .await
            .map_err(|e| CommandError::fetch(format!("explore area {}", area), e))?;

        writeln!(out, "Exploring {}...", location_area.name)?;
        if location_area.pokemon_encounters.is_empty() {
            writeln!(out, "No Pokemon found here.")?;
        }
        for encounter in &location_area.pokemon_encounters {
            writeln!(out, "{}", encounter.pokemon.listing())?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> CommandResult<()> {
        let pokemon = self
            .client
            .get_pokemon(name)
            .await
            .map_err(|e| CommandError::fetch(format!("find pokemon {}", name), e))?;

        writeln!(out, "catching {}...", pokemon.name)?;
        out.flush()?;
        if !self.catch_delay.is_zero() {
            tokio::time::sleep(self.catch_delay).await;
        }

        let roll: f64 = self.rng.gen();
        if catch_succeeds(roll, pokemon.base_experience) {
            tracing::info!(pokemon = %pokemon.name, roll, "Pokemon caught");
            writeln!(out, "{} caught!", pokemon.name)?;
            self.caught.insert(pokemon.name.clone(), pokemon);
            writeln!(out, "you now have {} pokemons!", self.caught.len())?;
        } else {
            tracing::info!(pokemon = %pokemon.name, roll, "Pokemon escaped");
            writeln!(out, "{} escaped! try next time!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> CommandResult<()> {
        let pokemon = self
            .caught
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| CommandError::NotCaught(name.to_string()))?;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "- {}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for pokemon_type in &pokemon.types {
            writeln!(out, "- {}", pokemon_type.kind.name)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn list<W: Write>(&self, out: &mut W) -> CommandResult<()> {
        if self.caught.is_empty() {
            writeln!(
                out,
                "Your Pokedex is empty. Catch a Pokemon by `catch <pokemon_name>`"
            )?;
            return Ok(());
        }

        writeln!(out, "In your Pokedex:")?;
        for name in self.caught.keys() {
            writeln!(out, "- {}", name)?;
        }
        Ok(())
    }
}
