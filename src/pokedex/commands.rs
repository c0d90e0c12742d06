//! Command parsing for the Pokedex prompt.

use crate::error::{CommandError, CommandResult};

/// A parsed Pokedex command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    /// Next page of locations
    Map,
    /// Previous page of locations
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    /// List caught Pokémon
    List,
}

/// Help metadata for one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// Every command, in the order `help` lists them.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        usage: "help",
        description: "See available commands.",
        example: "help",
    },
    CommandInfo {
        name: "exit",
        usage: "exit",
        description: "Exit the program gracefully.",
        example: "exit",
    },
    CommandInfo {
        name: "map",
        usage: "map",
        description: "See the next page of locations.",
        example: "map",
    },
    CommandInfo {
        name: "mapb",
        usage: "mapb",
        description: "See the previous page of locations.",
        example: "mapb",
    },
    CommandInfo {
        name: "explore",
        usage: "explore <area_name>",
        description: "See the Pokemon found in an area.",
        example: "explore sunyshore-city-area",
    },
    CommandInfo {
        name: "catch",
        usage: "catch <pokemon_name>",
        description: "Try to catch a Pokemon.",
        example: "catch pikachu",
    },
    CommandInfo {
        name: "inspect",
        usage: "inspect <pokemon_name>",
        description: "Inspect a Pokemon you've caught.",
        example: "inspect pikachu",
    },
    CommandInfo {
        name: "pokedex",
        usage: "pokedex",
        description: "List all Pokemon in your Pokedex.",
        example: "pokedex",
    },
];

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line. Arguments beyond the first are ignored.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        let command = match name {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(required(name, arg)?),
            "catch" => Command::Catch(required(name, arg)?),
            "inspect" => Command::Inspect(required(name, arg)?),
            "pokedex" => Command::List,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required(name: &str, arg: Option<&str>) -> CommandResult<String> {
    if let Some(arg) = arg {
        return Ok(arg.to_string());
    }

    let (usage, example) = info(name).map_or(("", ""), |i| (i.usage, i.example));
    Err(CommandError::MissingArgument { usage, example })
}

fn info(name: &str) -> Option<&'static CommandInfo> {
    COMMANDS.iter().find(|c| c.name == name)
}
