//! Interactive prompt loop.
//!
//! Reads commands line by line, runs them against a [`Pokedex`] and prints
//! their output. Command errors are printed and the loop carries on.

use crate::pokedex::{Flow, Pokedex};
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Prompt shown before every command.
pub const PROMPT: &str = "pokedex > ";

/// Run the prompt loop until `exit` or end of input.
///
/// # Arguments
/// * `pokedex` - The session the commands act on
/// * `input` - Source of command lines (stdin in the binary)
/// * `out` - Where prompts, results and command errors are written
///
/// # Returns
/// An error only if reading input or writing the prompt fails
pub async fn run_repl<R, W>(pokedex: &mut Pokedex, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match pokedex.run_line(&line, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => {
                tracing::debug!("Command failed: {:?}", e);
                writeln!(out, "{}", e)?;
            }
        }
    }

    Ok(())
}
