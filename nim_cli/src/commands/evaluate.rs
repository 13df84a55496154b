use crate::io::{FileOrStdin, FileOrStdout};
use anyhow::{Context, Result};
use clap::{self, Parser, ValueEnum};
use nim::{
    position::{Move, Nim},
    strategy::Outcome,
};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Single `WIN`/`LOSE`/`GAME OVER` line
    Text,

    /// JSON report with position details
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Report {
    position: String,
    nim_sum: String,
    outcome: Outcome,
    decision: String,
    #[serde(rename = "move")]
    to_make: Option<Move>,
}

/// Read a single game and print the best move for the player to move.
///
/// Input is the number of piles followed by pile sizes, missing sizes are zero.
#[derive(Parser, Debug)]
pub struct Args {
    /// Game input path, `-` for stdin
    #[arg(long, default_value = "-")]
    input: FileOrStdin,

    /// Decision output path, `-` for stdout
    #[arg(long, default_value = "-")]
    output: FileOrStdout,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

pub fn write_decision(w: &mut impl Write, position: &Nim, format: Format) -> Result<()> {
    let decision = position.decide();
    log::info!("{} has Nim sum {}", position, position.nim_sum());

    match format {
        Format::Text => writeln!(w, "{}", decision)?,
        Format::Json => {
            let report = Report {
                position: position.to_string(),
                nim_sum: position.nim_sum().to_string(),
                outcome: decision.outcome(),
                decision: decision.to_string(),
                to_make: decision.move_to_make(),
            };
            writeln!(w, "{}", serde_json::ser::to_string(&report)?)?;
        }
    }

    Ok(())
}

pub fn run(args: Args) -> Result<()> {
    let input = args.input.read_to_string()?;
    let position = Nim::read_game(&input).context("Could not read the game")?;

    let mut w = BufWriter::new(args.output.create()?);
    write_decision(&mut w, &position, args.format)?;
    w.flush()
        .context(format!("Could not write to '{}'", args.output))?;

    Ok(())
}
