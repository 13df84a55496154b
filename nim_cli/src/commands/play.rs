use crate::io::{FileOrStdin, FileOrStdout};
use anyhow::{Context, Result};
use clap::{self, Parser};
use nim::position::Nim;
use std::io::{BufWriter, Write};

/// Play the game out from a given position with both players following the optimal strategy.
#[derive(Parser, Debug)]
pub struct Args {
    /// Game input path, `-` for stdin
    #[arg(long, default_value = "-")]
    input: FileOrStdin,

    /// Transcript output path, `-` for stdout
    #[arg(long, default_value = "-")]
    output: FileOrStdout,

    /// Stop after that many turns
    #[arg(long, default_value = None)]
    max_turns: Option<usize>,
}

/// Write one line per turn, ending with the final `GAME OVER` line. Returns the number of moves made.
pub fn play_out(w: &mut impl Write, mut position: Nim, max_turns: Option<usize>) -> Result<usize> {
    let mut turn = 0;
    loop {
        if max_turns.is_some_and(|max| turn >= max) {
            log::warn!("Stopped after {} turns at {}", turn, position);
            return Ok(turn);
        }

        let decision = position.decide();
        writeln!(w, "{}. {} {}", turn + 1, position, decision)?;

        let Some(m) = decision.move_to_make() else {
            return Ok(turn);
        };
        position = position.apply(m)?;
        turn += 1;
    }
}

pub fn run(args: Args) -> Result<()> {
    let input = args.input.read_to_string()?;
    let position = Nim::read_game(&input).context("Could not read the game")?;

    let mut w = BufWriter::new(args.output.create()?);
    let moves = play_out(&mut w, position, args.max_turns)?;
    w.flush()
        .context(format!("Could not write to '{}'", args.output))?;

    log::info!("Game finished after {} moves", moves);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(piles: Vec<u32>, max_turns: Option<usize>) -> (String, usize) {
        let mut out = Vec::new();
        let moves = play_out(&mut out, Nim::new(piles), max_turns).unwrap();
        (String::from_utf8(out).unwrap(), moves)
    }

    #[test]
    fn plays_until_game_over() {
        let (out, moves) = transcript(vec![1, 2], None);
        assert_eq!(moves, 3);
        assert_eq!(
            out,
            "1. Nim[1, 2] WIN: take 1 from pile 1\n\
             2. Nim[1, 1] LOSE: take 1 from pile 0\n\
             3. Nim[0, 1] WIN: take 1 from pile 1\n\
             4. Nim[0, 0] GAME OVER\n"
        );
    }

    #[test]
    fn empty_game() {
        let (out, moves) = transcript(vec![], None);
        assert_eq!(moves, 0);
        assert_eq!(out, "1. Nim[] GAME OVER\n");
    }

    #[test]
    fn turn_limit() {
        let (out, moves) = transcript(vec![10, 10], Some(2));
        assert_eq!(moves, 2);
        assert_eq!(out.lines().count(), 2);
    }
}
