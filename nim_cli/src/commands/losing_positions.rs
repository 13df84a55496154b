use crate::io::FileOrStdout;
use anyhow::{Context, Result, bail};
use clap::{self, Parser};
use itertools::Itertools;
use nim::position::Nim;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Report {
    position: String,
    piles: Vec<u32>,
}

/// List all positions with a given number of piles that are lost for the player to move.
#[derive(Parser, Debug)]
pub struct Args {
    /// Number of piles
    #[arg(long, default_value_t = 3)]
    piles: usize,

    /// Largest pile size to consider
    #[arg(long, default_value_t = 7)]
    max_pile: u32,

    /// Skip permutations, list only positions with non-decreasing piles
    #[arg(long, default_value_t = false)]
    sorted: bool,

    /// Output path, `-` for stdout
    #[arg(long, default_value = "-")]
    output: FileOrStdout,
}

fn report(w: &mut impl Write, piles: Vec<u32>) -> Result<bool> {
    let position = Nim::new(piles);
    if !position.nim_sum().is_zero() {
        return Ok(false);
    }

    let report = Report {
        position: position.to_string(),
        piles: position.into_piles(),
    };
    writeln!(w, "{}", serde_json::ser::to_string(&report)?)?;
    Ok(true)
}

/// Returns the number of positions written
pub fn write_losing_positions(
    w: &mut impl Write,
    num_piles: usize,
    max_pile: u32,
    sorted: bool,
) -> Result<usize> {
    let mut found = 0;
    if sorted {
        for piles in (0..=max_pile).combinations_with_replacement(num_piles) {
            found += usize::from(report(w, piles)?);
        }
    } else {
        for piles in (0..num_piles).map(|_| 0..=max_pile).multi_cartesian_product() {
            found += usize::from(report(w, piles)?);
        }
    }
    Ok(found)
}

pub fn run(args: Args) -> Result<()> {
    if args.piles == 0 {
        bail!("Number of piles must be positive. Use --piles n to specify it.");
    }

    let mut w = BufWriter::new(args.output.create()?);
    let found = write_losing_positions(&mut w, args.piles, args.max_pile, args.sorted)?;
    w.flush()
        .context(format!("Could not write to '{}'", args.output))?;

    log::info!("Found {} losing positions", found);
    Ok(())
}
