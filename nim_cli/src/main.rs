use crate::commands::*;
use anyhow::Result;
use clap::{self, Parser, Subcommand};
use env_logger::Env;

mod commands;
mod io;

#[cfg(not(windows))]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

#[derive(Subcommand, Debug)]
enum Command {
    Evaluate(evaluate::Args),
    Play(play::Args),
    LosingPositions(losing_positions::Args),
}

/// Optimal play for the game of Nim
#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match args.command {
        Command::Evaluate(args) => evaluate::run(args),
        Command::Play(args) => play::run(args),
        Command::LosingPositions(args) => losing_positions::run(args),
    }
}
