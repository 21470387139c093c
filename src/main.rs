//! Ship, Captain and Crew at the terminal.
//!
//! Plays automatically by default; `--interactive` asks for holds on stdin.
//! Logging goes to stderr and is controlled by `--log` or `RUST_LOG`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ship_captain_crew::core::{DEFAULT_DICE, DEFAULT_MAX_ROLLS};
use ship_captain_crew::driver::DEFAULT_MIN_CARGO;
use ship_captain_crew::{
    Console, DiceGame, GameConfig, GameRng, HoldPolicy, RoundReport, Session, ShipCaptainCrew,
};

#[derive(Debug, Parser)]
#[command(name = "ship-captain-crew", version, about = "Play Ship, Captain and Crew")]
struct Args {
    /// Number of players (at least 2).
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Number of dice.
    #[arg(short, long, default_value_t = DEFAULT_DICE)]
    dice: usize,

    /// Rolls allowed per turn.
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_ROLLS)]
    max_rolls: u32,

    /// Rounds to play.
    #[arg(short, long, default_value_t = 1)]
    rounds: u32,

    /// Seed for reproducible dice. Random if omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Ask for holds on stdin instead of playing automatically.
    #[arg(short, long)]
    interactive: bool,

    /// Cargo the automatic player is happy to bank.
    #[arg(long, default_value_t = DEFAULT_MIN_CARGO)]
    min_cargo: u32,

    /// Log filter, e.g. "info" or "ship_captain_crew=debug".
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::new(args.players)
        .with_dice(args.dice)
        .with_max_rolls(args.max_rolls);
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "dice seeded");

    let game = DiceGame::new(&config, rng).context("invalid game configuration")?;

    if args.interactive {
        let stdin = io::stdin();
        run(Session::new(game, Console::new(stdin.lock(), io::stdout())), args.rounds)
    } else {
        run(Session::new(game, ShipCaptainCrew::new(args.min_cargo)), args.rounds)
    }
}

fn run<P: HoldPolicy>(mut session: Session<GameRng, P>, rounds: u32) -> Result<()> {
    for _ in 0..rounds {
        let report = session.play_round()?;
        print_report(&report)?;
    }

    println!("Final winner: {}", session.game().final_winner_summary());
    Ok(())
}

fn print_report(report: &RoundReport) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "\n=== Round {} ===", report.round)?;
    for turn in &report.turns {
        writeln!(
            out,
            "{} rolled {} time(s) and scored {}",
            turn.player,
            turn.rolls,
            turn.score.cargo()
        )?;
    }
    write!(out, "{}", report.standings)?;
    Ok(())
}
