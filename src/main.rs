//! Noughts and crosses - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use noughts_crosses::{ComputerStrategy, Console, GameSession, SetupAnswers};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    run(cli)
}

/// Sets up and plays one game on stdin/stdout.
#[instrument(skip(cli))]
fn run(cli: Cli) -> Result<()> {
    let strategy = match cli.seed {
        Some(seed) => ComputerStrategy::seeded(seed),
        None => ComputerStrategy::from_entropy(),
    };
    let answers = SetupAnswers::new(cli.computer, cli.both_markers, cli.move_markers, cli.first);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let mut session = GameSession::setup(&mut console, answers, strategy)
        .context("Failed to set up the game")?;
    let summary = session
        .run(&mut console)
        .context("Game ended unexpectedly")?;
    info!(
        outcome = %summary.outcome(),
        winner = ?summary.outcome().winner(),
        computer = summary.config().computer_opponent(),
        turns = summary.turns(),
        "Game finished"
    );

    if cli.summary_json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?;
        println!("{}", json);
    }

    Ok(())
}
