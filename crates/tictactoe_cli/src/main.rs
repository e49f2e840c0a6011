//! Tic-tac-toe - terminal host
//!
//! Play interactively, or replay a move list.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::{CliConfig, Cli, Command, Session, replay, write_state};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = CliConfig::from_file(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_overrides(cli.first, cli.seed);

    init_tracing(config.log_filter());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Initialize tracing on stderr; `RUST_LOG` overrides the config filter.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive game on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: &CliConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdout = std::io::stdout();
    let mut session = Session::new(config.coin(), stdout.lock());
    session.run(std::io::stdin().lock())?;
    info!(turn_count = session.state().turn_count(), "Session ended");
    Ok(())
}

/// Replay a move list and print the final state
#[instrument(skip(config))]
fn run_replay(config: &CliConfig, moves: &[String], json: bool) -> Result<()> {
    let state = replay(config.coin(), moves)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&state).context("Failed to serialize game state")?;
        println!("{}", rendered);
    } else {
        let stdout = std::io::stdout();
        write_state(&mut stdout.lock(), &state)?;
    }

    Ok(())
}
