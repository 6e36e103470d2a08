//! Tally Games - command-line entry point.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tally_games::{
    AppConfig, Cli, Command, FileStore, KeyValueStore, MemoryStore, Session, StoreArgs, TallyBook,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tally_games=debug,tally_tictactoe=debug";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or_else(Command::default_play) {
        Command::Play { store, ephemeral } => {
            let config = apply_store_args(config, store);
            initialize_file_tracing(config.log_file())?;
            if ephemeral {
                run_play(MemoryStore::new(), &config)
            } else {
                let store = FileStore::open(config.store_path())
                    .context("Failed to open tally store")?;
                run_play(store, &config)
            }
        }
        Command::Stats { store } => {
            initialize_stderr_tracing();
            run_stats(&apply_store_args(config, store))
        }
    }
}

fn apply_store_args(config: AppConfig, args: StoreArgs) -> AppConfig {
    match args.store {
        Some(path) => config.with_store_path(path),
        None => config,
    }
}

/// Runs one interactive session.
#[instrument(skip_all, fields(tally_key = %config.tally_key()))]
fn run_play<S: KeyValueStore>(store: S, config: &AppConfig) -> Result<()> {
    let book = TallyBook::open(store, config.tally_key()).context("Failed to read tally")?;
    let mut session = Session::new(book);
    tally_games::tui::run(&mut session)?;
    info!(tally = %session.tally(), "Session ended");
    Ok(())
}

/// Prints the lifetime tally.
#[instrument(skip_all, fields(store_path = %config.store_path().display()))]
fn run_stats(config: &AppConfig) -> Result<()> {
    let store = FileStore::open(config.store_path()).context("Failed to open tally store")?;
    let book = TallyBook::open(store, config.tally_key()).context("Failed to read tally")?;
    let tally = book.tally();
    println!("X: {}", tally.x_wins());
    println!("O: {}", tally.o_wins());
    Ok(())
}

/// Logs to a file so output does not tear the terminal UI.
fn initialize_file_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn initialize_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
