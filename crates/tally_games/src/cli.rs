//! Command-line interface for tally_games.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Tally Games - two-player terminal tic-tac-toe with lifetime win counts
#[derive(Parser, Debug)]
#[command(name = "tally_games")]
#[command(about = "Hot-seat tic-tac-toe that remembers who wins", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "tally_games.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Store options
        #[command(flatten)]
        store: StoreArgs,

        /// Keep the tally in memory only for this session
        #[arg(long)]
        ephemeral: bool,
    },

    /// Print the lifetime tally
    Stats {
        /// Store options
        #[command(flatten)]
        store: StoreArgs,
    },
}

/// Options selecting where the tally lives.
#[derive(Args, Debug, Default)]
pub struct StoreArgs {
    /// Override the tally store file from the configuration
    #[arg(long)]
    pub store: Option<PathBuf>,
}

impl Command {
    /// Command run when none is given.
    pub fn default_play() -> Self {
        Command::Play {
            store: StoreArgs::default(),
            ephemeral: false,
        }
    }
}
