//! Command-line interface for strictly_rounds.

use clap::{Parser, Subcommand};

/// Strictly Rounds - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_rounds")]
#[command(about = "Two-player tic-tac-toe with running scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Name of the first player (X), overrides the config
        #[arg(long)]
        player_a: Option<String>,

        /// Name of the second player (O), overrides the config
        #[arg(long)]
        player_b: Option<String>,
    },

    /// Play a scripted sequence of cell indices (0-8) and print the result
    Replay {
        /// Cell indices, X moves first
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Name of the first player (X)
        #[arg(long, default_value = "Player 1")]
        player_a: String,

        /// Name of the second player (O)
        #[arg(long, default_value = "Player 2")]
        player_b: String,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}
