//! Command-line interface for botany.

use botany::{BotKind, OutputFormat};
use clap::{Parser, Subcommand};

/// Botany - run bots against each other
#[derive(Parser, Debug)]
#[command(name = "botany")]
#[command(about = "Runs two bots through a game of noughts and crosses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game and print the result
    Play {
        /// Path to a match config file (TOML)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Bot playing X (moves first)
        #[arg(long, value_enum)]
        bot_a: Option<BotKind>,

        /// Bot playing O
        #[arg(long, value_enum)]
        bot_b: Option<BotKind>,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// List the built-in bots
    Bots,
}
