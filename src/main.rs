//! Botany - command-line runner.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use botany::{BotKind, MatchConfig, play, render};
use clap::Parser;
use cli::{Cli, Command};
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            bot_a,
            bot_b,
            output,
        } => run_play(config, bot_a, bot_b, output),
        Command::Bots => {
            list_bots();
            Ok(())
        }
    }
}

/// Play one game and print the result
#[instrument]
fn run_play(
    config: Option<std::path::PathBuf>,
    bot_a: Option<BotKind>,
    bot_b: Option<BotKind>,
    output: Option<botany::OutputFormat>,
) -> Result<()> {
    let config = match config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    }
    .with_overrides(bot_a, bot_b, output);

    info!(?config, "Starting match");
    let result = play(&config)?;
    println!("{}", render(&result, *config.output())?);
    Ok(())
}

/// List the built-in bots
fn list_bots() {
    for bot in BotKind::iter() {
        println!("{:<10} {}", bot.to_string(), bot.description());
    }
}
