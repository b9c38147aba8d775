//! Botany - bot-versus-bot game running.
//!
//! Runs two bots through a turn-based game and classifies how it ended:
//! completed, ended by an invalid move, or ended by a bot fault.
//!
//! # Architecture
//!
//! - **Runner** (`botany_core`): the turn loop and the result record
//! - **Games** (`botany_noughts`): noughts and crosses as a game adapter
//! - **Bots**: built-in strategies selectable by name
//! - **Arena**: plays a configured match and renders the result
//!
//! # Example
//!
//! ```no_run
//! use botany::{BotKind, MatchConfig, play};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = MatchConfig::new(BotKind::Tactical, BotKind::First);
//! let result = play(&config)?;
//! println!("{}", result);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod bots;
mod match_config;

// Crate-level exports - Runner
pub use botany_core::{
    AdapterError, GameAdapter, GameResult, Outcome, ResultType, Side, Strategy, replay, run_game,
};

// Crate-level exports - Noughts and crosses
pub use botany_noughts::{Board, NoughtsAndCrosses, Player, Position, Square};

// Crate-level exports - Bots
pub use bots::{BotKind, BotStrategy};

// Crate-level exports - Configuration
pub use match_config::{ConfigError, MatchConfig, OutputFormat};

// Crate-level exports - Arena
pub use arena::{final_board, play, render};
