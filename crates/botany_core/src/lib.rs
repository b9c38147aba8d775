//! Botany core - the game runner.
//!
//! Drives two strategies ("bots") through a two-player turn-based game and
//! classifies how the game ended.
//!
//! # Architecture
//!
//! - **Adapter**: the [`GameAdapter`] trait a concrete game implements
//! - **Strategy**: a [`Strategy`] declares how much context it wants per turn
//! - **Runner**: [`run_game`] owns the turn loop and builds a [`GameResult`]
//!
//! # Example
//!
//! ```no_run
//! use botany_core::{GameAdapter, Strategy, run_game};
//!
//! fn play<G: GameAdapter>(game: &G) -> Result<(), botany_core::AdapterError> {
//!     let first = |board: &G::Board| {
//!         game.available_moves(board)
//!             .into_iter()
//!             .next()
//!             .ok_or_else(|| anyhow::anyhow!("no moves"))
//!     };
//!     let result = run_game(game, Strategy::simple(first), Strategy::simple(first))?;
//!     println!("{:?} scored {}", result.result_type(), result.score());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adapter;
mod error;
mod result;
mod runner;
mod strategy;

pub use adapter::{GameAdapter, Outcome, Side};
pub use error::AdapterError;
pub use result::{GameResult, ResultType};
pub use runner::{replay, run_game};
pub use strategy::Strategy;
