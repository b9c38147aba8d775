//! Noughts and crosses for the botany runner.
//!
//! Board, rules, and a [`GameAdapter`](botany_core::GameAdapter)
//! implementation. Scores are `1` for an X win, `-1` for an O win and `0`
//! for a draw.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{DRAW, NoughtsAndCrosses, O_WINS, X_WINS};
pub use position::Position;
pub use types::{Board, Player, Square};
