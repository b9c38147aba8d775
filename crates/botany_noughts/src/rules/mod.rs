//! Rules for noughts and crosses.
//!
//! Pure functions over a board, kept apart from board storage so the adapter
//! can compose them into an outcome.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
