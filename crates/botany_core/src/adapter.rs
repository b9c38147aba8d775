//! The contract a game must satisfy to be driven by the runner.

use crate::AdapterError;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One of the two seats at the table.
///
/// Side A moves first and plays with `tokens()[0]`; scores are reported from
/// side A's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Side {
    /// First to move. Positive scores favor this side.
    A,
    /// Second to move. Negative scores favor this side.
    B,
}

impl Side {
    /// Returns the side to move at the given ply (0-indexed).
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Side::A } else { Side::B }
    }
}

/// Whether a position is terminal, and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct Outcome {
    /// True once the game has ended.
    is_over: bool,
    /// Signed score: positive favors side A, negative side B, zero is neutral.
    score: i64,
}

impl Outcome {
    /// A position where play continues.
    pub fn in_progress(score: i64) -> Self {
        Self::new(false, score)
    }

    /// A terminal position with the given score.
    pub fn over(score: i64) -> Self {
        Self::new(true, score)
    }
}

/// A two-player turn-based game, as seen by the runner.
///
/// Adapters are stateless with respect to the runner: every method takes the
/// board explicitly. The runner never inspects a board, it only hands boards
/// back to the adapter and to the strategies.
pub trait GameAdapter {
    /// Board representation.
    type Board: Clone + Debug;
    /// Move identifier. Only compared for equality by the runner.
    type Move: Clone + PartialEq + Debug;
    /// Per-side marker applied to the board when a move is made.
    type Token: Copy + PartialEq + Debug;

    /// Returns an initial empty board.
    fn new_board(&self) -> Self::Board;

    /// Returns the legal moves from `board`, in a stable order. Empty if none.
    fn available_moves(&self, board: &Self::Board) -> Vec<Self::Move>;

    /// Applies `mv` for `token` and returns the successor board.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError` if the adapter cannot apply a move it reported
    /// as available.
    fn make_move(
        &self,
        board: Self::Board,
        mv: &Self::Move,
        token: Self::Token,
    ) -> Result<Self::Board, AdapterError>;

    /// Reports whether `board` is terminal and what it scores.
    fn outcome(&self, board: &Self::Board) -> Outcome;

    /// The two per-side tokens, indexed by ply parity.
    fn tokens(&self) -> [Self::Token; 2];

    /// Score recorded when `offender` ends the game early from `board`, the
    /// last legal position, by playing an illegal move or faulting.
    ///
    /// Defaults to an immediate loss for the offender.
    fn forfeit_score(&self, _board: &Self::Board, offender: Side) -> i64 {
        match offender {
            Side::A => -1,
            Side::B => 1,
        }
    }

    /// Token for the side to move at `ply`.
    fn token_for_ply(&self, ply: usize) -> Self::Token {
        self.tokens()[ply % 2]
    }
}
