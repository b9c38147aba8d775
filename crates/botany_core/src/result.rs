//! How a game ended.

use crate::Side;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Terminal classification of a game. Exactly one holds per run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultType {
    /// The adapter reported the game over.
    Complete,
    /// A strategy returned a move that was not available.
    InvalidMove,
    /// A strategy returned an error or panicked.
    Exception,
}

/// Immutable record of a finished game.
///
/// Built once, when the runner's loop terminates. The constructors keep
/// `traceback` present exactly when the result is an exception.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameResult<M> {
    /// How the game ended.
    result_type: ResultType,
    /// Signed score from side A's perspective.
    score: i64,
    /// Every move attempted, in play order. An invalid final move is
    /// included; a move that was never produced because the strategy
    /// faulted is not.
    move_list: Vec<M>,
    /// Captured error text, only for `ResultType::Exception`.
    traceback: Option<String>,
}

impl<M> GameResult<M> {
    /// The adapter declared the game over.
    pub fn complete(score: i64, move_list: Vec<M>) -> Self {
        Self {
            result_type: ResultType::Complete,
            score,
            move_list,
            traceback: None,
        }
    }

    /// A strategy played a move outside `available_moves`.
    pub fn invalid_move(score: i64, move_list: Vec<M>) -> Self {
        Self {
            result_type: ResultType::InvalidMove,
            score,
            move_list,
            traceback: None,
        }
    }

    /// A strategy faulted; `traceback` is the captured error text.
    pub fn exception(score: i64, move_list: Vec<M>, traceback: impl Into<String>) -> Self {
        Self {
            result_type: ResultType::Exception,
            score,
            move_list,
            traceback: Some(traceback.into()),
        }
    }

    /// True if the game ran to its natural end.
    pub fn is_complete(&self) -> bool {
        self.result_type == ResultType::Complete
    }

    /// Side favored by the score, or `None` for a neutral score.
    pub fn winner(&self) -> Option<Side> {
        match self.score.signum() {
            1 => Some(Side::A),
            -1 => Some(Side::B),
            _ => None,
        }
    }

    /// Number of entries in the move list.
    pub fn plies(&self) -> usize {
        self.move_list.len()
    }
}

impl<M: std::fmt::Debug> std::fmt::Display for GameResult<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "result: {}", self.result_type)?;
        writeln!(f, "score:  {}", self.score)?;
        write!(f, "moves:  {:?}", self.move_list)?;
        if let Some(traceback) = &self.traceback {
            write!(f, "\ntraceback:\n{}", traceback)?;
        }
        Ok(())
    }
}
