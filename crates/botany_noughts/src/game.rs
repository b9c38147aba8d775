//! Noughts and crosses as a runner-facing game adapter.

use crate::rules::{check_winner, is_full};
use crate::{Board, Player, Position, Square};
use botany_core::{AdapterError, GameAdapter, Outcome};
use tracing::instrument;

/// Score when X has three in a row.
pub const X_WINS: i64 = 1;
/// Score when O has three in a row.
pub const O_WINS: i64 = -1;
/// Score of a full board without a line.
pub const DRAW: i64 = 0;

/// Noughts and crosses adapter.
///
/// Moves are empty positions in index order, X moves first, and the game
/// ends on three in a row or a full board.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoughtsAndCrosses;

impl NoughtsAndCrosses {
    /// Per-side tokens, X first.
    pub const TOKENS: [Player; 2] = [Player::X, Player::O];
}

impl GameAdapter for NoughtsAndCrosses {
    type Board = Board;
    type Move = Position;
    type Token = Player;

    fn new_board(&self) -> Board {
        Board::new()
    }

    fn available_moves(&self, board: &Board) -> Vec<Position> {
        Position::valid_moves(board)
    }

    #[instrument(skip(self, board), fields(position = %mv, player = %token))]
    fn make_move(
        &self,
        mut board: Board,
        mv: &Position,
        token: Player,
    ) -> Result<Board, AdapterError> {
        if !board.is_empty(*mv) {
            return Err(AdapterError::new(format!(
                "Square {} is already occupied",
                mv.label()
            )));
        }
        board.set(*mv, Square::Occupied(token));
        Ok(board)
    }

    fn outcome(&self, board: &Board) -> Outcome {
        match check_winner(board) {
            Some(Player::X) => Outcome::over(X_WINS),
            Some(Player::O) => Outcome::over(O_WINS),
            None if is_full(board) => Outcome::over(DRAW),
            None => Outcome::in_progress(DRAW),
        }
    }

    fn tokens(&self) -> [Player; 2] {
        Self::TOKENS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botany_core::replay;

    #[test]
    fn test_new_board_offers_every_square() {
        let game = NoughtsAndCrosses;
        assert_eq!(game.available_moves(&game.new_board()), Position::ALL.to_vec());
    }

    #[test]
    fn test_make_move_rejects_occupied_square() {
        let game = NoughtsAndCrosses;
        let board = game
            .make_move(Board::new(), &Position::Center, Player::X)
            .unwrap();
        let err = game
            .make_move(board, &Position::Center, Player::O)
            .unwrap_err();
        assert!(err.message.contains("Center"));
    }

    #[test]
    fn test_outcome_scores() {
        let game = NoughtsAndCrosses;
        let x_line = [0, 3, 1, 4, 2].map(|i| Position::from_index(i).unwrap());
        let board = replay(&game, &x_line).unwrap();
        assert_eq!(game.outcome(&board), Outcome::over(X_WINS));

        let partial = replay(&game, &x_line[..2]).unwrap();
        assert!(!*game.outcome(&partial).is_over());
    }

    #[test]
    fn test_tokens_alternate_from_x() {
        let game = NoughtsAndCrosses;
        assert_eq!(game.token_for_ply(0), Player::X);
        assert_eq!(game.token_for_ply(1), Player::O);
        assert_eq!(game.token_for_ply(4), Player::X);
    }
}
