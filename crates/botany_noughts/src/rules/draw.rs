//! Draw detection.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if every square is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::{Player, Position};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    fn fill(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.iter().zip(marks.chars()) {
            match mark {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&fill("X...O....")));
    }

    #[test]
    fn test_draw_detection() {
        let board = fill("XXOOOXXXO");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        assert!(!is_draw(&fill("XXXOOXOXO")));
    }
}
