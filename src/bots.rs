//! Built-in bots for noughts and crosses.
//!
//! One of each strategy shape: board-only bots, a bot that threads a turn
//! counter between calls, and a bot that audits the context it is given.

use botany_core::{GameAdapter, Strategy, replay};
use botany_noughts::{Board, NoughtsAndCrosses, Player, Position, Square, rules::win::LINES};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Strategy type shared by the built-in bots. The state is a turn counter.
pub type BotStrategy = Strategy<'static, NoughtsAndCrosses, usize>;

/// A named built-in bot.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BotKind {
    /// Plays the first available square.
    #[default]
    First,
    /// Plays the last available square.
    Last,
    /// Wins if it can, blocks if it must, otherwise takes the centre.
    Tactical,
    /// Rotates through the available squares, counting its turns as state.
    Cycler,
    /// Checks its token and the move history against the board, then plays first.
    Auditor,
}

impl BotKind {
    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            BotKind::First => "first available square",
            BotKind::Last => "last available square",
            BotKind::Tactical => "win, else block, else centre, else first",
            BotKind::Cycler => "rotates through available squares (stateful)",
            BotKind::Auditor => "verifies token and history, then first (full context)",
        }
    }

    /// Builds the strategy for this bot.
    #[instrument]
    pub fn strategy(self) -> BotStrategy {
        match self {
            BotKind::First => Strategy::Simple(Box::new(|board: &Board| {
                first_available(board)
            })),
            BotKind::Last => Strategy::Simple(Box::new(|board: &Board| {
                Position::valid_moves(board)
                    .pop()
                    .ok_or_else(|| anyhow::anyhow!("No valid moves available"))
            })),
            BotKind::Tactical => Strategy::Simple(Box::new(tactical_move)),
            BotKind::Cycler => Strategy::stateful(cycle_move),
            BotKind::Auditor => Strategy::full_context(audited_move),
        }
    }
}

fn first_available(board: &Board) -> anyhow::Result<Position> {
    Position::valid_moves(board)
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("No valid moves available"))
}

/// Whose turn it is, judged from the marks on the board.
fn to_move(board: &Board) -> Player {
    let crosses = board
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(Player::X))
        .count();
    let noughts = board
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(Player::O))
        .count();
    if crosses > noughts { Player::O } else { Player::X }
}

/// An empty square that completes a line for `player`.
fn completing_square(board: &Board, player: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(player))
            .count();
        let empty: Vec<Position> = line
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        match (owned, empty.as_slice()) {
            (2, [square]) => Some(*square),
            _ => None,
        }
    })
}

fn tactical_move(board: &Board) -> anyhow::Result<Position> {
    let me = to_move(board);
    let choice = completing_square(board, me)
        .or_else(|| completing_square(board, me.opponent()))
        .or_else(|| board.is_empty(Position::Center).then_some(Position::Center));
    match choice {
        Some(pos) => {
            debug!(player = %me, position = %pos, "Tactical choice");
            Ok(pos)
        }
        None => first_available(board),
    }
}

fn cycle_move(board: &Board, turns: Option<&usize>) -> anyhow::Result<(Position, usize)> {
    let turn = turns.map_or(0, |t| t + 1);
    let moves = Position::valid_moves(board);
    anyhow::ensure!(!moves.is_empty(), "No valid moves available");
    Ok((moves[turn % moves.len()], turn))
}

fn audited_move(
    board: &Board,
    token: Player,
    turns: Option<&usize>,
    move_list: &[Position],
) -> anyhow::Result<(Position, usize)> {
    let game = NoughtsAndCrosses;
    let expected = game.token_for_ply(move_list.len());
    anyhow::ensure!(
        token == expected,
        "Given token {} but ply {} belongs to {}",
        token,
        move_list.len(),
        expected
    );

    let rebuilt = replay(&game, move_list)?;
    anyhow::ensure!(&rebuilt == board, "Move history does not reproduce the board");

    let turn = turns.map_or(0, |t| t + 1);
    anyhow::ensure!(
        turn == move_list.len() / 2,
        "Expected turn {} but state says {}",
        move_list.len() / 2,
        turn
    );

    Ok((first_available(board)?, turn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn board_from(marks: &str) -> Board {
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
    fn test_names_parse() {
        for kind in BotKind::iter() {
            assert_eq!(BotKind::from_str(&kind.to_string()).unwrap(), kind);
        }
        assert!(BotKind::from_str("random").is_err());
    }

    #[test]
    fn test_tactical_prefers_win_over_block() {
        // X to move with X X . / O O . / . . .
        let board = board_from("XX.OO....");
        assert_eq!(tactical_move(&board).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_tactical_blocks() {
        // O to move with X X . / . O . / . . .
        let board = board_from("XX..O....");
        assert_eq!(tactical_move(&board).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_tactical_takes_centre() {
        assert_eq!(tactical_move(&Board::new()).unwrap(), Position::Center);
    }

    #[test]
    fn test_cycler_rotates() {
        let board = Board::new();
        assert_eq!(cycle_move(&board, None).unwrap(), (Position::TopLeft, 0));
        assert_eq!(cycle_move(&board, Some(&0)).unwrap(), (Position::TopCenter, 1));
        assert_eq!(cycle_move(&board, Some(&8)).unwrap(), (Position::TopLeft, 9));
    }

    #[test]
    fn test_auditor_rejects_wrong_token() {
        let err = audited_move(&Board::new(), Player::O, None, &[]).unwrap_err();
        assert!(err.to_string().contains("ply 0"));
    }

    #[test]
    fn test_auditor_rejects_inconsistent_history() {
        let board = board_from("X........");
        let err = audited_move(&board, Player::O, None, &[Position::Center]).unwrap_err();
        assert!(err.to_string().contains("does not reproduce"));
    }
}
