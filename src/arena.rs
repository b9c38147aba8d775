//! Plays a configured match and renders the result.

use crate::MatchConfig;
use crate::match_config::OutputFormat;
use botany_core::{AdapterError, GameResult, ResultType, replay, run_game};
use botany_noughts::{Board, NoughtsAndCrosses, Position};
use tracing::{info, instrument};

/// Plays one game of noughts and crosses between the configured bots.
///
/// # Errors
///
/// Returns `AdapterError` only if the game adapter breaks its contract.
#[instrument(skip(config), fields(bot_a = %config.bot_a(), bot_b = %config.bot_b()))]
pub fn play(config: &MatchConfig) -> Result<GameResult<Position>, AdapterError> {
    let result = run_game(
        &NoughtsAndCrosses,
        config.bot_a().strategy(),
        config.bot_b().strategy(),
    )?;
    info!(result = %result.result_type(), score = result.score(), "Match finished");
    Ok(result)
}

/// The last legal board of a finished game.
///
/// An invalid final move is skipped; every other recorded move was applied.
pub fn final_board(result: &GameResult<Position>) -> Result<Board, AdapterError> {
    let moves = result.move_list();
    let legal = match result.result_type() {
        ResultType::InvalidMove => &moves[..moves.len().saturating_sub(1)],
        ResultType::Complete | ResultType::Exception => &moves[..],
    };
    replay(&NoughtsAndCrosses, legal)
}

/// Renders a result in the requested format.
pub fn render(result: &GameResult<Position>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => {
            let board = final_board(result)?;
            Ok(format!("{}\n\n{}", board.display(), result))
        }
    }
}
