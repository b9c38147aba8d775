//! The turn loop.
//!
//! The runner alternates two strategies, validates every move against the
//! adapter's legal moves, and stops in exactly one of three ways: the adapter
//! reports the game over, a strategy plays an illegal move, or a strategy
//! faults. Only an adapter contract violation escapes as an error.

use crate::{AdapterError, GameAdapter, GameResult, Side, Strategy};
use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use tracing::{debug, info, instrument, warn};

thread_local! {
    /// Set while a strategy runs on this thread.
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    /// Panic report left by the hook for the strategy that just unwound.
    static CAPTURED: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Plays one game between `strategy_a` (moves first) and `strategy_b`.
///
/// Always starts from `game.new_board()`. Each side's state slot starts at
/// `None` and is only ever seen by that side.
///
/// # Errors
///
/// Returns `AdapterError` if the adapter violates its contract: `make_move`
/// fails, or a position that is not over has no available moves. Illegal
/// moves and strategy faults are reported through the returned
/// [`GameResult`], never as an error.
#[instrument(
    skip_all,
    fields(strategy_a = strategy_a.kind(), strategy_b = strategy_b.kind())
)]
pub fn run_game<G, SA, SB>(
    game: &G,
    mut strategy_a: Strategy<'_, G, SA>,
    mut strategy_b: Strategy<'_, G, SB>,
) -> Result<GameResult<G::Move>, AdapterError>
where
    G: GameAdapter,
{
    let mut board = game.new_board();
    let mut move_list: Vec<G::Move> = Vec::new();
    let mut state_a: Option<SA> = None;
    let mut state_b: Option<SB> = None;

    info!("Starting game");

    loop {
        let ply = move_list.len();
        let side = Side::for_ply(ply);
        let token = game.token_for_ply(ply);

        let available = game.available_moves(&board);
        if available.is_empty() {
            return Err(AdapterError::new(format!(
                "No available moves at ply {} but the game is not over",
                ply
            )));
        }

        let decision = match side {
            Side::A => invoke(&mut strategy_a, &board, token, &mut state_a, &move_list),
            Side::B => invoke(&mut strategy_b, &board, token, &mut state_b, &move_list),
        };

        let mv = match decision {
            Ok(mv) => mv,
            Err(traceback) => {
                let score = game.forfeit_score(&board, side);
                warn!(ply, %side, score, "Strategy faulted");
                return Ok(GameResult::exception(score, move_list, traceback));
            }
        };

        if !available.contains(&mv) {
            let score = game.forfeit_score(&board, side);
            warn!(ply, %side, ?mv, score, "Strategy played an unavailable move");
            move_list.push(mv);
            return Ok(GameResult::invalid_move(score, move_list));
        }

        board = game.make_move(board, &mv, token)?;
        debug!(ply, %side, ?token, ?mv, "Move applied");
        move_list.push(mv);

        let outcome = game.outcome(&board);
        if *outcome.is_over() {
            info!(plies = move_list.len(), score = *outcome.score(), "Game complete");
            return Ok(GameResult::complete(*outcome.score(), move_list));
        }
    }
}

/// Rebuilds the board reached by playing `move_list` from a fresh board,
/// alternating tokens from side A.
///
/// # Errors
///
/// Returns `AdapterError` if any move cannot be applied.
#[instrument(skip_all, fields(plies = move_list.len()))]
pub fn replay<G: GameAdapter>(game: &G, move_list: &[G::Move]) -> Result<G::Board, AdapterError> {
    move_list
        .iter()
        .enumerate()
        .try_fold(game.new_board(), |board, (ply, mv)| {
            game.make_move(board, mv, game.token_for_ply(ply))
        })
}

/// Calls one strategy inside an error boundary.
///
/// Both returned errors and panics become the captured traceback text,
/// which is never empty.
fn invoke<G: GameAdapter, S>(
    strategy: &mut Strategy<'_, G, S>,
    board: &G::Board,
    token: G::Token,
    state: &mut Option<S>,
    move_list: &[G::Move],
) -> Result<G::Move, String> {
    install_panic_capture();
    CAPTURED.take();
    let was_capturing = CAPTURING.replace(true);
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        strategy.decide(board, token, state, move_list)
    }));
    CAPTURING.set(was_capturing);

    match attempt {
        Ok(Ok(mv)) => Ok(mv),
        Ok(Err(err)) => Err(format!("Strategy failed: {:?}", err)),
        Err(payload) => Err(CAPTURED
            .take()
            .unwrap_or_else(|| panic_message(&*payload))),
    }
}

/// Routes panics raised inside a strategy into `CAPTURED` instead of
/// stderr. Panics elsewhere go to the previously installed hook.
fn install_panic_capture() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !CAPTURING.get() {
                previous(info);
                return;
            }
            let backtrace = Backtrace::capture();
            let mut report = format!("Strategy {}", info);
            if backtrace.status() == BacktraceStatus::Captured {
                report.push_str(&format!("\n\nstack backtrace:\n{}", backtrace));
            }
            CAPTURED.set(Some(report));
        }));
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("Strategy panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("Strategy panicked: {}", msg)
    } else {
        "Strategy panicked".to_string()
    }
}
