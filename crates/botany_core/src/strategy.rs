//! Move-selecting strategies ("bots").
//!
//! A strategy declares up front how much context it wants. Simple strategies
//! see only the board; stateful ones also get back whatever they returned on
//! their previous turn; full-context ones additionally see their token and
//! the moves played so far.

use crate::GameAdapter;

type SimpleFn<'a, G> =
    dyn FnMut(&<G as GameAdapter>::Board) -> anyhow::Result<<G as GameAdapter>::Move> + 'a;

type StatefulFn<'a, G, S> = dyn FnMut(
        &<G as GameAdapter>::Board,
        Option<&S>,
    ) -> anyhow::Result<(<G as GameAdapter>::Move, S)>
    + 'a;

type FullContextFn<'a, G, S> = dyn FnMut(
        &<G as GameAdapter>::Board,
        <G as GameAdapter>::Token,
        Option<&S>,
        &[<G as GameAdapter>::Move],
    ) -> anyhow::Result<(<G as GameAdapter>::Move, S)>
    + 'a;

/// A caller-supplied decision function for one side.
///
/// `S` is the strategy's private state. The runner owns one `Option<S>` slot
/// per side, starts it at `None`, and replaces it with whatever the strategy
/// returns. A `Simple` strategy never touches its slot.
///
/// Returning `Err` (or panicking) is a strategy fault and ends the game with
/// [`ResultType::Exception`](crate::ResultType::Exception).
pub enum Strategy<'a, G: GameAdapter, S = ()> {
    /// Called with the board only.
    Simple(Box<SimpleFn<'a, G>>),
    /// Called with the board and this side's previous state.
    Stateful(Box<StatefulFn<'a, G, S>>),
    /// Called with the board, token, previous state and the moves so far.
    FullContext(Box<FullContextFn<'a, G, S>>),
}

impl<'a, G: GameAdapter> Strategy<'a, G> {
    /// Wraps a board-only decision function.
    pub fn simple<F>(f: F) -> Self
    where
        F: FnMut(&G::Board) -> anyhow::Result<G::Move> + 'a,
    {
        Strategy::Simple(Box::new(f))
    }
}

impl<'a, G: GameAdapter, S> Strategy<'a, G, S> {
    /// Wraps a decision function that threads its own state between turns.
    pub fn stateful<F>(f: F) -> Self
    where
        F: FnMut(&G::Board, Option<&S>) -> anyhow::Result<(G::Move, S)> + 'a,
    {
        Strategy::Stateful(Box::new(f))
    }

    /// Wraps a decision function that sees the full game context.
    pub fn full_context<F>(f: F) -> Self
    where
        F: FnMut(&G::Board, G::Token, Option<&S>, &[G::Move]) -> anyhow::Result<(G::Move, S)>
            + 'a,
    {
        Strategy::FullContext(Box::new(f))
    }

    /// Short name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Strategy::Simple(_) => "simple",
            Strategy::Stateful(_) => "stateful",
            Strategy::FullContext(_) => "full_context",
        }
    }

    /// Asks the strategy for a move.
    ///
    /// On success the state slot holds whatever the strategy returned. On
    /// failure the slot is left untouched.
    pub(crate) fn decide(
        &mut self,
        board: &G::Board,
        token: G::Token,
        state: &mut Option<S>,
        move_list: &[G::Move],
    ) -> anyhow::Result<G::Move> {
        match self {
            Strategy::Simple(f) => f(board),
            Strategy::Stateful(f) => {
                let (mv, next) = f(board, state.as_ref())?;
                *state = Some(next);
                Ok(mv)
            }
            Strategy::FullContext(f) => {
                let (mv, next) = f(board, token, state.as_ref(), move_list)?;
                *state = Some(next);
                Ok(mv)
            }
        }
    }
}

impl<G: GameAdapter, S> std::fmt::Debug for Strategy<'_, G, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Strategy::{}", self.kind())
    }
}
