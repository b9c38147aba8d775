//! Game adapter error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A game adapter broke its contract with the runner.
///
/// Illegal moves and strategy faults never produce this error; they are
/// folded into the returned [`GameResult`](crate::GameResult). Only a defect
/// in the adapter itself surfaces here.
#[derive(Debug, Clone, Display, Error)]
#[display("Adapter error: {} at {}:{}", message, file, line)]
pub struct AdapterError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AdapterError {
    /// Creates a new adapter error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
