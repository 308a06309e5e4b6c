//! Error types for the game state engine.

use thiserror::Error;

/// Result type for game state operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while driving a game session.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Energy is exhausted and the user is not premium. The caller
    /// should redirect to the monetization prompt, not retry.
    #[error("out of energy")]
    EnergyExhausted,

    /// No duel is currently loaded.
    #[error("no active duel")]
    NoActiveDuel,

    /// The chosen option id does not exist on the current duel.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// The current duel has already been voted on.
    #[error("already voted on this duel")]
    AlreadyVoted,

    /// An action requires a cast vote, but none was made yet.
    #[error("no option selected")]
    NoSelection,

    /// A category label could not be parsed.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
