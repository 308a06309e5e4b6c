//! Error types for the duel provider boundary.

use thiserror::Error;

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors that can occur while fetching a duel.
///
/// Every variant is absorbed by [`crate::fetch_or_fallback`]; none of
/// them ever reaches the player as an error state.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No API key was configured.
    #[error("no API key configured")]
    MissingApiKey,

    /// The HTTP request failed.
    #[error("http request failed: {0}")]
    Http(String),

    /// The response body could not be read or parsed.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A vote-share percentage was outside 0..=100.
    #[error("percentage out of range: {0}")]
    InvalidPercentage(u32),
}
