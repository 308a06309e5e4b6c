//! Duel provider boundary for Decida Aí.
//!
//! Duels come from a generative model call (Gemini). This is the only
//! fallible, network-bound operation in the whole game; its failure
//! policy is total absorption — any error is logged and replaced by a
//! fixed fallback duel, never shown to the player.

pub mod error;
pub mod fallback;
pub mod gemini;
pub mod provider;

pub use error::{ProviderError, ProviderResult};
pub use fallback::fallback_duel;
pub use gemini::GeminiProvider;
pub use provider::{DuelProvider, StaticProvider, fetch_or_fallback};
