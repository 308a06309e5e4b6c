//! Game state engine for Decida Aí, a binary "would you rather" duel
//! game.
//!
//! Provides the progression engine (XP, levels, titles, streaks,
//! energy), the daily mission tracker, the simulated global
//! leaderboard, and the session controller that owns all mutable
//! state. Everything here is pure and deterministic; the only I/O in
//! the system, fetching duels, lives in `decida-provider`.

pub mod config;
pub mod duel;
pub mod error;
pub mod leaderboard;
pub mod mission;
pub mod progression;
pub mod session;
pub mod user;

pub use config::GameConfig;
pub use duel::{Category, Duel, DuelOption};
pub use error::{CoreError, CoreResult};
pub use leaderboard::{LeaderboardEntry, estimate_rank, generate_slice};
pub use mission::{Mission, MissionKind, daily_missions, update_missions};
pub use progression::{VoteModifiers, apply_vote_outcome};
pub use session::{GameSession, VoteReport};
pub use user::{UserState, level_for_xp, title_for_level};
