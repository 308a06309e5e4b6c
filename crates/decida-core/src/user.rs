//! User state: energy, XP, level, title, streak, history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mission::Mission;

/// Energy value displayed while premium. Premium users are never gated
/// on energy, whatever the stored number.
pub const PREMIUM_ENERGY: i32 = 999;

/// XP needed per level: `level = xp / 1000 + 1`.
pub const XP_PER_LEVEL: u64 = 1000;

/// Player titles, one per five levels, saturating at the last entry.
pub const TITLES: &[&str] = &[
    "Iniciante",
    "Observador",
    "Palpiteiro",
    "Vidente",
    "Leitor de Mentes",
    "Oráculo",
    "Mestre da Maioria",
    "Lenda Viva",
    "Deus do Voto",
];

/// Level derived from total XP. XP 0..999 is level 1.
pub fn level_for_xp(xp: u64) -> u32 {
    (xp / XP_PER_LEVEL + 1) as u32
}

/// Title for a level: buckets of five, clamped to the last title.
pub fn title_for_level(level: u32) -> &'static str {
    let index = ((level / 5) as usize).min(TITLES.len() - 1);
    TITLES[index]
}

/// One entry in the user's vote history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// The duel voted on.
    pub duel_id: String,
    /// Whether the user picked the majority (or tied) option.
    pub won: bool,
    /// When the vote was cast.
    pub timestamp: DateTime<Utc>,
}

/// The whole mutable state of one player session.
///
/// Owned exclusively by the session controller; every vote replaces it
/// wholesale with a value computed by the progression engine. Nothing
/// is persisted across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserState {
    /// Remaining energy. One vote costs one energy unless premium.
    pub energy: i32,
    /// Energy ceiling for non-premium users.
    pub max_energy: i32,
    /// Number of winning votes.
    pub score: u64,
    /// Total experience points. Monotonically non-decreasing.
    pub xp: u64,
    /// Current level, always `xp / 1000 + 1`.
    pub level: u32,
    /// Title derived from the level.
    pub title: String,
    /// Consecutive winning votes, reset to 0 on any loss.
    pub streak: u32,
    /// Append-only vote history.
    pub history: Vec<HistoryRecord>,
    /// Premium flag. One-way false -> true within a session.
    pub is_premium: bool,
    /// Earned badge identifiers. Placeholder, currently never awarded.
    pub badges: Vec<String>,
    /// Active daily missions.
    pub missions: Vec<Mission>,
}

impl UserState {
    /// A fresh level-1 user with the given energy and mission board.
    pub fn new(energy: i32, max_energy: i32, missions: Vec<Mission>) -> Self {
        Self {
            energy,
            max_energy,
            score: 0,
            xp: 0,
            level: 1,
            title: title_for_level(1).to_string(),
            streak: 0,
            history: Vec::new(),
            is_premium: false,
            badges: Vec::new(),
            missions,
        }
    }

    /// Whether the user may vote: has energy left or is premium.
    pub fn can_play(&self) -> bool {
        self.is_premium || self.energy > 0
    }
}
