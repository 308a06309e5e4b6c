//! Daily missions: bounded progress counters with one-time XP rewards.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How a mission's progress is computed from a vote outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionKind {
    /// Progress increments by one per vote, win or lose.
    VoteCount,
    /// Progress tracks the current win streak: set to the new streak on
    /// a win, reset to 0 on a loss.
    StreakThreshold,
}

/// A bounded progress counter that grants a one-time XP reward when its
/// target is reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    /// Mission id.
    pub id: String,
    /// Player-facing description.
    pub description: String,
    /// Update rule for this mission.
    pub kind: MissionKind,
    /// Progress threshold that completes the mission.
    pub target: u32,
    /// Current progress.
    pub current: u32,
    /// XP granted once, at the moment the mission completes.
    pub reward_xp: u64,
    /// Completion flag. One-way false -> true.
    pub completed: bool,
    /// When the mission window ends. Stored but not enforced; expiry
    /// handling is an open product question.
    pub expires_at: DateTime<Utc>,
}

impl Mission {
    /// Fraction of the target reached (0.0 to 1.0).
    pub fn fraction(&self) -> f64 {
        if self.target == 0 {
            return 1.0;
        }
        (f64::from(self.current) / f64::from(self.target)).min(1.0)
    }
}

/// The default daily mission board, with a three-hour window from `now`.
pub fn daily_missions(now: DateTime<Utc>) -> Vec<Mission> {
    let expires_at = now + Duration::hours(3);
    vec![
        Mission {
            id: "m1".to_string(),
            description: "Votar em 5 duelos".to_string(),
            kind: MissionKind::VoteCount,
            target: 5,
            current: 0,
            reward_xp: 200,
            completed: false,
            expires_at,
        },
        Mission {
            id: "m2".to_string(),
            description: "Acertar a maioria 3x seguidas".to_string(),
            kind: MissionKind::StreakThreshold,
            target: 3,
            current: 0,
            reward_xp: 500,
            completed: false,
            expires_at,
        },
    ]
}

/// Fold a vote outcome into a mission board.
///
/// Completed missions are terminal and skipped. A mission whose new
/// progress reaches its target flips to completed, and its reward XP is
/// counted in the returned bonus exactly once, at that transition.
pub fn update_missions(missions: &[Mission], won: bool, new_streak: u32) -> (Vec<Mission>, u64) {
    let mut bonus_xp = 0u64;
    let updated = missions
        .iter()
        .map(|m| {
            if m.completed {
                return m.clone();
            }

            let current = match m.kind {
                MissionKind::VoteCount => m.current + 1,
                MissionKind::StreakThreshold => {
                    if won {
                        new_streak
                    } else {
                        0
                    }
                }
            };

            let completed = current >= m.target;
            if completed {
                bonus_xp += m.reward_xp;
            }

            Mission {
                current,
                completed,
                ..m.clone()
            }
        })
        .collect();

    (updated, bonus_xp)
}
