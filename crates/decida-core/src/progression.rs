//! The progression engine: the pure state transition applied per vote.

use chrono::Utc;

use crate::duel::Duel;
use crate::error::{CoreError, CoreResult};
use crate::mission::update_missions;
use crate::user::{HistoryRecord, PREMIUM_ENERGY, UserState, level_for_xp, title_for_level};

/// Base XP for picking the majority (or tied) option.
pub const XP_WIN: u64 = 100;
/// Base XP for picking the minority option.
pub const XP_LOSS: u64 = 20;
/// Streak length above which the streak multiplier kicks in.
pub const STREAK_BONUS_THRESHOLD: u32 = 5;

/// Context flags that modify the XP gain of a vote.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoteModifiers {
    /// A flash (double XP) event is currently active.
    pub flash_event: bool,
}

/// Compute the next user state from a vote.
///
/// The vote wins when the chosen option's percentage is greater than or
/// equal to the other's (ties count as a win). XP multipliers compound
/// multiplicatively — x1.5 above a 5-streak, x3 on a rare duel, x2
/// during a flash event — and the result is floored once, after all of
/// them. Mission progress is folded in last; level and title are
/// recomputed from the final XP total.
///
/// Pure value-in/value-out: the previous state is never mutated. The
/// caller is expected to have verified the energy gate already; energy
/// is decremented here without a floor check.
pub fn apply_vote_outcome(
    state: &UserState,
    duel: &Duel,
    chosen_option_id: &str,
    modifiers: VoteModifiers,
) -> CoreResult<UserState> {
    let chosen = duel
        .option(chosen_option_id)
        .ok_or_else(|| CoreError::UnknownOption(chosen_option_id.to_string()))?;
    let other = duel
        .other_option(chosen_option_id)
        .ok_or_else(|| CoreError::UnknownOption(chosen_option_id.to_string()))?;

    let won = chosen.percentage >= other.percentage;

    let mut xp_gain = if won { XP_WIN as f64 } else { XP_LOSS as f64 };
    if state.streak > STREAK_BONUS_THRESHOLD {
        xp_gain *= 1.5;
    }
    if duel.is_rare {
        xp_gain *= 3.0;
    }
    if modifiers.flash_event {
        xp_gain *= 2.0;
    }
    // Single floor, after all multipliers.
    let xp_delta = xp_gain.floor() as u64;

    let new_streak = if won { state.streak + 1 } else { 0 };
    let (missions, mission_bonus) = update_missions(&state.missions, won, new_streak);

    let new_xp = state.xp + xp_delta + mission_bonus;
    let new_level = level_for_xp(new_xp);

    let mut history = state.history.clone();
    history.push(HistoryRecord {
        duel_id: duel.id.clone(),
        won,
        timestamp: Utc::now(),
    });

    Ok(UserState {
        energy: if state.is_premium {
            PREMIUM_ENERGY
        } else {
            state.energy - 1
        },
        max_energy: state.max_energy,
        score: state.score + u64::from(won),
        xp: new_xp,
        level: new_level,
        title: title_for_level(new_level).to_string(),
        streak: new_streak,
        history,
        is_premium: state.is_premium,
        badges: state.badges.clone(),
        missions,
    })
}
