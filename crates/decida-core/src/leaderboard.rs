//! Simulated global leaderboard.
//!
//! There is no real player population: a rank is estimated from the
//! user's XP against a fixed baseline, and a window of plausible
//! competitors is synthesized around it on every call. Bot identities
//! are deliberately unstable between calls — the board is illustrative,
//! not authoritative.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Rank assigned to a player with zero XP (the simulated population
/// floor, "54,000+ players").
pub const BASELINE_RANK: u64 = 54_203;

/// Bot first names (20 entries).
pub const FIRST_NAMES: &[&str] = &[
    "Lucas", "Ana", "Beatriz", "João", "Gabriel", "Mariana", "Pedro", "Julia", "Matheus",
    "Larissa", "Rafael", "Camila", "Gustavo", "Fernanda", "Felipe", "Amanda", "Bruno", "Carolina",
    "Daniel", "Leticia",
];

/// Bot last names (20 entries).
pub const LAST_NAMES: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira", "Lima",
    "Gomes", "Costa", "Ribeiro", "Martins", "Carvalho", "Almeida", "Lopes", "Soares", "Fernandes",
    "Vieira", "Barbosa",
];

/// One row of a leaderboard slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Entry id ("user" for the player, "bot-{rank}" for bots).
    pub id: String,
    /// Display name.
    pub name: String,
    /// XP score.
    pub score: u64,
    /// Current win streak.
    pub streak: u32,
    /// Avatar image URL, keyed deterministically by the display name.
    pub avatar: String,
    /// True for synthesized competitors.
    pub is_bot: bool,
    /// Global rank, unique within a slice.
    pub rank: u64,
}

/// Estimate a global rank from an XP score: the baseline minus one rank
/// per 10 XP, never below 1.
pub fn estimate_rank(xp: u64) -> u64 {
    BASELINE_RANK.saturating_sub(xp / 10).max(1)
}

/// Deterministic avatar URL for a display name.
pub fn avatar_url(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}&backgroundColor=b6e3f4,c0aede,d1d4f9")
}

/// Draw a human-like bot name (independent first/last draws).
pub fn generate_bot_name(rng: &mut StdRng) -> String {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

/// Score a bot at the given rank: roughly inverse to rank (rank 1 is
/// near a million, rank 100,000 around 20) plus a small jitter.
fn simulated_score(rng: &mut StdRng, rank: u64) -> u64 {
    let base = (1_000_000.0 / (rank as f64 * 0.5 + 1.0)).floor() as u64;
    base + rng.random_range(0..500)
}

/// Generate the contiguous leaderboard window around a center rank.
///
/// Ranks span `center_rank - 4 ..= center_rank + 5`, clamped so the
/// lowest rank is 1. The user entry is placed at exactly the center
/// rank; every other rank gets a freshly synthesized bot. The result is
/// sorted ascending by rank with no duplicates.
pub fn generate_slice(
    rng: &mut StdRng,
    center_rank: u64,
    user_entry: &LeaderboardEntry,
) -> Vec<LeaderboardEntry> {
    let start_rank = center_rank.saturating_sub(4).max(1);
    let end_rank = center_rank + 5;

    let mut entries: Vec<LeaderboardEntry> = (start_rank..=end_rank)
        .map(|rank| {
            if rank == center_rank {
                let mut user = user_entry.clone();
                user.rank = rank;
                user
            } else {
                let name = generate_bot_name(rng);
                let avatar = avatar_url(&name);
                LeaderboardEntry {
                    id: format!("bot-{rank}"),
                    name,
                    score: simulated_score(rng, rank),
                    streak: rng.random_range(0..15),
                    avatar,
                    is_bot: true,
                    rank,
                }
            }
        })
        .collect();

    entries.sort_by_key(|e| e.rank);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn user_entry(xp: u64, streak: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            id: "user".to_string(),
            name: "Você".to_string(),
            score: xp,
            streak,
            avatar: avatar_url("voce"),
            is_bot: false,
            rank: estimate_rank(xp),
        }
    }

    #[test]
    fn rank_fixed_points() {
        assert_eq!(estimate_rank(0), 54_203);
        assert_eq!(estimate_rank(100_000), 44_203);
    }

    #[test]
    fn rank_never_below_one() {
        assert_eq!(estimate_rank(542_030), 1);
        assert_eq!(estimate_rank(u64::MAX), 1);
    }

    #[test]
    fn slice_holds_user_at_center() {
        let mut rng = StdRng::seed_from_u64(42);
        let user = user_entry(1000, 3);
        let slice = generate_slice(&mut rng, 500, &user);
        let me = slice.iter().find(|e| !e.is_bot).unwrap();
        assert_eq!(me.rank, 500);
        assert_eq!(me.id, "user");
        assert_eq!(me.name, "Você");
    }

    #[test]
    fn slice_is_contiguous_sorted_and_duplicate_free() {
        let mut rng = StdRng::seed_from_u64(42);
        let user = user_entry(0, 0);
        let slice = generate_slice(&mut rng, 500, &user);
        assert_eq!(slice.len(), 10);
        let ranks: Vec<u64> = slice.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (496..=505).collect::<Vec<u64>>());
    }

    #[test]
    fn slice_clamps_at_rank_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let user = user_entry(0, 0);
        let slice = generate_slice(&mut rng, 1, &user);
        let ranks: Vec<u64> = slice.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=6).collect::<Vec<u64>>());
        assert_eq!(slice[0].rank, 1);
        assert!(!slice[0].is_bot);
    }

    #[test]
    fn every_non_user_entry_is_a_bot() {
        let mut rng = StdRng::seed_from_u64(42);
        let user = user_entry(0, 0);
        let slice = generate_slice(&mut rng, 100, &user);
        for entry in &slice {
            if entry.rank == 100 {
                assert!(!entry.is_bot);
            } else {
                assert!(entry.is_bot);
                assert_eq!(entry.id, format!("bot-{}", entry.rank));
                assert!(entry.streak < 15);
                assert!(entry.avatar.contains("dicebear"));
            }
        }
    }

    #[test]
    fn bot_scores_trend_down_with_rank() {
        let mut rng = StdRng::seed_from_u64(42);
        // Jitter is under 500; these ranks are far enough apart that
        // the expectation dominates.
        let near = simulated_score(&mut rng, 1);
        let far = simulated_score(&mut rng, 10_000);
        assert!(near > far);
        assert!(near > 600_000);
        assert!(far < 1_000);
    }

    #[test]
    fn bots_regenerate_on_every_call() {
        let mut rng = StdRng::seed_from_u64(42);
        let user = user_entry(0, 0);
        let a = generate_slice(&mut rng, 500, &user);
        let b = generate_slice(&mut rng, 500, &user);
        let names_a: Vec<&str> = a.iter().map(|e| e.name.as_str()).collect();
        let names_b: Vec<&str> = b.iter().map(|e| e.name.as_str()).collect();
        assert_ne!(names_a, names_b);
    }

    #[test]
    fn bot_names_come_from_the_tables() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let name = generate_bot_name(&mut rng);
            let (first, last) = name.split_once(' ').unwrap();
            assert!(FIRST_NAMES.contains(&first));
            assert!(LAST_NAMES.contains(&last));
        }
    }
}
