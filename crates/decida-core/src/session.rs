//! Game session controller.
//!
//! `GameSession` is the single owner of the mutable game state. All
//! mutations flow through the progression engine's pure transition;
//! the session adds the gating, the rare-duel roll, the flash-event
//! clock, and the monetization actions.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::duel::Duel;
use crate::error::{CoreError, CoreResult};
use crate::leaderboard::{LeaderboardEntry, avatar_url, estimate_rank, generate_slice};
use crate::mission::daily_missions;
use crate::progression::{VoteModifiers, apply_vote_outcome};
use crate::user::{PREMIUM_ENERGY, UserState};

/// Energy granted for watching a rewarded ad.
pub const AD_ENERGY_REWARD: i32 = 3;

/// What one vote did to the user state, for display.
#[derive(Debug, Clone)]
pub struct VoteReport {
    /// Whether the chosen option was the majority (or tied).
    pub won: bool,
    /// XP gained by this vote, mission rewards included.
    pub xp_gained: u64,
    /// Streak after the vote.
    pub streak: u32,
    /// True if the vote pushed the user over a level boundary.
    pub level_up: bool,
    /// Descriptions of missions completed by this vote.
    pub completed_missions: Vec<String>,
}

/// An interactive game session: one user, one duel at a time.
pub struct GameSession {
    user: UserState,
    current_duel: Option<Duel>,
    selected_option: Option<String>,
    started_at: DateTime<Utc>,
    flash_delay: Duration,
    rare_chance: f64,
    rng: StdRng,
}

impl GameSession {
    /// Start a fresh session with the default daily mission board.
    pub fn new(config: GameConfig) -> Self {
        let now = Utc::now();
        Self {
            user: UserState::new(
                config.starting_energy,
                config.max_energy,
                daily_missions(now),
            ),
            current_duel: None,
            selected_option: None,
            started_at: now,
            flash_delay: Duration::seconds(config.flash_event_delay_secs),
            // random_bool panics outside 0..=1, so a hand-written
            // config with an out-of-range chance is clamped here.
            rare_chance: config.rare_chance.clamp(0.0, 1.0),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The current user state.
    pub fn user(&self) -> &UserState {
        &self.user
    }

    /// The duel currently on screen, if any.
    pub fn current_duel(&self) -> Option<&Duel> {
        self.current_duel.as_ref()
    }

    /// The option id the user voted for on the current duel, if any.
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    /// Whether the flash (double XP) event is on. Activates once the
    /// configured delay after session start has elapsed, then stays on.
    pub fn flash_event_active(&self) -> bool {
        Utc::now().signed_duration_since(self.started_at) >= self.flash_delay
    }

    /// Whether a vote or next-duel action is allowed right now. When
    /// false the caller should show the monetization prompt.
    pub fn can_play(&self) -> bool {
        self.user.can_play()
    }

    /// Accept a freshly fetched duel as the current one, rolling the
    /// rare flag (10% by default) and clearing any previous selection.
    pub fn begin_duel(&mut self, mut duel: Duel) {
        if self.rng.random_bool(self.rare_chance) {
            duel.is_rare = true;
        }
        self.current_duel = Some(duel);
        self.selected_option = None;
    }

    /// Cast a vote on the current duel.
    ///
    /// The energy gate runs first: an exhausted non-premium user gets
    /// `EnergyExhausted` and no state changes. A second vote on the
    /// same duel is rejected.
    pub fn vote(&mut self, option_id: &str) -> CoreResult<VoteReport> {
        if !self.can_play() {
            return Err(CoreError::EnergyExhausted);
        }
        if self.selected_option.is_some() {
            return Err(CoreError::AlreadyVoted);
        }
        let duel = self.current_duel.as_ref().ok_or(CoreError::NoActiveDuel)?;

        let modifiers = VoteModifiers {
            flash_event: self.flash_event_active(),
        };
        let next = apply_vote_outcome(&self.user, duel, option_id, modifiers)?;

        let report = VoteReport {
            won: next.streak > self.user.streak,
            xp_gained: next.xp - self.user.xp,
            streak: next.streak,
            level_up: next.level > self.user.level,
            completed_missions: next
                .missions
                .iter()
                .zip(self.user.missions.iter())
                .filter(|(new, old)| new.completed && !old.completed)
                .map(|(new, _)| new.description.clone())
                .collect(),
        };

        self.user = next;
        self.selected_option = Some(option_id.to_string());
        Ok(report)
    }

    /// Gate for the next-duel action: `Ok` clears the current duel so a
    /// fetch may start, `EnergyExhausted` redirects to monetization.
    pub fn request_next_duel(&mut self) -> CoreResult<()> {
        if !self.can_play() {
            return Err(CoreError::EnergyExhausted);
        }
        self.current_duel = None;
        self.selected_option = None;
        Ok(())
    }

    /// Flip the premium flag (one-way) and lift the energy gate.
    pub fn go_premium(&mut self) {
        self.user.is_premium = true;
        self.user.energy = PREMIUM_ENERGY;
    }

    /// Grant the rewarded-ad energy bonus.
    pub fn watch_ad(&mut self) {
        self.user.energy += AD_ENERGY_REWARD;
    }

    /// Share text for the current vote: the chosen option's vote share
    /// plus the user's estimated global rank.
    pub fn share_text(&self) -> CoreResult<String> {
        let duel = self.current_duel.as_ref().ok_or(CoreError::NoActiveDuel)?;
        let selected = self.selected_option.as_deref().ok_or(CoreError::NoSelection)?;
        let option = duel
            .option(selected)
            .ok_or_else(|| CoreError::UnknownOption(selected.to_string()))?;
        let rank = estimate_rank(self.user.xp);
        Ok(format!(
            "Eu penso igual a {}% das pessoas! 😳\n\nJoguei no Decida Aí e meu rank é #{rank}.\n\n👉 decida-ai.app",
            option.percentage
        ))
    }

    /// The user's own leaderboard row at their estimated rank.
    pub fn user_leaderboard_entry(&self) -> LeaderboardEntry {
        LeaderboardEntry {
            id: "user".to_string(),
            name: "Você".to_string(),
            score: self.user.xp,
            streak: self.user.streak,
            avatar: avatar_url(&self.user.xp.to_string()),
            is_bot: false,
            rank: estimate_rank(self.user.xp),
        }
    }

    /// A freshly simulated leaderboard slice around the user.
    pub fn leaderboard_slice(&mut self) -> Vec<LeaderboardEntry> {
        let entry = self.user_leaderboard_entry();
        generate_slice(&mut self.rng, entry.rank, &entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::{Category, DuelOption};

    fn test_duel() -> Duel {
        Duel {
            id: "d1".to_string(),
            category: Category::Vida,
            question: "Você prefere...".to_string(),
            options: [
                DuelOption {
                    id: "A".to_string(),
                    text: "A".to_string(),
                    percentage: 70,
                },
                DuelOption {
                    id: "B".to_string(),
                    text: "B".to_string(),
                    percentage: 30,
                },
            ],
            total_votes: 9000,
            is_rare: false,
        }
    }

    fn session() -> GameSession {
        // Long flash delay keeps the double-XP modifier out of tests.
        GameSession::new(
            GameConfig::default()
                .with_seed(42)
                .with_rare_chance(0.0)
                .with_flash_delay(3600),
        )
    }

    #[test]
    fn vote_flow() {
        let mut s = session();
        s.begin_duel(test_duel());
        let report = s.vote("A").unwrap();
        assert!(report.won);
        assert_eq!(report.xp_gained, 100);
        assert_eq!(report.streak, 1);
        assert!(!report.level_up);
        assert_eq!(s.user().energy, 4);
        assert_eq!(s.selected_option(), Some("A"));
    }

    #[test]
    fn double_vote_rejected() {
        let mut s = session();
        s.begin_duel(test_duel());
        s.vote("A").unwrap();
        assert!(matches!(s.vote("B"), Err(CoreError::AlreadyVoted)));
    }

    #[test]
    fn vote_without_duel_fails() {
        let mut s = session();
        assert!(matches!(s.vote("A"), Err(CoreError::NoActiveDuel)));
    }

    #[test]
    fn energy_gate_blocks_and_preserves_state() {
        let mut s = GameSession::new(
            GameConfig::default()
                .with_energy(1)
                .with_rare_chance(0.0)
                .with_flash_delay(3600),
        );
        s.begin_duel(test_duel());
        s.vote("A").unwrap();
        assert_eq!(s.user().energy, 0);

        s.begin_duel(test_duel());
        let before_xp = s.user().xp;
        assert!(matches!(s.vote("A"), Err(CoreError::EnergyExhausted)));
        assert!(matches!(
            s.request_next_duel(),
            Err(CoreError::EnergyExhausted)
        ));
        assert_eq!(s.user().xp, before_xp);
        assert_eq!(s.user().history.len(), 1);
    }

    #[test]
    fn premium_never_gated() {
        let mut s = GameSession::new(
            GameConfig::default()
                .with_energy(0)
                .with_rare_chance(0.0)
                .with_flash_delay(3600),
        );
        assert!(!s.can_play());
        s.go_premium();
        assert!(s.can_play());
        assert!(s.user().is_premium);
        assert_eq!(s.user().energy, PREMIUM_ENERGY);

        s.begin_duel(test_duel());
        s.vote("A").unwrap();
        assert_eq!(s.user().energy, PREMIUM_ENERGY);
    }

    #[test]
    fn watch_ad_grants_energy() {
        let mut s = GameSession::new(GameConfig::default().with_energy(0));
        s.watch_ad();
        assert_eq!(s.user().energy, AD_ENERGY_REWARD);
        assert!(s.can_play());
    }

    #[test]
    fn flash_event_activates_after_delay() {
        let s = GameSession::new(GameConfig::default().with_flash_delay(3600));
        assert!(!s.flash_event_active());
        let s = GameSession::new(GameConfig::default().with_flash_delay(0));
        assert!(s.flash_event_active());
    }

    #[test]
    fn flash_event_doubles_xp() {
        let mut s = GameSession::new(
            GameConfig::default()
                .with_rare_chance(0.0)
                .with_flash_delay(0),
        );
        s.begin_duel(test_duel());
        let report = s.vote("A").unwrap();
        assert_eq!(report.xp_gained, 200);
    }

    #[test]
    fn rare_roll_applied_on_begin() {
        let mut s = GameSession::new(
            GameConfig::default()
                .with_rare_chance(1.0)
                .with_flash_delay(3600),
        );
        s.begin_duel(test_duel());
        assert!(s.current_duel().unwrap().is_rare);
        let report = s.vote("A").unwrap();
        assert_eq!(report.xp_gained, 300);
    }

    #[test]
    fn out_of_range_rare_chance_is_clamped() {
        // Bypass the builder's clamp by writing the field directly.
        let mut config = GameConfig::default().with_flash_delay(3600);
        config.rare_chance = 2.5;
        let mut s = GameSession::new(config);
        s.begin_duel(test_duel());
        assert!(s.current_duel().unwrap().is_rare);

        let mut config = GameConfig::default().with_flash_delay(3600);
        config.rare_chance = -1.0;
        let mut s = GameSession::new(config);
        s.begin_duel(test_duel());
        assert!(!s.current_duel().unwrap().is_rare);
    }

    #[test]
    fn share_text_embeds_percentage_and_rank() {
        let mut s = session();
        s.begin_duel(test_duel());
        assert!(matches!(s.share_text(), Err(CoreError::NoSelection)));
        s.vote("A").unwrap();
        let text = s.share_text().unwrap();
        assert!(text.contains("70%"));
        assert!(text.contains(&format!("#{}", estimate_rank(s.user().xp))));
        assert!(text.contains("decida-ai.app"));
    }

    #[test]
    fn mission_completion_reported() {
        let mut s = session();
        for _ in 0..2 {
            s.begin_duel(test_duel());
            let report = s.vote("A").unwrap();
            assert!(report.completed_missions.is_empty());
        }
        s.begin_duel(test_duel());
        let report = s.vote("A").unwrap();
        assert_eq!(
            report.completed_missions,
            vec!["Acertar a maioria 3x seguidas".to_string()]
        );
        // Mission reward rides along with the base gain.
        assert_eq!(report.xp_gained, 600);
    }

    #[test]
    fn leaderboard_slice_centers_on_user() {
        let mut s = session();
        let slice = s.leaderboard_slice();
        let me = slice.iter().find(|e| !e.is_bot).unwrap();
        assert_eq!(me.rank, estimate_rank(s.user().xp));
        assert_eq!(me.name, "Você");
    }

    #[test]
    fn next_duel_clears_current() {
        let mut s = session();
        s.begin_duel(test_duel());
        s.vote("A").unwrap();
        s.request_next_duel().unwrap();
        assert!(s.current_duel().is_none());
        assert!(s.selected_option().is_none());
    }
}
