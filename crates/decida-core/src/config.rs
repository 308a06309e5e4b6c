//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible rare-duel rolls and leaderboard bots.
    pub seed: u64,
    /// Energy the user starts with.
    pub starting_energy: i32,
    /// Energy ceiling for non-premium users.
    pub max_energy: i32,
    /// Probability that a freshly fetched duel is flagged rare.
    pub rare_chance: f64,
    /// Seconds after session start before the flash (double XP) event
    /// switches on.
    pub flash_event_delay_secs: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_energy: 5,
            max_energy: 5,
            rare_chance: 0.1,
            flash_event_delay_secs: 30,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set starting and maximum energy to the same value.
    pub fn with_energy(mut self, energy: i32) -> Self {
        self.starting_energy = energy;
        self.max_energy = energy;
        self
    }

    /// Set the rare-duel probability (clamped to 0.0..=1.0).
    pub fn with_rare_chance(mut self, chance: f64) -> Self {
        self.rare_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the flash-event activation delay in seconds.
    pub fn with_flash_delay(mut self, secs: i64) -> Self {
        self.flash_event_delay_secs = secs;
        self
    }
}
