//! The duel provider seam and the failure-absorption policy.

use std::sync::atomic::{AtomicUsize, Ordering};

use decida_core::{Category, Duel, DuelOption};
use uuid::Uuid;

use crate::error::ProviderResult;
use crate::fallback::fallback_duel;

/// Source of duels. The one network-bound, fallible operation in the
/// system; everything downstream treats it as opaque.
pub trait DuelProvider {
    /// Fetch one duel for the given category.
    fn fetch_duel(&self, category: Category) -> ProviderResult<Duel>;
}

/// Fetch a duel, absorbing any failure into the fixed fallback duel.
///
/// Failures are logged for diagnostics but never surface to the player;
/// the game loop continues with the fallback content.
pub fn fetch_or_fallback(provider: &dyn DuelProvider, category: Category) -> Duel {
    match provider.fetch_duel(category) {
        Ok(duel) => duel,
        Err(e) => {
            tracing::warn!(category = %category, error = %e, "duel fetch failed, using fallback");
            fallback_duel()
        }
    }
}

/// Offline provider cycling through a small canned duel list. Powers
/// `--offline` play and integration tests; never fails.
pub struct StaticProvider {
    next: AtomicUsize,
}

impl StaticProvider {
    /// Create an offline provider.
    pub fn new() -> Self {
        Self {
            next: AtomicUsize::new(0),
        }
    }

    fn canned(index: usize, category: Category) -> Duel {
        let (question, a, pct_a, b, pct_b, votes) = match index % 3 {
            0 => (
                "Você prefere...",
                "Ter dinheiro infinito mas nenhum amigo",
                15,
                "Ter amigos leais mas salário mínimo pra sempre",
                85,
                12_403,
            ),
            1 => (
                "Você prefere...",
                "Saber a data da sua morte",
                28,
                "Saber a causa da sua morte",
                72,
                31_250,
            ),
            _ => (
                "Você prefere...",
                "Nunca mais usar rede social",
                44,
                "Nunca mais assistir séries e filmes",
                56,
                8_917,
            ),
        };
        Duel {
            id: Uuid::new_v4().to_string(),
            category,
            question: question.to_string(),
            options: [
                DuelOption {
                    id: "A".to_string(),
                    text: a.to_string(),
                    percentage: pct_a,
                },
                DuelOption {
                    id: "B".to_string(),
                    text: b.to_string(),
                    percentage: pct_b,
                },
            ],
            total_votes: votes,
            is_rare: false,
        }
    }
}

impl Default for StaticProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DuelProvider for StaticProvider {
    fn fetch_duel(&self, category: Category) -> ProviderResult<Duel> {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        Ok(Self::canned(index, category))
    }
}
