//! The fixed fallback duel served when generation fails.

use decida_core::{Category, Duel, DuelOption};

/// The duel substituted for any provider failure. Fixed content, so the
/// game loop continues uninterrupted whatever went wrong.
pub fn fallback_duel() -> Duel {
    Duel {
        id: "fallback-1".to_string(),
        category: Category::Vida,
        question: "Você prefere...".to_string(),
        options: [
            DuelOption {
                id: "A".to_string(),
                text: "Ter dinheiro infinito mas nenhum amigo".to_string(),
                percentage: 15,
            },
            DuelOption {
                id: "B".to_string(),
                text: "Ter amigos leais mas salário mínimo pra sempre".to_string(),
                percentage: 85,
            },
        ],
        total_votes: 12_403,
        is_rare: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_content() {
        let duel = fallback_duel();
        assert_eq!(duel.id, "fallback-1");
        assert_eq!(duel.question, "Você prefere...");
        assert_eq!(duel.total_votes, 12_403);
        assert_eq!(duel.options[0].percentage, 15);
        assert_eq!(duel.options[1].percentage, 85);
        assert_eq!(
            duel.options[0].text,
            "Ter dinheiro infinito mas nenhum amigo"
        );
        assert_eq!(
            duel.options[1].text,
            "Ter amigos leais mas salário mínimo pra sempre"
        );
        assert!(!duel.is_rare);
    }

    #[test]
    fn fallback_percentages_sum_to_100() {
        let duel = fallback_duel();
        let sum: u32 = duel.options.iter().map(|o| u32::from(o.percentage)).sum();
        assert_eq!(sum, 100);
    }
}
