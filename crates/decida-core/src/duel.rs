//! Duels: binary "would you rather" prompts with vote-share percentages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The closed set of duel categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Hot takes and controversy.
    Polemicas,
    /// Everyday life dilemmas.
    Vida,
    /// Money and career.
    Grana,
    /// Love and relationships.
    Romance,
    /// Anything goes.
    Aleatorio,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Polemicas,
        Category::Vida,
        Category::Grana,
        Category::Romance,
        Category::Aleatorio,
    ];

    /// The display label, as shown in the category selector and sent to
    /// the duel provider.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Polemicas => "Polêmicas",
            Self::Vida => "Vida",
            Self::Grana => "Grana",
            Self::Romance => "Romance",
            Self::Aleatorio => "Aleatório",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both accented labels and plain-ASCII spellings.
        match s.to_lowercase().as_str() {
            "polêmicas" | "polemicas" => Ok(Self::Polemicas),
            "vida" => Ok(Self::Vida),
            "grana" => Ok(Self::Grana),
            "romance" => Ok(Self::Romance),
            "aleatório" | "aleatorio" => Ok(Self::Aleatorio),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}

/// One side of a duel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelOption {
    /// Option id ("A" or "B" for provider-generated duels).
    pub id: String,
    /// Option text.
    pub text: String,
    /// Claimed share of votes, 0..=100. The two options of a duel are
    /// expected to sum to 100.
    pub percentage: u8,
}

/// A binary choice prompt with vote-share percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Duel {
    /// Duel id.
    pub id: String,
    /// Category the duel was generated for.
    pub category: Category,
    /// The question, e.g. "Você prefere...".
    pub question: String,
    /// Exactly two opposing options.
    pub options: [DuelOption; 2],
    /// Display-only total vote count.
    pub total_votes: u64,
    /// Rare duels grant a 3x XP multiplier. Assigned client-side after
    /// fetch, independent of provider data.
    pub is_rare: bool,
}

impl Duel {
    /// Look up an option by id.
    pub fn option(&self, id: &str) -> Option<&DuelOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// The option opposing the given id.
    pub fn other_option(&self, id: &str) -> Option<&DuelOption> {
        self.options.iter().find(|o| o.id != id)
    }
}
