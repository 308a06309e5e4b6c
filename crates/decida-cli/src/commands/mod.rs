pub mod duel;
pub mod leaderboard;
pub mod missions;
pub mod play;

use decida_core::duel::Category;
use decida_provider::{DuelProvider, GeminiProvider, StaticProvider};

/// Parse a category label, accepting plain-ASCII spellings.
fn parse_category(label: &str) -> Result<Category, String> {
    label.parse().map_err(|e| format!("{e}"))
}

/// Pick the duel source: Gemini when a key is available (flag or the
/// GEMINI_API_KEY variable), canned duels otherwise. The provider's own
/// failures still fall back per duel.
fn make_provider(offline: bool, api_key: Option<&str>) -> Box<dyn DuelProvider> {
    if offline {
        return Box::new(StaticProvider::new());
    }
    let key = api_key
        .map(str::to_string)
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
        .unwrap_or_default();
    if key.is_empty() {
        Box::new(StaticProvider::new())
    } else {
        Box::new(GeminiProvider::new(key))
    }
}
