//! Gemini-backed duel generation.
//!
//! One blocking HTTP call per duel: a JSON-schema-constrained
//! `generateContent` request whose response text is itself a JSON
//! document describing the two options and their simulated vote split.

use decida_core::{Category, Duel, DuelOption};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::{ProviderError, ProviderResult};
use crate::provider::DuelProvider;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Duel provider backed by the Gemini generateContent API.
pub struct GeminiProvider {
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Create a provider with the given API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl DuelProvider for GeminiProvider {
    fn fetch_duel(&self, category: Category) -> ProviderResult<Duel> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        let url = format!(
            "{API_BASE}/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let response = ureq::post(&url)
            .send_json(request_body(category))
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let body = response
            .into_string()
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        parse_generate_response(&body, category)
    }
}

fn request_body(category: Category) -> serde_json::Value {
    let prompt = format!(
        "Gere um cenário de duelo \"O que você prefere?\" (Would you rather) \
         divertido e engajante para a categoria: {category}.\n\
         O público alvo é brasileiro, jovem adulto.\n\n\
         Retorne dois cenários opostos.\n\
         Simule uma porcentagem de votos realista baseada no que a maioria das \
         pessoas escolheria (a soma deve ser 100).\n\
         O 'totalVotes' deve ser um número aleatório entre 1500 e 50000 para \
         parecer popular."
    );

    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "question": { "type": "STRING" },
                    "optionA": { "type": "STRING" },
                    "optionAPercent": { "type": "INTEGER" },
                    "optionB": { "type": "STRING" },
                    "optionBPercent": { "type": "INTEGER" },
                    "totalVotes": { "type": "INTEGER" }
                },
                "required": [
                    "question", "optionA", "optionAPercent",
                    "optionB", "optionBPercent", "totalVotes"
                ]
            }
        }
    })
}

/// The JSON document the model is asked to produce.
#[derive(Debug, Deserialize)]
struct RawDuel {
    question: String,
    #[serde(rename = "optionA")]
    option_a: String,
    #[serde(rename = "optionAPercent")]
    option_a_percent: u32,
    #[serde(rename = "optionB")]
    option_b: String,
    #[serde(rename = "optionBPercent")]
    option_b_percent: u32,
    #[serde(rename = "totalVotes")]
    total_votes: u64,
}

/// Parse a generateContent response body into a duel.
fn parse_generate_response(body: &str, category: Category) -> ProviderResult<Duel> {
    let envelope: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    let text = envelope
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ProviderError::MalformedResponse("no candidate text".to_string()))?;

    let raw: RawDuel = serde_json::from_str(text)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    if raw.question.is_empty() {
        return Err(ProviderError::MalformedResponse(
            "empty question".to_string(),
        ));
    }

    let (pct_a, pct_b) = normalize_percentages(raw.option_a_percent, raw.option_b_percent)?;

    Ok(Duel {
        id: Uuid::new_v4().to_string(),
        category,
        question: raw.question,
        options: [
            DuelOption {
                id: "A".to_string(),
                text: raw.option_a,
                percentage: pct_a,
            },
            DuelOption {
                id: "B".to_string(),
                text: raw.option_b,
                percentage: pct_b,
            },
        ],
        total_votes: raw.total_votes,
        is_rare: false,
    })
}

/// Validate the claimed vote shares and force them to sum to 100.
///
/// A share outside 0..=100 is rejected outright. When the pair does not
/// sum to 100, option A's share is trusted and B's is recomputed as the
/// remainder.
fn normalize_percentages(a: u32, b: u32) -> ProviderResult<(u8, u8)> {
    if a > 100 {
        return Err(ProviderError::InvalidPercentage(a));
    }
    if b > 100 {
        return Err(ProviderError::InvalidPercentage(b));
    }
    let a = a as u8;
    let b = if u32::from(a) + b == 100 {
        b as u8
    } else {
        100 - a
    };
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(inner: &str) -> String {
        serde_json::to_string(&json!({
            "candidates": [{ "content": { "parts": [{ "text": inner }] } }]
        }))
        .unwrap()
    }

    #[test]
    fn parses_well_formed_response() {
        let inner = r#"{
            "question": "Você prefere...",
            "optionA": "Saber a data da sua morte",
            "optionAPercent": 30,
            "optionB": "Saber a causa da sua morte",
            "optionBPercent": 70,
            "totalVotes": 23410
        }"#;
        let duel = parse_generate_response(&envelope(inner), Category::Aleatorio).unwrap();
        assert_eq!(duel.question, "Você prefere...");
        assert_eq!(duel.options[0].id, "A");
        assert_eq!(duel.options[0].percentage, 30);
        assert_eq!(duel.options[1].percentage, 70);
        assert_eq!(duel.total_votes, 23410);
        assert_eq!(duel.category, Category::Aleatorio);
        assert!(!duel.is_rare);
    }

    #[test]
    fn fresh_id_per_parse() {
        let inner = r#"{
            "question": "Q",
            "optionA": "a", "optionAPercent": 50,
            "optionB": "b", "optionBPercent": 50,
            "totalVotes": 1500
        }"#;
        let d1 = parse_generate_response(&envelope(inner), Category::Vida).unwrap();
        let d2 = parse_generate_response(&envelope(inner), Category::Vida).unwrap();
        assert_ne!(d1.id, d2.id);
    }

    #[test]
    fn rejects_missing_candidate_text() {
        let err = parse_generate_response(r#"{"candidates": []}"#, Category::Vida).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_unparseable_inner_json() {
        let err = parse_generate_response(&envelope("not json"), Category::Vida).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_empty_question() {
        let inner = r#"{
            "question": "",
            "optionA": "a", "optionAPercent": 50,
            "optionB": "b", "optionBPercent": 50,
            "totalVotes": 1500
        }"#;
        let err = parse_generate_response(&envelope(inner), Category::Vida).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn normalization_trusts_a_when_sum_is_off() {
        assert_eq!(normalize_percentages(60, 40).unwrap(), (60, 40));
        assert_eq!(normalize_percentages(60, 50).unwrap(), (60, 40));
        assert_eq!(normalize_percentages(0, 0).unwrap(), (0, 100));
    }

    #[test]
    fn normalization_rejects_out_of_range() {
        assert!(matches!(
            normalize_percentages(140, 10),
            Err(ProviderError::InvalidPercentage(140))
        ));
        assert!(matches!(
            normalize_percentages(10, 140),
            Err(ProviderError::InvalidPercentage(140))
        ));
    }

    #[test]
    fn empty_api_key_is_rejected_before_any_request() {
        let provider = GeminiProvider::new("");
        let err = provider.fetch_duel(Category::Vida).unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
    }

    #[test]
    fn request_body_carries_category_and_schema() {
        let body = request_body(Category::Grana);
        let prompt = body
            .pointer("/contents/0/parts/0/text")
            .and_then(|v| v.as_str())
            .unwrap();
        assert!(prompt.contains("Grana"));
        assert!(
            body.pointer("/generationConfig/responseSchema/properties/optionAPercent")
                .is_some()
        );
    }
}
