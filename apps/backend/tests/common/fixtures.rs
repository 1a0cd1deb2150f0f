//! Test fixtures and factory functions for creating test data.

use flashcard_core::AiContent;
use serde_json::json;

/// AI content for "ubiquitous".
pub fn ubiquitous_content() -> AiContent {
    AiContent {
        definition: "present everywhere".to_string(),
        example: "Smartphones are ubiquitous today.".to_string(),
        synonyms: vec!["omnipresent".to_string(), "pervasive".to_string()],
        mnemonic: "u-BIK-wi-tus sounds like 'you bike with us' — everyone's doing it".to_string(),
    }
}

/// Minimal valid AI content with a recognizable definition.
pub fn simple_content(definition: &str) -> AiContent {
    AiContent {
        definition: definition.to_string(),
        example: format!("An example about {}.", definition),
        synonyms: vec!["alike".to_string()],
        mnemonic: "remember it".to_string(),
    }
}

/// Provider response text for the given content.
pub fn provider_json(content: &AiContent) -> String {
    serde_json::to_string(content).unwrap()
}

/// Create a flashcard request body.
pub fn create_request(word: &str, context: Option<&str>) -> serde_json::Value {
    match context {
        Some(c) => json!({ "word": word, "context": c }),
        None => json!({ "word": word }),
    }
}
