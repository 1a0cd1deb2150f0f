//! Flashcard content generation.

use flashcard_core::contract::{build_prompt, parse_response, SYSTEM_INSTRUCTIONS};

use crate::error::{ApiError, Result};
use crate::models::FlashcardRecord;
use crate::services::ai::AiProvider;
use crate::store::FlashcardStore;

/// Generate AI content for one record and store it.
///
/// The record is only written when the provider answers with content that
/// passes validation. On any failure the stored record is left untouched.
pub async fn generate_content(
    store: &dyn FlashcardStore,
    provider: &dyn AiProvider,
    id: i64,
) -> Result<FlashcardRecord> {
    let card = store.get(id)?;
    let prompt = build_prompt(&card.word, card.context.as_deref());

    tracing::info!(card_id = id, word = %card.word, "Requesting AI content");

    let raw = provider
        .complete(SYSTEM_INSTRUCTIONS, &prompt)
        .await
        .map_err(|e| {
            tracing::error!(card_id = id, "AI provider error: {}", e);
            ApiError::from(e)
        })?;

    let content = parse_response(&raw).map_err(|e| {
        tracing::warn!(
            card_id = id,
            field = e.field().unwrap_or("-"),
            "Rejected AI content: {}",
            e
        );
        ApiError::GenerationFailed
    })?;

    let updated = store.set_ai_content(id, content)?;
    tracing::info!(card_id = id, "Stored AI content");

    Ok(updated)
}
