//! Flashcard endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::generation::generate_content;
use crate::AppState;

/// GET /api/flashcards
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<FlashcardRecord>>> {
    let cards = state.store.list()?;
    Ok(Json(cards))
}

/// POST /api/flashcards
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewFlashcard>, JsonRejection>,
) -> Result<Json<FlashcardRecord>> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::BadRequest(format!("Invalid flashcard data: {}", rejection.body_text()))
    })?;

    let card = payload
        .normalize()
        .map_err(|e| ApiError::BadRequest(format!("Invalid flashcard data: {}", e)))?;

    let created = state.store.create(card)?;
    tracing::info!(card_id = created.id, "Created flashcard");

    Ok(Json(created))
}

/// POST /api/flashcards/:id/generate
pub async fn generate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FlashcardRecord>> {
    let updated = generate_content(state.store.as_ref(), state.ai.as_ref(), id).await?;
    Ok(Json(updated))
}

/// DELETE /api/flashcards
pub async fn delete_all(State(state): State<AppState>) -> Result<Json<DeleteAllResponse>> {
    state.store.delete_all()?;
    tracing::info!("Deleted all flashcards");

    Ok(Json(DeleteAllResponse {
        message: "All flashcards deleted".to_string(),
    }))
}

/// DELETE /api/flashcards/:id
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    state.store.delete_one(id)?;
    tracing::info!(card_id = id, "Deleted flashcard");

    Ok(Json(DeleteResponse { deleted: id }))
}
