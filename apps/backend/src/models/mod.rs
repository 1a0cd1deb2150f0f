//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from flashcard-core
pub use flashcard_core::types::{AiContent, FlashcardRecord, NewFlashcard};

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteAllResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: i64,
}
