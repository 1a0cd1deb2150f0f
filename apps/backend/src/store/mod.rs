//! Record store abstraction.
//!
//! Handlers talk to the store through [`FlashcardStore`] so the core logic
//! can be exercised without a live backend.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::{AiContent, FlashcardRecord, NewFlashcard};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Flashcard {0} not found")]
    NotFound(i64),

    #[error("Record store unavailable")]
    Unavailable,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Key-value store of flashcard records.
///
/// Implementations serialize conflicting writes; the last write for an id wins.
pub trait FlashcardStore: Send + Sync {
    /// All records ordered by id.
    fn list(&self) -> StoreResult<Vec<FlashcardRecord>>;

    fn get(&self, id: i64) -> StoreResult<FlashcardRecord>;

    /// Insert a record with the next id and no AI content.
    fn create(&self, card: NewFlashcard) -> StoreResult<FlashcardRecord>;

    /// Replace the AI content of a record wholesale.
    fn set_ai_content(&self, id: i64, content: AiContent) -> StoreResult<FlashcardRecord>;

    fn delete_all(&self) -> StoreResult<()>;

    fn delete_one(&self, id: i64) -> StoreResult<()>;
}
