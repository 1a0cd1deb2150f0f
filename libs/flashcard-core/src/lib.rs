//! Core vocabulary flashcard library used by the backend.
//!
//! Provides:
//! - Shared types (FlashcardRecord, AiContent, NewFlashcard)
//! - The AI content contract (prompt building and response validation)
//! - CSV export for Anki import

pub mod contract;
pub mod error;
pub mod export;
pub mod types;

pub use contract::{build_prompt, parse_response, validate, SYSTEM_INSTRUCTIONS};
pub use error::{ExportError, Result, ValidationError};
pub use export::{escape_field, CsvExporter, ExportConfig};
pub use types::{AiContent, FlashcardRecord, NewFlashcard};
