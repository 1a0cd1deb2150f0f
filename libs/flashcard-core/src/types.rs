//! Core types for the vocabulary flashcard application.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// AI-generated back-of-card content.
///
/// Only values that passed [`crate::contract::validate`] are stored, so every
/// text field is non-blank and `synonyms` has at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiContent {
    pub definition: String,
    pub example: String,
    pub synonyms: Vec<String>,
    pub mnemonic: String,
}

/// A vocabulary word held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardRecord {
    pub id: i64,
    pub word: String,
    pub context: Option<String>,
    pub ai_content: Option<AiContent>,
}

impl FlashcardRecord {
    /// Whether generation has succeeded at least once.
    pub fn has_ai_content(&self) -> bool {
        self.ai_content.is_some()
    }
}

/// Payload for creating a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFlashcard {
    pub word: String,
    #[serde(default)]
    pub context: Option<String>,
}

impl NewFlashcard {
    pub fn new(word: impl Into<String>, context: Option<&str>) -> Self {
        Self {
            word: word.into(),
            context: context.map(str::to_string),
        }
    }

    /// Trim the word and drop a blank context.
    ///
    /// A blank word is rejected with `EmptyField("word")`.
    pub fn normalize(self) -> Result<Self> {
        let word = self.word.trim();
        if word.is_empty() {
            return Err(ValidationError::EmptyField("word"));
        }

        let context = self
            .context
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            word: word.to_string(),
            context,
        })
    }
}
