//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reasons a candidate AI payload is rejected.
///
/// Each variant that concerns a single field names it, so callers can log
/// the first field that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed JSON: {0}")]
    Malformed(String),

    #[error("expected a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("field `synonyms` must contain at least one entry")]
    NoSynonyms,

    #[error("synonym at index {index} must be a non-empty string")]
    InvalidSynonym { index: usize },
}

impl ValidationError {
    /// Name of the offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(field) | Self::EmptyField(field) => Some(*field),
            Self::WrongType { field, .. } => Some(*field),
            Self::NoSynonyms | Self::InvalidSynonym { .. } => Some("synonyms"),
            Self::Malformed(_) | Self::NotAnObject => None,
        }
    }
}

/// Errors that can occur while rendering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("flashcard {id} holds invalid AI content: {source}")]
    InvalidContent {
        id: i64,
        #[source]
        source: ValidationError,
    },
}
