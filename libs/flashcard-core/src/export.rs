//! CSV export for Anki import.
//!
//! # Format
//! ```text
//! Front,Back
//! "ubiquitous","present everywhere
//! Smartphones are ubiquitous today.
//! omnipresent; pervasive"
//! ```
//! Front is the word. Back holds the definition, the example and the
//! synonyms (joined by `"; "`), one per line. Every field is quoted and
//! embedded quotes are doubled. Newlines stay raw inside quoted fields.
//! Lines are separated by `\n` with no trailing newline.

use crate::error::ExportError;
use crate::types::{AiContent, FlashcardRecord};

/// Header line naming the emitted columns.
pub const HEADER: &str = "Front,Back";

/// MIME type for the exported payload.
pub const CONTENT_TYPE: &str = "text/csv; charset=utf-8";

const DELIMITER: char = ',';
const LINE_SEPARATOR: &str = "\n";
const SYNONYM_SEPARATOR: &str = "; ";

/// Export options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    /// Emit [`HEADER`] as the first line. Without it an export with no
    /// rows is the empty string.
    pub include_header: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_header: true,
        }
    }
}

/// Renders flashcard records as CSV text.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    config: ExportConfig,
}

impl CsvExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Render `records` in order, skipping those without AI content.
    ///
    /// Fails only if a stored payload violates the AiContent invariant.
    pub fn export(&self, records: &[FlashcardRecord]) -> Result<String, ExportError> {
        let mut lines = Vec::with_capacity(records.len() + 1);
        if self.config.include_header {
            lines.push(HEADER.to_string());
        }

        for record in records {
            let Some(content) = &record.ai_content else {
                continue;
            };
            content
                .check()
                .map_err(|source| ExportError::InvalidContent {
                    id: record.id,
                    source,
                })?;
            lines.push(render_row(&record.word, content));
        }

        Ok(lines.join(LINE_SEPARATOR))
    }
}

/// Combined back-of-card text.
pub fn back_field(content: &AiContent) -> String {
    let synonyms = content.synonyms.join(SYNONYM_SEPARATOR);
    [
        content.definition.as_str(),
        content.example.as_str(),
        synonyms.as_str(),
    ]
    .join("\n")
}

/// Quote a field, doubling any embedded quotes.
pub fn escape_field(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for ch in value.chars() {
        if ch == '"' {
            escaped.push('"');
        }
        escaped.push(ch);
    }
    escaped.push('"');
    escaped
}

/// Reverse [`escape_field`]. Returns `None` if `field` is not a quoted field
/// or contains an undoubled quote.
pub fn unescape_field(field: &str) -> Option<String> {
    let inner = field.strip_prefix('"')?.strip_suffix('"')?;

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '"' && chars.next() != Some('"') {
            return None;
        }
        value.push(ch);
    }
    Some(value)
}

fn render_row(word: &str, content: &AiContent) -> String {
    format!(
        "{}{}{}",
        escape_field(word),
        DELIMITER,
        escape_field(&back_field(content))
    )
}
