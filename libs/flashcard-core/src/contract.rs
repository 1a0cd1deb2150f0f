//! Contract between the application and the AI content provider.
//!
//! The provider is asked for a JSON object of the form:
//! ```json
//! {
//!   "definition": "clear and concise definition",
//!   "example": "natural example sentence",
//!   "synonyms": ["synonym1", "synonym2"],
//!   "mnemonic": "memorable learning tip"
//! }
//! ```
//! Anything else is rejected before it reaches the store.

use serde_json::{Map, Value};

use crate::error::{Result, ValidationError};
use crate::types::AiContent;

/// System message sent once per generation call.
pub const SYSTEM_INSTRUCTIONS: &str = "You are a helpful language tutor. \
Generate flashcard content for English vocabulary learning: a clear definition, \
a natural example sentence that demonstrates usage, relevant synonyms, and a \
memorable mnemonic device. Respond with a single JSON object and nothing else, \
using exactly this structure:\n\
{\n  \"definition\": \"clear and concise definition\",\n  \
\"example\": \"natural example sentence\",\n  \
\"synonyms\": [\"synonym1\", \"synonym2\", \"synonym3\"],\n  \
\"mnemonic\": \"memorable learning tip or mnemonic device\"\n}";

const PROMPT_CHECKLIST: &str = "Provide a response that includes:\n\
1. A clear and concise definition that's easy to understand\n\
2. A natural example sentence that shows how the word is used in context\n\
3. 2-3 relevant synonyms that help understand the word's meaning\n\
4. A memorable mnemonic device or learning tip to help remember the word";

/// Build the user prompt for one word.
///
/// The context line is only emitted for a non-blank context.
pub fn build_prompt(word: &str, context: Option<&str>) -> String {
    let mut prompt = format!("Generate flashcard content for the word: \"{}\"", word);

    if let Some(context) = context.map(str::trim).filter(|c| !c.is_empty()) {
        prompt.push_str(&format!(
            "\nContext where the word was encountered: \"{}\"",
            context
        ));
    }

    prompt.push_str("\n\n");
    prompt.push_str(PROMPT_CHECKLIST);
    prompt
}

/// Parse raw provider text and validate it.
pub fn parse_response(raw: &str) -> Result<AiContent> {
    let value: Value =
        serde_json::from_str(raw.trim()).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    validate(&value)
}

/// Check a candidate payload against the AiContent shape.
///
/// Fields are checked in order and the first failure is returned. Values are
/// never coerced; unknown keys are ignored.
pub fn validate(candidate: &Value) -> Result<AiContent> {
    let obj = candidate.as_object().ok_or(ValidationError::NotAnObject)?;

    let definition = required_text(obj, "definition")?;
    let example = required_text(obj, "example")?;
    let synonyms = required_synonyms(obj)?;
    let mnemonic = required_text(obj, "mnemonic")?;

    Ok(AiContent {
        definition,
        example,
        synonyms,
        mnemonic,
    })
}

impl AiContent {
    /// Re-check an already typed value against the same rules as [`validate`].
    pub fn check(&self) -> Result<()> {
        check_text("definition", &self.definition)?;
        check_text("example", &self.example)?;
        if self.synonyms.is_empty() {
            return Err(ValidationError::NoSynonyms);
        }
        if let Some(index) = self.synonyms.iter().position(|s| is_blank(s)) {
            return Err(ValidationError::InvalidSynonym { index });
        }
        check_text("mnemonic", &self.mnemonic)
    }
}

fn required_text(obj: &Map<String, Value>, field: &'static str) -> Result<String> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) => {
            check_text(field, s)?;
            Ok(s.clone())
        }
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn required_synonyms(obj: &Map<String, Value>) -> Result<Vec<String>> {
    let items = match obj.get("synonyms") {
        None | Some(Value::Null) => return Err(ValidationError::MissingField("synonyms")),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ValidationError::WrongType {
                field: "synonyms",
                expected: "an array of strings",
            })
        }
    };

    if items.is_empty() {
        return Err(ValidationError::NoSynonyms);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item.as_str() {
            Some(s) if !is_blank(s) => Ok(s.to_string()),
            _ => Err(ValidationError::InvalidSynonym { index }),
        })
        .collect()
}

fn check_text(field: &'static str, value: &str) -> Result<()> {
    if is_blank(value) {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
