use crate::domain::{QuestionSet, SchemaViolation};

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("question set does not match the expected schema: {0}")]
    Schema(String),
}

impl From<SchemaViolation> for FormatError {
    fn from(violation: SchemaViolation) -> Self {
        FormatError::Schema(violation.to_string())
    }
}

/// Removes every markdown fence marker the model may wrap JSON in.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parses the question-generation completion.
///
/// With `strict` unset any well-formed JSON is accepted as is. With `strict`
/// set the payload must also deserialize into a [`QuestionSet`] that passes
/// [`QuestionSet::validate`]; the original JSON value is still what is
/// returned.
pub fn parse_question_set(raw: &str, strict: bool) -> Result<serde_json::Value, FormatError> {
    let cleaned = strip_code_fences(raw);
    let value: serde_json::Value = serde_json::from_str(&cleaned)?;

    if strict {
        let typed: QuestionSet = serde_json::from_value(value.clone())
            .map_err(|e| FormatError::Schema(e.to_string()))?;
        typed.validate()?;
    }

    Ok(value)
}
