use serde::Serialize;

/// Successful outcome of processing one upload.
///
/// `questions` is kept as raw JSON so that whatever the model produced is
/// returned to the client unchanged once it parses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyMaterial {
    pub summary: String,
    pub questions: serde_json::Value,
}
