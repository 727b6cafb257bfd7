use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::domain::{StudyMaterial, UploadedFile};

use super::prompt_builder::{question_prompt, summary_prompt};
use super::response_parser::{FormatError, parse_question_set};

/// Runs one upload through extract → summarize → generate questions → parse.
///
/// Every stage short-circuits on failure; a summary that was already
/// generated is dropped when a later stage fails.
pub struct StudyService<F>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
    llm_client: Arc<dyn LlmClient>,
    strict_schema: bool,
}

impl<F> StudyService<F>
where
    F: FileLoader,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<dyn LlmClient>, strict_schema: bool) -> Self {
        Self {
            file_loader,
            llm_client,
            strict_schema,
        }
    }

    #[tracing::instrument(
        skip(self, file),
        fields(
            filename = %file.filename,
            kind = file.kind.as_str(),
            size_bytes = file.size_bytes(),
        )
    )]
    pub async fn process(&self, file: &UploadedFile) -> Result<StudyMaterial, ProcessingError> {
        let text = self.file_loader.extract_text(file).await?;

        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound(file.filename.clone()).into());
        }

        tracing::debug!(chars = text.chars().count(), "Text extracted");

        let summary = self
            .llm_client
            .complete(&summary_prompt(&text))
            .await
            .map_err(ProcessingError::Upstream)?;

        tracing::debug!(chars = summary.chars().count(), "Summary generated");

        let raw_questions = self
            .llm_client
            .complete(&question_prompt(&text))
            .await
            .map_err(ProcessingError::Upstream)?;

        tracing::debug!(chars = raw_questions.chars().count(), "Questions generated");

        let questions = parse_question_set(&raw_questions, self.strict_schema)?;

        Ok(StudyMaterial { summary, questions })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Extraction(#[from] FileLoaderError),
    #[error(transparent)]
    Upstream(LlmClientError),
    #[error(transparent)]
    Format(#[from] FormatError),
}
