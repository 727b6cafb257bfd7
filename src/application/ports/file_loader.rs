use async_trait::async_trait;

use crate::domain::UploadedFile;

#[async_trait]
pub trait FileLoader: Send + Sync {
    /// Returns the raw concatenated text of the upload. An empty or
    /// whitespace-only result is not an error at this layer.
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported document kind: {0}")]
    UnsupportedDocumentKind(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("Could not extract text from the document.")]
    NoTextFound(String),
}
