use async_trait::async_trait;
use bytes::Bytes;
use lopdf::Document;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentKind, UploadedFile};

use super::EXTRACTION_TIMEOUT;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Concatenates the text of every page in page order, without separators.
    fn extract_pages(data: &[u8]) -> Result<String, FileLoaderError> {
        let doc = Document::load_mem(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let pages = doc.get_pages();
        let mut text = String::new();

        for page_number in pages.keys() {
            match doc.extract_text(&[*page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    tracing::warn!(page_number, error = %e, "Skipping page without readable text");
                }
            }
        }

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        Ok(text)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.filename))]
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        if file.kind != DocumentKind::Pdf {
            return Err(FileLoaderError::UnsupportedDocumentKind(
                file.kind.as_str().to_string(),
            ));
        }

        let data: Bytes = file.data.clone();

        tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&data)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
    }
}
