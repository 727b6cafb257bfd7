use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentKind, UploadedFile};

use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;

/// Routes an upload to the adapter for its [`DocumentKind`].
#[derive(Default)]
pub struct DocumentLoader {
    pdf: PdfAdapter,
    docx: DocxAdapter,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileLoader for DocumentLoader {
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        match file.kind {
            DocumentKind::Pdf => self.pdf.extract_text(file).await,
            DocumentKind::Docx => self.docx.extract_text(file).await,
        }
    }
}
