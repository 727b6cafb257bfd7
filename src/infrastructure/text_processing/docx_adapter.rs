use async_trait::async_trait;
use bytes::Bytes;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild, read_docx};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentKind, UploadedFile};

use super::EXTRACTION_TIMEOUT;

#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Every body paragraph contributes its text plus a trailing newline,
    /// empty paragraphs included. Tables and other block content are skipped.
    fn extract_paragraphs(data: &[u8]) -> Result<String, FileLoaderError> {
        let docx = read_docx(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse DOCX: {e}")))?;

        let mut text = String::new();
        let mut paragraph_count = 0usize;

        for child in &docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                push_paragraph_text(paragraph, &mut text);
                text.push('\n');
                paragraph_count += 1;
            }
        }

        tracing::info!(paragraph_count, "DOCX text extraction complete");

        Ok(text)
    }
}

fn push_paragraph_text(paragraph: &Paragraph, out: &mut String) {
    push_children_text(&paragraph.children, out);
}

/// Hyperlinks nest their own runs, so they are walked like the paragraph.
fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            _ => {}
        }
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.filename))]
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        if file.kind != DocumentKind::Docx {
            return Err(FileLoaderError::UnsupportedDocumentKind(
                file.kind.as_str().to_string(),
            ));
        }

        let data: Bytes = file.data.clone();

        // read_docx panics on some damaged zip entries.
        tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_paragraphs(&data)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("DOCX extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse DOCX: {e}")))?
    }
}
