use bytes::Bytes;

use docquiz::application::ports::{FileLoader, FileLoaderError};
use docquiz::domain::UploadedFile;
use docquiz::infrastructure::text_processing::PdfAdapter;

use crate::helpers::{docx_with_paragraphs, pdf_with_pages};

fn upload(filename: &str, data: Vec<u8>) -> UploadedFile {
    UploadedFile::new(filename.to_string(), Bytes::from(data)).unwrap()
}

#[tokio::test]
async fn given_valid_pdf_bytes_when_extracting_then_returns_text() {
    let adapter = PdfAdapter::new();
    let file = upload("sample.pdf", pdf_with_pages(&["Hello World"]));

    let text = adapter.extract_text(&file).await.unwrap();

    assert!(text.contains("Hello World"));
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_concatenates_pages_in_order() {
    let adapter = PdfAdapter::new();
    let file = upload("pages.pdf", pdf_with_pages(&["Alpha", "Bravo", "Charlie"]));

    let text = adapter.extract_text(&file).await.unwrap();

    // Each newline is lopdf's end-of-page text; pages are joined with nothing.
    assert_eq!(text, "Alpha\nBravo\nCharlie\n");
}

#[tokio::test]
async fn given_pdf_without_text_when_extracting_then_returns_blank_text() {
    let adapter = PdfAdapter::new();
    let file = upload("blank.pdf", pdf_with_pages(&[""]));

    let text = adapter.extract_text(&file).await.unwrap();

    assert!(text.trim().is_empty());
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let file = upload("corrupt.pdf", b"not a pdf at all".to_vec());

    let result = adapter.extract_text(&file).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_docx_upload_when_extracting_with_pdf_adapter_then_returns_unsupported() {
    let adapter = PdfAdapter::new();
    let file = upload("notes.docx", docx_with_paragraphs(&["text"]));

    let result = adapter.extract_text(&file).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedDocumentKind(_))
    ));
}
