use bytes::Bytes;

use docquiz::application::ports::FileLoader;
use docquiz::domain::UploadedFile;
use docquiz::infrastructure::text_processing::DocumentLoader;

use crate::helpers::{docx_with_paragraphs, pdf_with_pages};

#[tokio::test]
async fn given_pdf_upload_when_loading_then_delegates_to_pdf_adapter() {
    let loader = DocumentLoader::new();
    let file = UploadedFile::new(
        "lecture.pdf".to_string(),
        Bytes::from(pdf_with_pages(&["Osmosis"])),
    )
    .unwrap();

    let text = loader.extract_text(&file).await.unwrap();

    assert!(text.contains("Osmosis"));
}

#[tokio::test]
async fn given_docx_upload_when_loading_then_delegates_to_docx_adapter() {
    let loader = DocumentLoader::new();
    let file = UploadedFile::new(
        "lecture.docx".to_string(),
        Bytes::from(docx_with_paragraphs(&["Osmosis", "Diffusion"])),
    )
    .unwrap();

    let text = loader.extract_text(&file).await.unwrap();

    assert_eq!(text, "Osmosis\nDiffusion\n");
}
