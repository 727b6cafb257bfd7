use bytes::Bytes;

use docquiz::domain::{DocumentKind, UploadedFile, ValidationError};

#[test]
fn given_pdf_filename_when_classifying_then_returns_pdf() {
    assert_eq!(
        DocumentKind::from_filename("lecture-01.pdf"),
        Some(DocumentKind::Pdf)
    );
}

#[test]
fn given_docx_filename_when_classifying_then_returns_docx() {
    assert_eq!(
        DocumentKind::from_filename("notes.final.docx"),
        Some(DocumentKind::Docx)
    );
}

#[test]
fn given_other_suffixes_when_classifying_then_returns_none() {
    for filename in ["notes.doc", "notes.PDF", "pdf", "notes.pdf.bak", "notes.txt"] {
        assert_eq!(DocumentKind::from_filename(filename), None, "{filename}");
    }
}

#[test]
fn given_empty_filename_when_creating_upload_then_returns_no_selected_file() {
    let result = UploadedFile::new(String::new(), Bytes::from_static(b"data"));

    assert_eq!(result.unwrap_err(), ValidationError::NoSelectedFile);
}

#[test]
fn given_unsupported_filename_when_creating_upload_then_returns_unsupported_file_type() {
    let result = UploadedFile::new("slides.pptx".to_string(), Bytes::new());

    assert_eq!(result.unwrap_err(), ValidationError::UnsupportedFileType);
}

#[test]
fn given_valid_filename_when_creating_upload_then_keeps_kind_and_bytes() {
    let upload = UploadedFile::new("notes.docx".to_string(), Bytes::from_static(b"abc")).unwrap();

    assert_eq!(upload.kind, DocumentKind::Docx);
    assert_eq!(upload.size_bytes(), 3);
}

#[test]
fn given_validation_errors_when_displayed_then_match_wire_messages() {
    assert_eq!(ValidationError::NoFilePart.to_string(), "No file part");
    assert_eq!(ValidationError::NoSelectedFile.to_string(), "No selected file");
    assert_eq!(
        ValidationError::UnsupportedFileType.to_string(),
        "Unsupported file type"
    );
}
