use bytes::Bytes;

/// Document formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Classifies a filename by its suffix. The match is case-sensitive, so
    /// `notes.PDF` is rejected.
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if filename.ends_with(".docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No file part")]
    NoFilePart,
    #[error("No selected file")]
    NoSelectedFile,
    #[error("Unsupported file type")]
    UnsupportedFileType,
    #[error("Failed to read multipart body: {0}")]
    MalformedMultipart(String),
}

/// A request-scoped upload that already passed filename validation.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub kind: DocumentKind,
    pub data: Bytes,
}

impl UploadedFile {
    /// Checks the filename before any bytes are read.
    pub fn validate_filename(filename: &str) -> Result<DocumentKind, ValidationError> {
        if filename.is_empty() {
            return Err(ValidationError::NoSelectedFile);
        }

        DocumentKind::from_filename(filename).ok_or(ValidationError::UnsupportedFileType)
    }

    pub fn new(filename: String, data: Bytes) -> Result<Self, ValidationError> {
        let kind = Self::validate_filename(&filename)?;
        Ok(Self {
            filename,
            kind,
            data,
        })
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
