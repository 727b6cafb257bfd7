use std::time::Duration;

mod document_loader;
mod docx_adapter;
mod pdf_adapter;

pub use document_loader::DocumentLoader;
pub use docx_adapter::DocxAdapter;
pub use pdf_adapter::PdfAdapter;

/// Upper bound on a single document parse running on the blocking pool.
const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);
