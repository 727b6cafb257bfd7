use axum::extract::Multipart;
use axum::extract::multipart::MultipartRejection;

use crate::domain::{UploadedFile, ValidationError};

/// Pulls the first file part named `field_name` out of the request.
///
/// A body that is not multipart at all, or whose matching part carries no
/// filename, is treated as having no file part.
pub(crate) async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
    field_name: &str,
) -> Result<UploadedFile, ValidationError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Request body is not multipart");
        ValidationError::NoFilePart
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ValidationError::MalformedMultipart(e.body_text()))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        UploadedFile::validate_filename(&filename)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ValidationError::MalformedMultipart(e.body_text()))?;

        tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

        return UploadedFile::new(filename, data);
    }

    Err(ValidationError::NoFilePart)
}
