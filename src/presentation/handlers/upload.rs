use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};

use crate::application::ports::FileLoader;
use crate::domain::StudyMaterial;
use crate::presentation::state::AppState;

use super::error::{ApiError, GatewayError};
use super::multipart_upload::read_upload;

pub const DOCUMENT_FIELD: &str = "document";

/// Same pipeline as `/api/process`, accepting the `document` field the web
/// client posts and answering errors in the client's `message` shape.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F>(
    State(state): State<AppState<F>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<StudyMaterial>, GatewayError>
where
    F: FileLoader + 'static,
{
    let file = read_upload(multipart, DOCUMENT_FIELD)
        .await
        .map_err(ApiError::from)?;
    let material = state
        .study_service
        .process(&file)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(filename = %file.filename, "Document processed");

    Ok(Json(material))
}
