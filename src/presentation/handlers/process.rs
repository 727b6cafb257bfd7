use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};

use crate::application::ports::FileLoader;
use crate::domain::StudyMaterial;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::multipart_upload::read_upload;

pub const FILE_FIELD: &str = "file";

#[tracing::instrument(skip(state, multipart))]
pub async fn process_handler<F>(
    State(state): State<AppState<F>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<StudyMaterial>, ApiError>
where
    F: FileLoader + 'static,
{
    let file = read_upload(multipart, FILE_FIELD).await?;
    let material = state.study_service.process(&file).await?;

    tracing::info!(filename = %file.filename, "Document processed");

    Ok(Json(material))
}
