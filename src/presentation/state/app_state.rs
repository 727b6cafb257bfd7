use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::application::services::StudyService;

pub struct AppState<F>
where
    F: FileLoader,
{
    pub study_service: Arc<StudyService<F>>,
    pub upload_limit_bytes: usize,
}

impl<F> Clone for AppState<F>
where
    F: FileLoader,
{
    fn clone(&self) -> Self {
        Self {
            study_service: Arc::clone(&self.study_service),
            upload_limit_bytes: self.upload_limit_bytes,
        }
    }
}
