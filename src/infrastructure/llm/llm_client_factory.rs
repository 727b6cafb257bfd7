use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LlmClient;
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::gemini_client::GeminiClient;
use super::scaffold_llm_client::ScaffoldLlmClient;

pub struct LlmClientFactory;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("missing API key: the Gemini provider requires GEMINI_API_KEY")]
    MissingApiKey,
}

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
        match settings.provider {
            LlmProvider::Gemini => {
                let key = settings
                    .api_key
                    .clone()
                    .filter(|k| !k.is_empty())
                    .ok_or(LlmClientFactoryError::MissingApiKey)?;
                tracing::info!(model = %settings.model, base_url = %settings.base_url, "Using Gemini generation client");
                Ok(Arc::new(GeminiClient::new(
                    &settings.base_url,
                    key,
                    settings.model.clone(),
                )))
            }
            LlmProvider::Scaffold => {
                tracing::warn!(
                    delay_ms = settings.scaffold_delay_ms,
                    "Using scaffold generation client; responses are canned"
                );
                Ok(Arc::new(ScaffoldLlmClient::new(Duration::from_millis(
                    settings.scaffold_delay_ms,
                ))))
            }
        }
    }
}
