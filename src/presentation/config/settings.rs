use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};

use super::Environment;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub generation: GenerationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Gemini,
    Scaffold,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub model: String,
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub scaffold_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub strict_schema: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid setting: {0}")]
    Invalid(String),
}

impl Settings {
    /// Builder pre-populated with every default; further sources layer on top.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5001_i64)?
            .set_default("server.max_upload_mb", 25_i64)?
            .set_default("llm.provider", "gemini")?
            .set_default("llm.model", DEFAULT_MODEL)?
            .set_default("llm.base_url", DEFAULT_BASE_URL)?
            .set_default("llm.scaffold_delay_ms", 0_i64)?
            .set_default("generation.strict_schema", false)?
            .set_default("logging.json", false)?)
    }

    /// Defaults, then `appsettings.<environment>` if present, then `APP_*`
    /// variables (`APP_SERVER__PORT`, `APP_LLM__PROVIDER`, ...). The API key
    /// falls back to `GEMINI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let builder = Self::defaults()?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut settings = Self::from_builder(builder)?;

        if settings.llm.api_key.as_deref().is_none_or(str::is_empty) {
            settings.llm.api_key = std::env::var(API_KEY_VAR).ok();
        }

        Ok(settings)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.server.max_upload_mb == 0 {
            return Err(SettingsError::Invalid(
                "server.max_upload_mb must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
