mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    GenerationSettings, LlmProvider, LlmSettings, LoggingSettings, ServerSettings, Settings,
    SettingsError,
};
