use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docquiz::application::services::StudyService;
use docquiz::infrastructure::llm::LlmClientFactory;
use docquiz::infrastructure::observability::{TracingConfig, init_tracing};
use docquiz::infrastructure::text_processing::DocumentLoader;
use docquiz::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(
        TracingConfig::new(environment, &settings.logging),
        settings.server.port,
    );

    let llm_client = LlmClientFactory::create(&settings.llm)?;
    let file_loader = Arc::new(DocumentLoader::new());

    let study_service = Arc::new(StudyService::new(
        file_loader,
        llm_client,
        settings.generation.strict_schema,
    ));

    let state = AppState {
        study_service,
        upload_limit_bytes: settings.server.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server.host/server.port")?;
    tracing::info!(
        %addr,
        strict_schema = settings.generation.strict_schema,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
