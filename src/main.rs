use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use qonun::application::services::{AnalysisService, RegistrationService};
use qonun::infrastructure::llm::GeminiClient;
use qonun::infrastructure::observability::{init_tracing, TracingConfig};
use qonun::infrastructure::persistence::{create_pool, PgUserRepository};
use qonun::infrastructure::text_processing::CompositeFileLoader;
use qonun::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    PgUserRepository::ensure_schema(&pool).await?;

    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let llm_client = Arc::new(GeminiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
    ));

    let analysis_service = Arc::new(AnalysisService::new(file_loader, llm_client));
    let registration_service = Arc::new(RegistrationService::new(Arc::new(
        PgUserRepository::new(pool),
    )));

    let state = AppState {
        analysis_service,
        registration_service,
    };

    let router = create_router(state, &settings.frontend.dir);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
