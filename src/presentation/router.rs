use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_document_handler, chat_handler, health_handler, register_handler,
};
use crate::presentation::state::AppState;

/// API routes plus static serving of the prebuilt frontend bundle at the
/// root path. CORS is wide open by design: any origin, method, header.
pub fn create_router<L>(state: AppState<L>, frontend_dir: &str) -> Router
where
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/analyze-document", post(analyze_document_handler::<L>))
        .route("/api/chat", post(chat_handler::<L>))
        .route("/api/register", post(register_handler::<L>))
        .fallback_service(ServeDir::new(frontend_dir).append_index_html_on_directories(true))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
