pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use flashcard_core::CsvExporter;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::ai::{AiProvider, OpenAiClient};
use crate::store::{FlashcardStore, MemoryStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FlashcardStore>,
    pub ai: Arc<dyn AiProvider>,
    pub exporter: CsvExporter,
    pub timestamped_filename: bool,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    if config.openai.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set, generation requests will fail");
    }

    let ai = OpenAiClient::new(&config.openai);
    tracing::info!("Using AI model {}", ai.model());

    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        ai: Arc::new(ai),
        exporter: CsvExporter::new(config.export),
        timestamped_filename: config.timestamped_filename,
    };

    let app = router(state);
    let addr = config.listen_addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/flashcards",
            get(routes::flashcards::list)
                .post(routes::flashcards::create)
                .delete(routes::flashcards::delete_all),
        )
        .route(
            "/api/flashcards/:id",
            delete(routes::flashcards::delete_one),
        )
        .route(
            "/api/flashcards/:id/generate",
            post(routes::flashcards::generate),
        )
        .route("/api/export", get(routes::export::download))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
