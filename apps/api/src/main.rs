mod config;
mod document;
mod errors;
mod llm_client;
mod routes;
mod screening;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::PdfTextReader;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::screening::evaluation::LlmEvaluator;
use crate::screening::extractor::FieldExtractor;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener v{}", env!("CARGO_PKG_VERSION"));

    let extractor = FieldExtractor::new(config.locale)?;
    info!("Field extractor initialized (locale: {})", config.locale.code());

    let llm = LlmClient::new(config.openai_api_url.clone(), config.openai_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(extractor),
        document_reader: Arc::new(PdfTextReader),
        evaluator: Arc::new(LlmEvaluator(llm)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
