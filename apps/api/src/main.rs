mod appeal;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use axum::http::{header::CONTENT_TYPE, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::appeal::generator::AppealGenerator;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting appeal API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    );
    info!(
        "LLM client initialized (model: {}, base: {})",
        llm_client::MODEL,
        config.openai_base_url
    );

    let generator = Arc::new(AppealGenerator::new(
        llm,
        config.prompt_format,
        config.mode,
    ));
    info!(
        "Appeal generator initialized (mode: {:?}, format: {:?})",
        config.mode, config.prompt_format
    );

    let state = AppState { generator };

    // Any origin, POST with Content-Type only; the frontend is served elsewhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
