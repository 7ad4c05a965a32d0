pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::appeal::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Both paths were served by past deployments; keep both routable.
        .route("/generate-appeal", post(handlers::handle_generate_appeal))
        .route(
            "/api/generate-appeal",
            post(handlers::handle_generate_appeal),
        )
        .with_state(state)
}
