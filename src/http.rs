//! HTTP transport module for the clear-mind service
//!
//! Thin Axum glue over the cognitive pipeline: one processing route plus a
//! health probe. No auth, rate limiting, or persistence lives here; callers
//! own those concerns.

use axum::{Json, Router, extract::State, routing::get, routing::post};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::cognitive::Pipeline;
use crate::cognitive::types::{CognitiveInput, CognitiveOutput};
use crate::error::Result;

/// Shared state for the HTTP server
#[derive(Clone)]
pub struct HttpState {
    pub pipeline: Arc<Pipeline>,
}

#[derive(Debug, Deserialize)]
struct ClarifyRequest {
    text: String,
    #[serde(default)]
    privileged: bool,
}

/// Health check endpoint
async fn health_handler() -> &'static str {
    "ok"
}

/// Process one thought into the four-section summary.
async fn clarify_handler(
    State(state): State<HttpState>,
    Json(request): Json<ClarifyRequest>,
) -> Json<CognitiveOutput> {
    let request_id = Uuid::new_v4();
    let span = info_span!("clarify", %request_id);

    let output = state
        .pipeline
        .process(
            CognitiveInput { text: request.text },
            request.privileged,
        )
        .instrument(span)
        .await;

    info!(
        %request_id,
        level = ?output.load.level,
        score = output.load.score,
        "clarify complete"
    );
    Json(output)
}

pub fn router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/clarify", post(clarify_handler))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: HttpState, bind: std::net::SocketAddr) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(%bind, "clear-mind HTTP server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
