use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::api::{ApiScoreRequest, ApiScoreResponse};
use post_pulse::config::ScoringConfig;
use post_pulse::ScoreEngine;

#[derive(Clone)]
struct AppState {
    engine: Arc<ScoreEngine>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, _) = ScoringConfig::load(None)?;
    let engine = ScoreEngine::new(config)?;
    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/score", post(score_handler))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    info!(%addr, "post-pulse server listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn score_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiScoreRequest>,
) -> Result<Json<ApiScoreResponse>, (StatusCode, String)> {
    let text = request
        .into_text()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let score = state.engine.score(&text);
    info!(
        overall = score.overall,
        chars = text.chars().count(),
        "scored post"
    );
    Ok(Json(ApiScoreResponse::from_score(score)))
}
