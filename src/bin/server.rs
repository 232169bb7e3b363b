//! Patio Engine HTTP Server
//!
//! Thin request-handler host around the pure pipeline: every request is an
//! independent invocation, nothing is shared between calls.

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use patio_engine::prelude::*;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct LayoutRequest {
    config: Configuration,
    /// Optional part-kind filter (canonical kebab-case names)
    #[serde(default)]
    kinds: Vec<String>,
}

#[derive(Debug, Serialize)]
struct LayoutResponse {
    config: Configuration,
    layout: DerivedLayout,
    parts: Vec<Part>,
    summary: LayoutSummary,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn layout(Json(request): Json<LayoutRequest>) -> impl IntoResponse {
    let kinds: Result<Vec<PartKind>, EngineError> = request
        .kinds
        .iter()
        .map(|name| name.parse::<PartKind>())
        .collect();

    let kinds = match kinds {
        Ok(kinds) => kinds,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response();
        }
    };

    let output = Pipeline::run(&request.config);
    let summary = LayoutSummary::from_output(&output);

    let parts = if kinds.is_empty() {
        output.parts
    } else {
        output
            .parts
            .into_iter()
            .filter(|p| kinds.contains(&p.kind()))
            .collect()
    };

    Json(LayoutResponse {
        config: output.config,
        layout: output.layout,
        parts,
        summary,
    })
    .into_response()
}

async fn summary(Json(config): Json<Configuration>) -> impl IntoResponse {
    let output = Pipeline::run(&config);
    Json(LayoutSummary::from_output(&output))
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/layout", post(layout))
        .route("/api/v1/summary", post(summary))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8087));
    println!("Patio Engine Server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  Layout:       POST /api/v1/layout");
    println!("  Summary:      POST /api/v1/summary");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
