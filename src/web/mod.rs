// Web server — Axum backend plus a single embedded page.
//
// All /api/* routes serve JSON; the fallback serves the embedded index.html.
// Models are loaded once at startup and shared read-only across requests —
// each request is a synchronous recomputation over that state.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::feedback::FeedbackClient;
use crate::model::ModelBundle;

pub mod handlers;

// The embedded single-page UI.
static INDEX_HTML: &str = include_str!("../../static/index.html");

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub bundle: Arc<ModelBundle>,
    /// None when no feedback endpoint is configured — the handler reports
    /// the surface as unavailable rather than failing requests.
    pub feedback: Option<Arc<FeedbackClient>>,
}

/// Start the web server and block until it exits.
pub async fn run_server(config: Config, bundle: ModelBundle, port: u16, bind: &str) -> Result<()> {
    let feedback = match FeedbackClient::from_config(&config) {
        Ok(client) => Some(Arc::new(client)),
        Err(_) => {
            info!("No feedback endpoint configured — feedback submission disabled");
            None
        }
    };

    let state = AppState {
        bundle: Arc::new(bundle),
        feedback,
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Litmus listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/models", get(handlers::models::list_models))
        .route("/api/analyze", post(handlers::analyze::analyze))
        .route("/api/feedback", post(handlers::feedback::submit_feedback))
        .fallback(serve_index)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
