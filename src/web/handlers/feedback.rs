// POST /api/feedback — forward user feedback to the configured form
// endpoint.
//
// Returns 503 when no endpoint is configured, 502 when the upstream
// rejects the submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::warn;

use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub session: String,
    pub log: String,
    pub feedback: String,
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Response {
    let Some(client) = &state.feedback else {
        return api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Feedback submission is not configured on this server",
        );
    };

    match client
        .submit(&request.session, &request.log, &request.feedback)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Feedback submitted" })),
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "Feedback submission failed");
            api_error(StatusCode::BAD_GATEWAY, &format!("Failed to submit feedback: {e}"))
        }
    }
}
