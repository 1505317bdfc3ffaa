// POST /api/analyze — score one review.
//
// Returns 400 for blank/numeric input, unknown model ids, or thresholds
// outside [0, 1]. Success responses carry the full analysis plus the
// rendered word-map SVG.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::{self, Analysis};
use crate::model::ModelKind;
use crate::web::{api_error, AppState};

fn default_threshold() -> f64 {
    0.5
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub model: String,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub analysis: Analysis,
    pub word_map_svg: String,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    if !(0.0..=1.0).contains(&request.threshold) {
        return api_error(
            StatusCode::BAD_REQUEST,
            "Threshold must be between 0.0 and 1.0",
        );
    }

    let kind = match ModelKind::parse(&request.model) {
        Some(kind) => kind,
        None => {
            return api_error(
                StatusCode::BAD_REQUEST,
                &format!("Unknown model \"{}\" — expected logistic or sgd", request.model),
            )
        }
    };

    match analysis::analyze(&state.bundle, kind, &request.text, request.threshold) {
        Ok(result) => {
            let word_map_svg = analysis::wordmap::render_svg(&result.word_map);
            (
                StatusCode::OK,
                Json(AnalyzeResponse {
                    analysis: result,
                    word_map_svg,
                }),
            )
                .into_response()
        }
        Err(rejection) => api_error(StatusCode::BAD_REQUEST, &rejection.to_string()),
    }
}
