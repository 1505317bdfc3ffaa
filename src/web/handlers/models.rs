// GET /api/models — the model picker listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::model::ModelKind;
use crate::train::metrics::ValidationMetrics;
use crate::web::AppState;

#[derive(Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub metrics: ValidationMetrics,
    pub trained_at: String,
}

pub async fn list_models(State(state): State<AppState>) -> impl IntoResponse {
    let models: Vec<ModelInfo> = ModelKind::ALL
        .iter()
        .map(|&kind| {
            let artifact = state.bundle.artifact(kind);
            ModelInfo {
                id: kind.as_str(),
                name: kind.display_name(),
                description: kind.description(),
                metrics: artifact.metrics.clone(),
                trained_at: artifact.trained_at.to_rfc3339(),
            }
        })
        .collect();

    Json(models)
}
