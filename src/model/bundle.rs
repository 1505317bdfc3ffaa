// Artifact persistence — the vectorizer and both trained models as JSON
// files under the model directory.
//
// Layout:
//   <model_dir>/vectorizer.json
//   <model_dir>/model-logistic.json
//   <model_dir>/model-sgd.json

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::features::TfidfVectorizer;
use crate::train::metrics::ValidationMetrics;

use super::{LinearModel, ModelKind, SentimentModel};

pub const VECTORIZER_FILE: &str = "vectorizer.json";

/// One trained model plus its provenance, as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model: LinearModel,
    pub metrics: ValidationMetrics,
    pub trained_at: DateTime<Utc>,
    pub n_training_samples: usize,
}

/// The full inference bundle: one fitted vectorizer shared by both models.
#[derive(Debug)]
pub struct ModelBundle {
    pub vectorizer: TfidfVectorizer,
    pub logistic: ModelArtifact,
    pub sgd: ModelArtifact,
}

impl ModelBundle {
    /// Look up a model by kind.
    pub fn get(&self, kind: ModelKind) -> &dyn SentimentModel {
        match kind {
            ModelKind::Logistic => &self.logistic.model,
            ModelKind::Sgd => &self.sgd.model,
        }
    }

    /// The artifact metadata for a model.
    pub fn artifact(&self, kind: ModelKind) -> &ModelArtifact {
        match kind {
            ModelKind::Logistic => &self.logistic,
            ModelKind::Sgd => &self.sgd,
        }
    }

    /// Write all artifacts to the model directory, creating it if needed.
    pub fn save(&self, model_dir: &Path) -> Result<()> {
        fs::create_dir_all(model_dir).with_context(|| {
            format!("Failed to create model directory {}", model_dir.display())
        })?;

        write_json(&model_dir.join(VECTORIZER_FILE), &self.vectorizer)?;
        write_json(
            &model_dir.join(ModelKind::Logistic.artifact_name()),
            &self.logistic,
        )?;
        write_json(&model_dir.join(ModelKind::Sgd.artifact_name()), &self.sgd)?;

        info!(dir = %model_dir.display(), "Saved model artifacts");
        Ok(())
    }

    /// Load all artifacts from the model directory.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let vectorizer: TfidfVectorizer = read_json(&model_dir.join(VECTORIZER_FILE))?;
        let logistic: ModelArtifact =
            read_json(&model_dir.join(ModelKind::Logistic.artifact_name()))?;
        let sgd: ModelArtifact = read_json(&model_dir.join(ModelKind::Sgd.artifact_name()))?;

        // The vocabulary indexes into each weight vector; a length mismatch
        // means the artifacts come from different training runs.
        for artifact in [&logistic, &sgd] {
            if artifact.model.weights.len() != vectorizer.n_features() {
                anyhow::bail!(
                    "Artifact mismatch: {} has {} weights but the vectorizer has {} features.\n\
                     Re-run `litmus train` to regenerate a consistent set.",
                    artifact.model.kind.artifact_name(),
                    artifact.model.weights.len(),
                    vectorizer.n_features()
                );
            }
        }

        Ok(Self {
            vectorizer,
            logistic,
            sgd,
        })
    }

    /// Whether all three artifact files exist (without validating contents).
    pub fn artifacts_present(model_dir: &Path) -> bool {
        model_dir.join(VECTORIZER_FILE).exists()
            && ModelKind::ALL
                .iter()
                .all(|k| model_dir.join(k.artifact_name()).exists())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read {}.\nRun `litmus train` first to produce model artifacts.",
            path.display()
        )
    })?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}
