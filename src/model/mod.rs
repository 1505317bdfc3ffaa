// Model abstractions — the swap-ready seam between analysis and the
// concrete classifiers.
//
// Both shipped models are linear at inference time (they differ only in how
// they were trained), but the analysis layer talks to them through the
// SentimentModel trait so a future model without calibrated probabilities or
// without interpretable coefficients degrades gracefully instead of breaking
// the request path.

pub mod bundle;
pub mod linear;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

pub use bundle::ModelBundle;
pub use linear::LinearModel;

/// The two shipped classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// LBFGS-fitted logistic regression — the steady, interpretable default.
    Logistic,
    /// SGD-fitted logistic loss — the fast, incremental alternative.
    Sgd,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::Logistic, ModelKind::Sgd];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Logistic => "logistic",
            ModelKind::Sgd => "sgd",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelKind::Logistic => "Logistic",
            ModelKind::Sgd => "SGD",
        }
    }

    /// Short blurb surfaced in the model picker.
    pub fn description(&self) -> &'static str {
        match self {
            ModelKind::Logistic => {
                "Batch-fitted logistic regression. Balanced and interpretable — \
                 a good default for reviews and feedback."
            }
            ModelKind::Sgd => {
                "Stochastically-fitted logistic loss. Trains incrementally and \
                 suits fast-moving text like chat or social posts."
            }
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "logistic" => Some(ModelKind::Logistic),
            "sgd" => Some(ModelKind::Sgd),
            _ => None,
        }
    }

    /// Artifact filename for this model within the model directory.
    pub fn artifact_name(&self) -> String {
        format!("model-{}.json", self.as_str())
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Binary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }

    /// The class index used in training labels (positive = 1).
    pub fn class_index(&self) -> usize {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Negative => 0,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for sentiment classifiers over TF-IDF feature vectors.
pub trait SentimentModel: Send + Sync {
    fn kind(&self) -> ModelKind;

    /// Probability that the input is positive, if the model is calibrated.
    /// Returns None for models without probability estimates — callers fall
    /// back to `predict` with a fixed confidence.
    fn positive_probability(&self, features: &Array1<f64>) -> Option<f64>;

    /// Hard label at the model's own decision boundary (no threshold).
    fn predict(&self, features: &Array1<f64>) -> Sentiment;

    /// Per-feature weights for attribution, if the model is interpretable.
    fn coefficients(&self) -> Option<&Array1<f64>>;
}
