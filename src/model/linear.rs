// Linear sentiment model: weight vector + intercept + sigmoid.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::{ModelKind, Sentiment, SentimentModel};

/// Logistic sigmoid.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// A trained linear classifier over TF-IDF features.
///
/// The weight at index i belongs to the vectorizer's term at index i — the
/// vocabulary indexes directly into this weight vector, which is what makes
/// word-level attribution a single elementwise product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub kind: ModelKind,
    pub weights: Array1<f64>,
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(kind: ModelKind, weights: Array1<f64>, intercept: f64) -> Self {
        Self {
            kind,
            weights,
            intercept,
        }
    }

    /// Raw decision value (distance from the separating hyperplane).
    pub fn decision(&self, features: &Array1<f64>) -> f64 {
        self.weights.dot(features) + self.intercept
    }
}

impl SentimentModel for LinearModel {
    fn kind(&self) -> ModelKind {
        self.kind
    }

    fn positive_probability(&self, features: &Array1<f64>) -> Option<f64> {
        Some(sigmoid(self.decision(features)))
    }

    fn predict(&self, features: &Array1<f64>) -> Sentiment {
        if self.decision(features) >= 0.0 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    fn coefficients(&self) -> Option<&Array1<f64>> {
        Some(&self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn model() -> LinearModel {
        LinearModel::new(ModelKind::Logistic, array![2.0, -3.0, 0.5], -0.1)
    }

    #[test]
    fn sigmoid_is_a_probability() {
        for z in [-50.0, -1.0, 0.0, 1.0, 50.0] {
            let p = sigmoid(z);
            assert!((0.0..=1.0).contains(&p), "sigmoid({z}) = {p}");
        }
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn probability_and_label_agree_at_default_boundary() {
        let m = model();
        let x = array![0.9, 0.0, 0.1];
        let p = m.positive_probability(&x).unwrap();
        assert!(p > 0.5);
        assert_eq!(m.predict(&x), Sentiment::Positive);

        let y = array![0.0, 0.8, 0.0];
        let q = m.positive_probability(&y).unwrap();
        assert!(q < 0.5);
        assert_eq!(m.predict(&y), Sentiment::Negative);
    }

    #[test]
    fn complement_symmetry() {
        let m = model();
        let x = array![0.3, 0.2, 0.4];
        let p = m.positive_probability(&x).unwrap();
        let flipped = LinearModel::new(m.kind, m.weights.mapv(|w| -w), -m.intercept);
        let q = flipped.positive_probability(&x).unwrap();
        assert!((p + q - 1.0).abs() < 1e-12);
    }
}
