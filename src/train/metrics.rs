// Held-out evaluation for the binary sentiment task.

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::model::SentimentModel;

/// Metrics computed on the held-out split at training time and stored in
/// each model artifact. Precision/recall/F1 treat "positive" as the target
/// class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub n_samples: usize,
}

/// Evaluate a model on a feature matrix and its labels (positive = 1).
pub fn evaluate(
    model: &dyn SentimentModel,
    features: &Array2<f64>,
    labels: ArrayView1<usize>,
) -> ValidationMetrics {
    let mut correct = 0usize;
    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut fn_count = 0usize;

    for (row, &label) in features.outer_iter().zip(labels.iter()) {
        let predicted = model.predict(&row.to_owned()).class_index();
        if predicted == label {
            correct += 1;
        }
        match (predicted, label) {
            (1, 1) => tp += 1,
            (1, 0) => fp += 1,
            (0, 1) => fn_count += 1,
            _ => {}
        }
    }

    let n = labels.len();
    let accuracy = if n > 0 { correct as f64 / n as f64 } else { 0.0 };
    let precision = if tp + fp > 0 {
        tp as f64 / (tp + fp) as f64
    } else {
        0.0
    };
    let recall = if tp + fn_count > 0 {
        tp as f64 / (tp + fn_count) as f64
    } else {
        0.0
    };
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    ValidationMetrics {
        accuracy,
        precision,
        recall,
        f1,
        n_samples: n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinearModel, ModelKind};
    use ndarray::{array, Array1};

    #[test]
    fn perfect_separation_scores_one() {
        // Weight on feature 0 pushes positive, feature 1 pushes negative.
        let model = LinearModel::new(ModelKind::Logistic, array![5.0, -5.0], 0.0);
        let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 1.0]];
        let y = Array1::from(vec![1usize, 0, 1, 0]);
        let m = evaluate(&model, &x, y.view());
        assert_eq!(m.n_samples, 4);
        assert!((m.accuracy - 1.0).abs() < 1e-12);
        assert!((m.f1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_all_negative_predictions() {
        let model = LinearModel::new(ModelKind::Sgd, array![0.0, 0.0], -1.0);
        let x = array![[1.0, 0.0], [0.0, 1.0]];
        let y = Array1::from(vec![1usize, 0]);
        let m = evaluate(&model, &x, y.view());
        assert!((m.accuracy - 0.5).abs() < 1e-12);
        assert_eq!(m.precision, 0.0);
        assert_eq!(m.recall, 0.0);
        assert_eq!(m.f1, 0.0);
    }
}
