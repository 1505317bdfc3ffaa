// Batch logistic regression via linfa-logistic (LBFGS).
//
// The fitted parameters are extracted into a plain LinearModel so inference
// never depends on the training crate: with binary {0, 1} labels the larger
// label is linfa's positive class, so sigmoid(w·x + b) is P(positive).

use anyhow::{Context, Result};
use linfa::prelude::*;
use linfa_logistic::LogisticRegression;
use ndarray::{Array1, Array2};
use tracing::info;

use crate::model::{LinearModel, ModelKind};

/// Fit the batch logistic model on TF-IDF features (labels: positive = 1).
pub fn fit(features: Array2<f64>, labels: Array1<usize>) -> Result<LinearModel> {
    let n_samples = features.nrows();
    let dataset = Dataset::new(features, labels);

    let fitted = LogisticRegression::default()
        .max_iterations(1000)
        .fit(&dataset)
        .context("Failed to fit logistic regression")?;

    info!(samples = n_samples, "Fitted logistic model");

    Ok(LinearModel::new(
        ModelKind::Logistic,
        fitted.params().clone(),
        fitted.intercept(),
    ))
}
