// Stochastic gradient descent on the logistic loss with L2 penalty.
//
// One sample per step, reshuffled every epoch with a seeded RNG so training
// runs are reproducible. The learning rate decays with an inverse schedule
// (eta_t = eta0 / (1 + eta0 * alpha * t)); training stops early once the
// epoch loss stops improving.

use indicatif::{ProgressBar, ProgressStyle};
use ndarray::{Array1, Array2};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::model::linear::sigmoid;
use crate::model::{LinearModel, ModelKind};

/// SGD hyperparameters. Defaults mirror a standard log-loss configuration:
/// L2 strength 1e-4, up to 1000 epochs, tolerance 1e-3 with patience 5.
pub struct SgdOptions {
    pub max_epochs: usize,
    pub alpha: f64,
    pub eta0: f64,
    pub tol: f64,
    pub patience: usize,
    pub seed: u64,
}

impl Default for SgdOptions {
    fn default() -> Self {
        Self {
            max_epochs: 1000,
            alpha: 1e-4,
            eta0: 0.1,
            tol: 1e-3,
            patience: 5,
            seed: 42,
        }
    }
}

/// Fit the SGD model on TF-IDF features (labels: positive = 1).
pub fn fit(features: &Array2<f64>, labels: &Array1<usize>, opts: &SgdOptions) -> LinearModel {
    let n_samples = features.nrows();
    let n_features = features.ncols();

    let mut weights = Array1::<f64>::zeros(n_features);
    let mut intercept = 0.0f64;

    let mut rng = ChaCha8Rng::seed_from_u64(opts.seed);
    let mut indices: Vec<usize> = (0..n_samples).collect();

    let pb = ProgressBar::new(opts.max_epochs as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  SGD epochs [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut step = 0u64;
    let mut best_loss = f64::INFINITY;
    let mut stalled = 0usize;

    for epoch in 0..opts.max_epochs {
        indices.shuffle(&mut rng);
        let mut epoch_loss = 0.0;

        for &i in &indices {
            let row = features.row(i);
            let y = labels[i] as f64;

            let p = sigmoid(weights.dot(&row) + intercept);
            let error = p - y;

            let eta = opts.eta0 / (1.0 + opts.eta0 * opts.alpha * step as f64);

            // L2 shrinkage then gradient step.
            weights.mapv_inplace(|w| w * (1.0 - eta * opts.alpha));
            weights.scaled_add(-eta * error, &row);
            intercept -= eta * error;

            let clamped = p.clamp(1e-12, 1.0 - 1e-12);
            epoch_loss -= y * clamped.ln() + (1.0 - y) * (1.0 - clamped).ln();
            step += 1;
        }

        let mean_loss = epoch_loss / n_samples.max(1) as f64;
        pb.inc(1);

        if best_loss - mean_loss < opts.tol {
            stalled += 1;
            if stalled >= opts.patience {
                debug!(epoch, mean_loss, "SGD converged early");
                break;
            }
        } else {
            stalled = 0;
        }
        best_loss = best_loss.min(mean_loss);
    }

    pb.finish_and_clear();
    info!(samples = n_samples, "Fitted SGD model");

    LinearModel::new(ModelKind::Sgd, weights, intercept)
}
