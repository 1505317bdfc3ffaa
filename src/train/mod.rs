// Training pipeline: CSV corpus → cleaning → TF-IDF → two linear models.
//
// `run` is the whole `litmus train` command: it loads and cleans the labeled
// reviews, makes a seeded 80/20 split, fits the shared vectorizer on the
// training half, fits both classifiers, evaluates them on the held-out half,
// and persists everything as JSON artifacts.

pub mod logistic;
pub mod metrics;
pub mod sgd;

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use ndarray::{Array1, Array2};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use tracing::{info, warn};

use crate::features::TfidfVectorizer;
use crate::model::bundle::{ModelArtifact, ModelBundle};
use crate::model::ModelKind;
use crate::text;

use self::metrics::ValidationMetrics;

/// A labeled review corpus, cleaned and ready for vectorization.
/// Labels: positive = 1, negative = 0.
pub struct ReviewDataset {
    pub reviews: Vec<String>,
    pub labels: Vec<usize>,
}

#[derive(Deserialize)]
struct CsvRow {
    review: String,
    sentiment: String,
}

impl ReviewDataset {
    /// Load a CSV with `review` and `sentiment` columns. Sentiment values
    /// must be "positive" or "negative"; cleaning is applied once here.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open dataset {}", path.display()))?;

        let mut reviews = Vec::new();
        let mut labels = Vec::new();

        for (line, record) in reader.deserialize().enumerate() {
            let row: CsvRow = record.with_context(|| {
                format!("Malformed row {} in {}", line + 2, path.display())
            })?;

            let label = match row.sentiment.trim().to_ascii_lowercase().as_str() {
                "positive" => 1,
                "negative" => 0,
                other => bail!(
                    "Unknown sentiment label \"{other}\" at row {} — expected positive/negative",
                    line + 2
                ),
            };

            reviews.push(text::clean(&row.review));
            labels.push(label);
        }

        if reviews.is_empty() {
            bail!("Dataset {} contains no rows", path.display());
        }

        info!(rows = reviews.len(), "Loaded review dataset");
        Ok(Self { reviews, labels })
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Seeded shuffle-split into (train, test).
    pub fn split(&self, test_ratio: f64, seed: u64) -> (ReviewDataset, ReviewDataset) {
        let mut indices: Vec<usize> = (0..self.len()).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let n_test = ((self.len() as f64) * test_ratio).round() as usize;
        let (test_idx, train_idx) = indices.split_at(n_test.min(self.len()));

        let take = |idx: &[usize]| ReviewDataset {
            reviews: idx.iter().map(|&i| self.reviews[i].clone()).collect(),
            labels: idx.iter().map(|&i| self.labels[i]).collect(),
        };

        (take(train_idx), take(test_idx))
    }
}

/// Settings for one training run.
pub struct TrainOptions {
    pub max_features: usize,
    pub test_ratio: f64,
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            max_features: crate::features::tfidf::DEFAULT_MAX_FEATURES,
            test_ratio: 0.2,
            seed: 42,
        }
    }
}

/// Summary of a completed training run, for terminal display.
pub struct TrainReport {
    pub n_train: usize,
    pub n_test: usize,
    pub n_features: usize,
    pub logistic: ValidationMetrics,
    pub sgd: ValidationMetrics,
}

/// Run the full training pipeline and persist the artifacts.
pub fn run(data_path: &Path, model_dir: &Path, opts: &TrainOptions) -> Result<TrainReport> {
    let dataset = ReviewDataset::load_csv(data_path)?;
    let (train, test) = dataset.split(opts.test_ratio, opts.seed);

    if train.is_empty() || test.is_empty() {
        bail!(
            "Dataset too small to split: {} rows at test ratio {}",
            dataset.len(),
            opts.test_ratio
        );
    }

    let vectorizer = TfidfVectorizer::fit(&train.reviews, opts.max_features)?;

    let x_train = vectorize_all(&vectorizer, &train.reviews);
    let y_train = Array1::from(train.labels.clone());
    let x_test = vectorize_all(&vectorizer, &test.reviews);
    let y_test = Array1::from(test.labels.clone());

    info!(
        train = train.len(),
        test = test.len(),
        features = vectorizer.n_features(),
        "Training both models"
    );

    let logistic_model = logistic::fit(x_train.clone(), y_train.clone())?;
    let sgd_model = sgd::fit(&x_train, &y_train, &sgd::SgdOptions::default());

    let logistic_metrics = metrics::evaluate(&logistic_model, &x_test, y_test.view());
    let sgd_metrics = metrics::evaluate(&sgd_model, &x_test, y_test.view());

    for (kind, m) in [
        (ModelKind::Logistic, &logistic_metrics),
        (ModelKind::Sgd, &sgd_metrics),
    ] {
        if m.accuracy < 0.5 {
            warn!(
                model = kind.as_str(),
                accuracy = m.accuracy,
                "Held-out accuracy below chance — check the dataset labels"
            );
        }
    }

    let trained_at = Utc::now();
    let bundle = ModelBundle {
        vectorizer,
        logistic: ModelArtifact {
            model: logistic_model,
            metrics: logistic_metrics.clone(),
            trained_at,
            n_training_samples: train.len(),
        },
        sgd: ModelArtifact {
            model: sgd_model,
            metrics: sgd_metrics.clone(),
            trained_at,
            n_training_samples: train.len(),
        },
    };

    bundle.save(model_dir)?;

    Ok(TrainReport {
        n_train: train.len(),
        n_test: test.len(),
        n_features: bundle.vectorizer.n_features(),
        logistic: logistic_metrics,
        sgd: sgd_metrics,
    })
}

/// Transform a cleaned corpus into a dense feature matrix, row per document.
pub fn vectorize_all(vectorizer: &TfidfVectorizer, documents: &[String]) -> Array2<f64> {
    let mut matrix = Array2::<f64>::zeros((documents.len(), vectorizer.n_features()));
    for (i, doc) in documents.iter().enumerate() {
        matrix.row_mut(i).assign(&vectorizer.transform(doc));
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> ReviewDataset {
        ReviewDataset {
            reviews: (0..10).map(|i| format!("review number {i}")).collect(),
            labels: (0..10).map(|i| i % 2).collect(),
        }
    }

    #[test]
    fn split_is_disjoint_and_complete() {
        let ds = dataset();
        let (train, test) = ds.split(0.2, 42);
        assert_eq!(train.len() + test.len(), ds.len());
        assert_eq!(test.len(), 2);
        for r in &test.reviews {
            assert!(!train.reviews.contains(r));
        }
    }

    #[test]
    fn split_is_seed_stable() {
        let ds = dataset();
        let (a, _) = ds.split(0.2, 7);
        let (b, _) = ds.split(0.2, 7);
        assert_eq!(a.reviews, b.reviews);
    }
}
