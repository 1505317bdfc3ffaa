// Word-level attribution for linear models.
//
// A linear model's score is a sum of per-feature terms, so each word's
// contribution is simply its TF-IDF weight times the model coefficient at
// the same index. Ranking those products by absolute value names the words
// that pushed the verdict.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::features::TfidfVectorizer;

/// How many contributing words to surface.
pub const TOP_K: usize = 5;

/// Which direction a word pushed the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
}

/// One influential word and its signed contribution to the decision value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordContribution {
    pub word: String,
    pub score: f64,
    pub impact: Impact,
}

/// Rank the top-k contributing words present in the input.
///
/// Features absent from the input (zero TF-IDF weight) are skipped; an
/// empty result is valid and means no vocabulary word in the input carried
/// measurable weight.
pub fn top_contributions(
    vectorizer: &TfidfVectorizer,
    features: &Array1<f64>,
    coefficients: &Array1<f64>,
    k: usize,
) -> Vec<WordContribution> {
    let mut scored: Vec<(usize, f64)> = features
        .iter()
        .zip(coefficients.iter())
        .enumerate()
        .filter(|(_, (&w, _))| w > 0.0)
        .map(|(idx, (&w, &c))| (idx, w * c))
        .collect();

    scored.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
        .into_iter()
        .take(k)
        .map(|(idx, score)| WordContribution {
            word: vectorizer.feature_name(idx).to_string(),
            score,
            impact: if score > 0.0 {
                Impact::Positive
            } else {
                Impact::Negative
            },
        })
        .collect()
}
