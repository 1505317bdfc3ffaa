// TF-IDF vectorizer with a fitted, capped vocabulary.
//
// Unlike keyword-extraction style TF-IDF (which ranks words within one
// document set), this vectorizer fixes a vocabulary at training time so the
// classifier's weight vector and every future input share the same feature
// indexing. The vocabulary is sorted alphabetically; a token's position in
// it IS its feature index.
//
// Weighting: raw term count × smooth IDF (ln((1+n)/(1+df)) + 1), then
// L2 normalization of the resulting vector.

use std::collections::HashMap;

use anyhow::{bail, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::text;

pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// A fitted TF-IDF vectorizer: alphabetical vocabulary plus per-term IDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Feature terms, sorted alphabetically. Index in this Vec = feature index.
    vocabulary: Vec<String>,
    /// IDF weight for the term at the same index.
    idf: Vec<f64>,
    /// Vocabulary cap applied during fitting.
    pub max_features: usize,
}

impl TfidfVectorizer {
    /// Fit a vocabulary and IDF table from a cleaned document corpus.
    ///
    /// When the corpus yields more than `max_features` distinct terms, the
    /// most frequent terms (by total corpus count, ties broken
    /// alphabetically) are kept.
    pub fn fit(documents: &[String], max_features: usize) -> Result<Self> {
        if documents.is_empty() {
            bail!("Cannot fit a vectorizer on an empty corpus");
        }

        let mut total_counts: HashMap<String, u64> = HashMap::new();
        let mut doc_counts: HashMap<String, u64> = HashMap::new();

        for doc in documents {
            let tokens = text::tokenize(doc);
            let mut seen: HashMap<&str, ()> = HashMap::new();
            for token in tokens {
                *total_counts.entry(token.to_string()).or_insert(0) += 1;
                if seen.insert(token, ()).is_none() {
                    *doc_counts.entry(token.to_string()).or_insert(0) += 1;
                }
            }
        }

        if total_counts.is_empty() {
            bail!(
                "Corpus of {} documents produced no tokens — reviews may be empty after cleaning",
                documents.len()
            );
        }

        // Cap the vocabulary: most frequent first, alphabetical tie-break,
        // then re-sort the survivors alphabetically for stable indexing.
        let mut ranked: Vec<(String, u64)> = total_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_features);

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        vocabulary.sort();

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = doc_counts.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        info!(
            vocabulary = vocabulary.len(),
            documents = documents.len(),
            "Fitted TF-IDF vectorizer"
        );

        Ok(Self {
            vocabulary,
            idf,
            max_features,
        })
    }

    /// Transform one cleaned document into an L2-normalized TF-IDF vector.
    ///
    /// Tokens outside the fitted vocabulary are ignored. An input with no
    /// known tokens yields the zero vector.
    pub fn transform(&self, cleaned: &str) -> Array1<f64> {
        let mut weights = Array1::<f64>::zeros(self.vocabulary.len());

        for token in text::tokenize(cleaned) {
            // Vocabulary is sorted, so feature lookup is a binary search.
            if let Ok(idx) = self.vocabulary.binary_search_by(|v| v.as_str().cmp(token)) {
                weights[idx] += self.idf[idx];
            }
        }

        let norm = weights.dot(&weights).sqrt();
        if norm > 0.0 {
            weights.mapv_inplace(|w| w / norm);
        }
        weights
    }

    /// Number of features (= length of every transformed vector).
    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// The term at a given feature index.
    pub fn feature_name(&self, index: usize) -> &str {
        &self.vocabulary[index]
    }

    /// All terms in feature-index order.
    pub fn feature_names(&self) -> &[String] {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "great film great acting".to_string(),
            "terrible film awful plot".to_string(),
            "great plot terrible acting".to_string(),
        ]
    }

    #[test]
    fn vocabulary_is_alphabetical() {
        let v = TfidfVectorizer::fit(&corpus(), 100).unwrap();
        let names = v.feature_names();
        let mut sorted = names.to_vec();
        sorted.sort();
        assert_eq!(names, sorted.as_slice());
    }

    #[test]
    fn transform_is_unit_norm_for_known_input() {
        let v = TfidfVectorizer::fit(&corpus(), 100).unwrap();
        let vec = v.transform("great film");
        let norm = vec.dot(&vec).sqrt();
        assert!((norm - 1.0).abs() < 1e-9, "norm was {norm}");
    }

    #[test]
    fn unseen_tokens_yield_zero_vector() {
        let v = TfidfVectorizer::fit(&corpus(), 100).unwrap();
        let vec = v.transform("zyx qqq");
        assert!(vec.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn max_features_caps_vocabulary() {
        let v = TfidfVectorizer::fit(&corpus(), 3).unwrap();
        assert_eq!(v.n_features(), 3);
        // "film" and "great" appear most often and must survive the cap.
        assert!(v.feature_names().contains(&"great".to_string()));
        assert!(v.feature_names().contains(&"film".to_string()));
    }

    #[test]
    fn ubiquitous_terms_are_downweighted() {
        let v = TfidfVectorizer::fit(&corpus(), 100).unwrap();
        // "film" appears in 2 of 3 docs; "awful" in 1 of 3.
        let film = v.transform("film");
        let awful = v.transform("awful");
        let film_idx = v.feature_names().iter().position(|t| t == "film").unwrap();
        let awful_idx = v.feature_names().iter().position(|t| t == "awful").unwrap();
        // Single-token vectors are unit norm, so compare raw IDF instead.
        assert!(v.idf[awful_idx] > v.idf[film_idx]);
        assert!(film[film_idx] > 0.0 && awful[awful_idx] > 0.0);
    }

    #[test]
    fn empty_corpus_fails() {
        assert!(TfidfVectorizer::fit(&[], 100).is_err());
    }
}
