// Per-request analysis — the full clean → vectorize → classify → attribute
// chain for one review.
//
// This is the one place where the spec's two graceful downgrades live: a
// model without probability output falls back to its hard label with a fixed
// confidence, and a model without coefficients gets an informational note
// instead of an attribution table.

pub mod attribution;
pub mod wordmap;

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::features::TfidfVectorizer;
use crate::model::{ModelBundle, ModelKind, Sentiment, SentimentModel};
use crate::output::truncate_chars;

use self::attribution::WordContribution;
use self::wordmap::WordWeight;

/// Confidence reported when a model has no probability estimate.
const FALLBACK_CONFIDENCE: f64 = 1.0;

/// Note shown when attribution is unavailable or empty.
const NO_COEFFICIENTS_NOTE: &str =
    "This model does not expose interpretable coefficients, so no word breakdown is available.";
const NO_STRONG_WORDS_NOTE: &str = "No strong influential words found in the input.";

/// Input rejected before any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    Empty,
    Numeric,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Empty => f.write_str("Please enter a review to analyze."),
            InputError::Numeric => {
                f.write_str("Please enter a valid text review. Pure numbers won't work.")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Everything one analysis produces, for both terminal and web rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Fresh per-analysis session id, echoed back by the feedback form.
    pub session: String,
    pub model: ModelKind,
    pub sentiment: Sentiment,
    /// Predicted-class probability, or the fixed fallback value.
    pub confidence: f64,
    /// P(positive) when the model is calibrated.
    pub positive_probability: Option<f64>,
    pub threshold: f64,
    pub contributions: Vec<WordContribution>,
    /// Set when the contribution table is absent or empty.
    pub attribution_note: Option<String>,
    pub word_map: Vec<WordWeight>,
    /// One-line audit record: model, verdict, confidence, input preview.
    pub log_line: String,
}

/// Reject blank or purely numeric input before spending any compute on it.
pub fn validate_input(raw: &str) -> Result<(), InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.chars().all(|c| c.is_numeric()) {
        return Err(InputError::Numeric);
    }
    Ok(())
}

/// Analyze one review with the chosen bundled model at the given threshold.
pub fn analyze(
    bundle: &ModelBundle,
    kind: ModelKind,
    raw: &str,
    threshold: f64,
) -> Result<Analysis, InputError> {
    analyze_with(&bundle.vectorizer, bundle.get(kind), raw, threshold)
}

/// Analyze one review against an arbitrary model implementation.
pub fn analyze_with(
    vectorizer: &TfidfVectorizer,
    model: &dyn SentimentModel,
    raw: &str,
    threshold: f64,
) -> Result<Analysis, InputError> {
    validate_input(raw)?;
    let kind = model.kind();

    let cleaned = crate::text::clean(raw);
    let features = vectorizer.transform(&cleaned);

    let (sentiment, confidence, positive_probability) =
        match model.positive_probability(&features) {
            Some(p) => {
                let sentiment = if p >= threshold {
                    Sentiment::Positive
                } else {
                    Sentiment::Negative
                };
                (sentiment, p.max(1.0 - p), Some(p))
            }
            // Uncalibrated model: hard label, fixed confidence.
            None => (model.predict(&features), FALLBACK_CONFIDENCE, None),
        };

    let (contributions, attribution_note) = match model.coefficients() {
        Some(coefs) => {
            let top =
                attribution::top_contributions(vectorizer, &features, coefs, attribution::TOP_K);
            if top.is_empty() {
                (top, Some(NO_STRONG_WORDS_NOTE.to_string()))
            } else {
                (top, None)
            }
        }
        None => (Vec::new(), Some(NO_COEFFICIENTS_NOTE.to_string())),
    };

    let word_map = wordmap::word_frequencies(raw, wordmap::MAX_WORDS);

    let log_line = format!(
        "Used model {}, prediction: {}, confidence: {:.2}, input: {}",
        kind.display_name(),
        sentiment,
        confidence,
        truncate_chars(raw, 100)
    );

    debug!(
        model = kind.as_str(),
        sentiment = sentiment.as_str(),
        confidence,
        words = contributions.len(),
        "Analyzed review"
    );

    Ok(Analysis {
        session: Uuid::new_v4().to_string(),
        model: kind,
        sentiment,
        confidence,
        positive_probability,
        threshold,
        contributions,
        attribution_note,
        word_map,
        log_line,
    })
}
