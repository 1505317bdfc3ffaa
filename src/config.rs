use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Nothing is hardcoded: the feedback form endpoint and its field names come
/// from env vars, and the .env file is loaded automatically at startup via
/// dotenvy. Only the model directory and dataset path have defaults.
pub struct Config {
    /// Directory holding the trained artifacts (vectorizer + model files)
    pub model_dir: PathBuf,
    /// CSV dataset used by `litmus train` (columns: review, sentiment)
    pub data_path: String,
    /// Third-party form endpoint that receives user feedback.
    /// When unset, the feedback surface is disabled rather than failing.
    pub feedback_url: Option<String>,
    /// Form field name carrying the session id
    pub feedback_entry_session: String,
    /// Form field name carrying the analysis log line
    pub feedback_entry_log: String,
    /// Form field name carrying the free-text feedback
    pub feedback_entry_text: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("LITMUS_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_dir());

        Ok(Self {
            model_dir,
            data_path: env::var("LITMUS_DATA_PATH").unwrap_or_else(|_| "./reviews.csv".to_string()),
            feedback_url: env::var("FEEDBACK_FORM_URL").ok().filter(|u| !u.is_empty()),
            feedback_entry_session: env::var("FEEDBACK_ENTRY_SESSION")
                .unwrap_or_else(|_| "session".to_string()),
            feedback_entry_log: env::var("FEEDBACK_ENTRY_LOG")
                .unwrap_or_else(|_| "log".to_string()),
            feedback_entry_text: env::var("FEEDBACK_ENTRY_TEXT")
                .unwrap_or_else(|_| "feedback".to_string()),
        })
    }

    /// Check that a feedback endpoint is configured.
    /// Call this before attempting to forward user feedback.
    pub fn require_feedback(&self) -> Result<&str> {
        match self.feedback_url.as_deref() {
            Some(url) => Ok(url),
            None => anyhow::bail!(
                "FEEDBACK_FORM_URL not set. Add it to your .env file to enable\n\
                 feedback submission. See .env.example for the required variables."
            ),
        }
    }
}

/// Default artifact location: the platform data dir, falling back to ./models
/// when no data dir is available (e.g. stripped-down containers).
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("litmus").join("models"))
        .unwrap_or_else(|| PathBuf::from("./models"))
}
