// Feedback forwarding to a third-party form endpoint.
//
// The endpoint receives three form-encoded string fields: the analysis
// session id, the one-line analysis log, and the user's free-text feedback.
// Any non-success status is an error the caller surfaces to the user; there
// is no retry policy.

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::config::Config;

pub struct FeedbackClient {
    client: Client,
    form_url: String,
    entry_session: String,
    entry_log: String,
    entry_text: String,
}

impl FeedbackClient {
    pub fn new(
        form_url: String,
        entry_session: String,
        entry_log: String,
        entry_text: String,
    ) -> Self {
        Self {
            client: Client::new(),
            form_url,
            entry_session,
            entry_log,
            entry_text,
        }
    }

    /// Build a client from configuration. Fails when no endpoint is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let form_url = config.require_feedback()?.to_string();
        Ok(Self::new(
            form_url,
            config.feedback_entry_session.clone(),
            config.feedback_entry_log.clone(),
            config.feedback_entry_text.clone(),
        ))
    }

    /// Submit one feedback record. Non-2xx responses are errors.
    pub async fn submit(&self, session: &str, log: &str, feedback: &str) -> Result<()> {
        let form = [
            (self.entry_session.as_str(), session),
            (self.entry_log.as_str(), log),
            (self.entry_text.as_str(), feedback),
        ];

        let response = self
            .client
            .post(&self.form_url)
            .form(&form)
            .send()
            .await
            .context("Failed to reach the feedback endpoint")?;

        if !response.status().is_success() {
            anyhow::bail!("Feedback endpoint returned {}", response.status());
        }

        debug!(session, "Feedback submitted");
        Ok(())
    }
}
