use std::fmt::Debug;
use std::time::Duration;

use reqwest::Client;

use crate::{domain::ServerResponse, error::error_chain_fmt};

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("Failed to reach the signup endpoint")]
    Network(#[source] reqwest::Error),
    #[error("The signup endpoint sent back an unreadable response")]
    InvalidResponse(#[source] reqwest::Error),
}

impl Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Posts URL-encoded form fields and reads back a `ServerResponse`.
#[derive(Debug, Clone)]
pub struct FormSubmitter {
    http_client: Client,
}

impl FormSubmitter {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self { http_client })
    }

    /// Sends one POST to `target_url`. Any HTTP status is accepted as long
    /// as the body is a `ServerResponse`; nothing is retried.
    #[tracing::instrument(name = "Submitting signup form", skip(self, fields))]
    pub async fn submit(
        &self,
        target_url: &str,
        fields: &[(String, String)],
    ) -> Result<ServerResponse, SubmissionError> {
        let response = self
            .http_client
            .post(target_url)
            .form(fields)
            .send()
            .await
            .map_err(SubmissionError::Network)?;
        tracing::debug!(status = %response.status(), "Signup endpoint responded");

        response
            .json::<ServerResponse>()
            .await
            .map_err(SubmissionError::InvalidResponse)
    }
}
