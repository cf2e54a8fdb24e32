//! Client-side HTTP port for the contact endpoint.
//!
//! Mirrors the provider client's shape: a synchronous `ureq` agent doing
//! the wire work, wrapped into an async trait via `spawn_blocking` so the
//! form controller can await it.

use crate::error::{SubmitError, SubmitResult};
use crate::models::ContactSubmission;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Parsed response body of the contact endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub email_id: Option<String>,
}

/// Port through which the form controller submits.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// Issue one POST with the submission. No retry.
    async fn submit(&self, submission: &ContactSubmission) -> SubmitResult<SubmissionOutcome>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP implementation posting to the site API.
#[derive(Clone)]
pub struct HttpContactGateway {
    endpoint: String,
    agent: Arc<ureq::Agent>,
}

impl HttpContactGateway {
    /// Create a gateway for the given site base URL.
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
            agent: Arc::new(agent),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn submit_blocking(&self, submission: &ContactSubmission) -> SubmitResult<SubmissionOutcome> {
        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(submission);

        match response {
            Ok(response) => {
                let body = response
                    .into_string()
                    .map_err(|e| SubmitError::Network(e.to_string()))?;
                serde_json::from_str(&body)
                    .map_err(|e| SubmitError::Network(format!("Invalid response body: {}", e)))
            }
            Err(ureq::Error::Status(status, response)) => {
                let message = response
                    .into_string()
                    .ok()
                    .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
                    .map(|body| body.error);
                Err(SubmitError::Rejected { status, message })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(SubmitError::Network(transport.to_string()))
            }
        }
    }
}

#[async_trait]
impl ContactGateway for HttpContactGateway {
    async fn submit(&self, submission: &ContactSubmission) -> SubmitResult<SubmissionOutcome> {
        let gateway = self.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || gateway.submit_blocking(&submission))
            .await
            .map_err(|e| SubmitError::Network(format!("Task join error: {}", e)))?
    }
}
