use async_trait::async_trait;
use meltemi_site::error::{SubmitError, SubmitResult};
use meltemi_site::models::ContactSubmission;
use meltemi_site::ui::{ContactGateway, SubmissionOutcome};
use std::sync::{Arc, Mutex};

/// What the mock gateway answers with.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum GatewayScript {
    /// 200 with `success: true` and the given email id.
    Success { email_id: String },
    /// 2xx with an arbitrary body, e.g. a missing success flag.
    Accepted(SubmissionOutcome),
    /// Non-2xx with an optional server error message.
    Rejected { status: u16, message: Option<String> },
    /// The request never reached the server.
    NetworkFailure,
}

/// Mock contact gateway for testing.
///
/// Records every submission the controller sends and answers with a
/// scripted response.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockGateway {
    submissions: Arc<Mutex<Vec<ContactSubmission>>>,
    script: Arc<Mutex<GatewayScript>>,
}

#[allow(dead_code)]
impl MockGateway {
    /// Create a gateway that accepts every submission.
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(Mutex::new(Vec::new())),
            script: Arc::new(Mutex::new(GatewayScript::Success {
                email_id: "mock-email-1".to_string(),
            })),
        }
    }

    /// Change what the next submissions are answered with.
    pub fn respond_with(&self, script: GatewayScript) {
        *self.script.lock().unwrap() = script;
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactGateway for MockGateway {
    async fn submit(&self, submission: &ContactSubmission) -> SubmitResult<SubmissionOutcome> {
        self.submissions.lock().unwrap().push(submission.clone());

        let script = self.script.lock().unwrap().clone();
        match script {
            GatewayScript::Success { email_id } => Ok(SubmissionOutcome {
                success: true,
                message: Some("Message sent".to_string()),
                email_id: Some(email_id),
            }),
            GatewayScript::Accepted(outcome) => Ok(outcome),
            GatewayScript::Rejected { status, message } => {
                Err(SubmitError::Rejected { status, message })
            }
            GatewayScript::NetworkFailure => {
                Err(SubmitError::Network("connection refused".to_string()))
            }
        }
    }
}
