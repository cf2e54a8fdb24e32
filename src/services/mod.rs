//! Application service layer.
//!
//! Services contain the business logic of the contact pipeline and sit
//! between the HTTP handlers and the email provider client.

mod submission;

pub use submission::{SubmissionService, SubmissionServiceError, SubmissionServiceImpl};
