//! Meltemi Studio site - contact pipeline and headless UI controllers.
//!
//! This library implements the interactive behavior of a bilingual
//! (English/Greek) studio website: the contact form pipeline from client
//! validation through templated email dispatch, plus the language toggle
//! and portfolio/blog filter controllers behind explicit view traits.
//!
//! # Architecture
//!
//! - **models**: the contact submission wire format and its validation
//! - **domain**: value objects (email address, display language)
//! - **content**: notification and auto-reply email documents
//! - **resend**: client for the transactional-email provider API
//! - **services**: the submission pipeline (validate, render, dispatch)
//! - **server**: axum HTTP surface exposing `POST /api/contact`
//! - **ui**: headless controllers for the form, language toggle, filters
//! - **config**: environment-driven configuration
//! - **error**: error types per subsystem
//! - **metrics**: counters over submissions, emails, provider calls

pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod resend;
pub mod server;
pub mod services;
pub mod ui;

pub use config::Config;
pub use domain::{EmailAddress, Language};
pub use error::{ConfigError, MailApiError, SubmitError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{BudgetBand, ContactSubmission, SubmissionError};
pub use resend::{Mailer, OutboundEmail, ResendClient, ResendMailer, SendReceipt};
pub use server::AppState;
pub use services::{SubmissionService, SubmissionServiceError, SubmissionServiceImpl};
