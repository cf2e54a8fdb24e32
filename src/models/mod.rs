//! Wire models for the contact pipeline.
//!
//! This module contains the data structures exchanged between the form
//! controller and the submission endpoint, plus the validation rules both
//! sides apply.

pub mod submission;

pub use submission::{BudgetBand, ContactSubmission, SubmissionError};
