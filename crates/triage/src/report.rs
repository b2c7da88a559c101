//! Triage results and failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::request::TriageId;

/// The fixed-shape triage result.
///
/// This is *not* a domain record. It is an insight rendered to the vet; it is
/// never persisted by this layer and never mutates domain state. All three
/// fields are required — a response missing any of them is a failure, not a
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageReport {
    /// The likely condition based on the medical history.
    pub likely_condition: String,
    /// Suggested questions for the vet to ask.
    pub triage_questions: Vec<String>,
    /// Suggested treatments for the likely condition.
    pub suggested_treatments: Vec<String>,
}

/// A completed triage call, tagged with the submission it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageOutcome {
    pub request_id: TriageId,
    pub report: TriageReport,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TriageError {
    /// Input rejected before any model call was made.
    #[error("medical history too short: {length} characters (minimum {minimum})")]
    InputTooShort { length: usize, minimum: usize },

    /// The model provider failed (transport, timeout, non-success status).
    #[error("triage provider error: {0}")]
    Provider(String),

    /// The provider answered, but not with the declared output shape.
    #[error("triage output did not match the expected shape: {0}")]
    MalformedOutput(String),
}
